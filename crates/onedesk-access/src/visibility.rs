//! Record-visibility filtering for the talent area.
//!
//! # Purpose
//! Narrows candidate and interview collections to what the viewer's talent
//! tier may see. Administrative tiers see everything; interviewers see
//! only records reachable through interviews assigned to their email.
//!
//! # Key invariants
//! - Output ordering always matches input ordering (stable filter).
//! - Email comparison is case-insensitive; an interview without an
//!   interviewer email never matches anyone.
//! - An absent viewer sees nothing.
use crate::Viewer;
use std::collections::HashSet;

/// Accessor for candidate records; implemented by the client DTOs.
pub trait CandidateLike {
    fn id(&self) -> &str;
}

/// Accessor for interview records; implemented by the client DTOs.
pub trait InterviewLike {
    fn candidate_id(&self) -> &str;
    fn interviewer_email(&self) -> Option<&str>;
}

fn assigned_to(interview: &impl InterviewLike, email: &str) -> bool {
    match interview.interviewer_email() {
        Some(assigned) => assigned.eq_ignore_ascii_case(email),
        None => false,
    }
}

/// Candidates the viewer may see.
///
/// Interviewer visibility is transitive: collect the candidate ids from
/// interviews assigned to the viewer, then keep candidates whose id is in
/// that set.
pub fn visible_candidates<'a, C, I>(
    candidates: &'a [C],
    interviews: &[I],
    viewer: Option<&Viewer>,
) -> Vec<&'a C>
where
    C: CandidateLike,
    I: InterviewLike,
{
    let Some(viewer) = viewer else {
        return Vec::new();
    };
    if viewer.talent_role.sees_all_records() {
        return candidates.iter().collect();
    }

    let assigned_ids: HashSet<&str> = interviews
        .iter()
        .filter(|interview| assigned_to(*interview, &viewer.email))
        .map(|interview| interview.candidate_id())
        .collect();

    candidates
        .iter()
        .filter(|candidate| assigned_ids.contains(candidate.id()))
        .collect()
}

/// Interviews the viewer may see; the email rule applied directly.
pub fn visible_interviews<'a, I>(interviews: &'a [I], viewer: Option<&Viewer>) -> Vec<&'a I>
where
    I: InterviewLike,
{
    let Some(viewer) = viewer else {
        return Vec::new();
    };
    if viewer.talent_role.sees_all_records() {
        return interviews.iter().collect();
    }

    interviews
        .iter()
        .filter(|interview| assigned_to(*interview, &viewer.email))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCandidate {
        id: &'static str,
    }

    struct TestInterview {
        candidate_id: &'static str,
        interviewer_email: Option<&'static str>,
    }

    impl CandidateLike for TestCandidate {
        fn id(&self) -> &str {
            self.id
        }
    }

    impl InterviewLike for TestInterview {
        fn candidate_id(&self) -> &str {
            self.candidate_id
        }

        fn interviewer_email(&self) -> Option<&str> {
            self.interviewer_email
        }
    }

    fn candidates() -> Vec<TestCandidate> {
        vec![
            TestCandidate { id: "1" },
            TestCandidate { id: "2" },
            TestCandidate { id: "3" },
        ]
    }

    // An unknown portal role classifies into the interviewer tier.
    fn interviewer(email: &str) -> Viewer {
        Viewer::new("Contractor", "", email)
    }

    #[test]
    fn administrative_tiers_see_everything_in_order() {
        let all = candidates();
        let interviews: Vec<TestInterview> = Vec::new();
        for role in ["Admin", "HR", "Project Manager"] {
            let viewer = Viewer::new(role, "", "x@example.com");
            let visible = visible_candidates(&all, &interviews, Some(&viewer));
            let ids: Vec<&str> = visible.iter().map(|candidate| candidate.id()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
    }

    #[test]
    fn interviewer_sees_only_assigned_candidates() {
        let all = candidates();
        let interviews = vec![TestInterview {
            candidate_id: "1",
            interviewer_email: Some("A@x.com"),
        }];
        let visible = visible_candidates(&all, &interviews, Some(&interviewer("a@x.com")));
        let ids: Vec<&str> = visible.iter().map(|candidate| candidate.id()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn no_interviews_means_no_visible_candidates() {
        let all = candidates();
        let interviews: Vec<TestInterview> = Vec::new();
        assert!(visible_candidates(&all, &interviews, Some(&interviewer("a@x.com"))).is_empty());
    }

    #[test]
    fn interview_without_email_never_matches() {
        let all = candidates();
        let interviews = vec![TestInterview {
            candidate_id: "2",
            interviewer_email: None,
        }];
        assert!(visible_candidates(&all, &interviews, Some(&interviewer("a@x.com"))).is_empty());
    }

    #[test]
    fn absent_viewer_sees_nothing() {
        let all = candidates();
        let interviews = vec![TestInterview {
            candidate_id: "1",
            interviewer_email: Some("a@x.com"),
        }];
        assert!(visible_candidates(&all, &interviews, None).is_empty());
        assert!(visible_interviews(&interviews, None).is_empty());
    }

    #[test]
    fn interviewer_filter_preserves_input_order() {
        let all = candidates();
        let interviews = vec![
            TestInterview {
                candidate_id: "3",
                interviewer_email: Some("a@x.com"),
            },
            TestInterview {
                candidate_id: "1",
                interviewer_email: Some("a@x.com"),
            },
        ];
        let visible = visible_candidates(&all, &interviews, Some(&interviewer("a@x.com")));
        let ids: Vec<&str> = visible.iter().map(|candidate| candidate.id()).collect();
        // Join order does not reorder the candidate collection.
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn interviews_filter_directly_by_email() {
        let interviews = vec![
            TestInterview {
                candidate_id: "1",
                interviewer_email: Some("A@X.com"),
            },
            TestInterview {
                candidate_id: "2",
                interviewer_email: Some("b@x.com"),
            },
        ];
        let visible = visible_interviews(&interviews, Some(&interviewer("a@x.com")));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].candidate_id(), "1");
    }
}
