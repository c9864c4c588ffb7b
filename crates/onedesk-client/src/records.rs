//! Read-only domain records owned by the backend.
//!
//! The wire form is camelCase JSON; fields beyond what the access layer
//! and dashboards need are intentionally not mirrored here.
use onedesk_access::{CandidateLike, InterviewLike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub demand_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub current_company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub candidate_id: String,
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub demand_id: String,
    #[serde(default)]
    pub interviewer_name: String,
    #[serde(default)]
    pub interviewer_email: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub meet_link: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub openings: u32,
    #[serde(default)]
    pub status: String,
}

impl CandidateLike for Candidate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl InterviewLike for Interview {
    fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    fn interviewer_email(&self) -> Option<&str> {
        self.interviewer_email.as_deref()
    }
}
