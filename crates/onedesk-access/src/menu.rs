//! Compiled-in navigation menus and their role/designation filtering.
//!
//! # Purpose
//! Holds the static section/item tables for each capability and derives
//! the visible menu for a viewer. Menus are recomputed per call and never
//! persisted.
//!
//! # Key invariants
//! - Designation exclusions are applied before role allow-lists.
//! - Allow-lists match the viewer's role OR designation, case-insensitively;
//!   an empty list admits everyone.
//! - Sections left with zero visible items are dropped entirely.
use crate::{CapabilityId, Viewer};

/// Navigation target of a menu entry: a route, or a named UI action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Route(&'static str),
    Action(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub target: MenuTarget,
    pub icon: &'static str,
    pub label: &'static str,
    /// Exact-match highlighting for index routes.
    pub end: bool,
    /// Empty means visible to everyone.
    pub roles: &'static [&'static str],
    pub exclude_designations: &'static [&'static str],
}

impl MenuItem {
    pub const fn route(route: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self {
            target: MenuTarget::Route(route),
            icon,
            label,
            end: false,
            roles: &[],
            exclude_designations: &[],
        }
    }

    pub const fn action(name: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self {
            target: MenuTarget::Action(name),
            icon,
            label,
            end: false,
            roles: &[],
            exclude_designations: &[],
        }
    }

    pub const fn exact(mut self) -> Self {
        self.end = true;
        self
    }

    pub const fn roles(mut self, roles: &'static [&'static str]) -> Self {
        self.roles = roles;
        self
    }

    pub const fn exclude(mut self, designations: &'static [&'static str]) -> Self {
        self.exclude_designations = designations;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuSection {
    pub section: &'static str,
    /// Section-level allow-list; empty admits everyone.
    pub roles: &'static [&'static str],
    pub items: &'static [MenuItem],
}

/// A section after filtering, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSection {
    pub section: &'static str,
    pub items: Vec<&'static MenuItem>,
}

static HRMS_MENU: &[MenuSection] = &[
    MenuSection {
        section: "Overview",
        roles: &[],
        items: &[MenuItem::route("/hrms", "layout-dashboard", "Dashboard").exact()],
    },
    MenuSection {
        section: "HR Management",
        roles: &[],
        items: &[
            MenuItem::route("/hrms/associates", "users", "Associates")
                .roles(&["Admin", "Project Manager", "HR", "Operations Manager"]),
            MenuItem::route("/hrms/payroll", "wallet", "Payroll").roles(&["Admin"]),
            MenuItem::route("/hrms/assets", "package", "Asset Management"),
            MenuItem::route("/hrms/org-chart", "users", "Org Chart"),
        ],
    },
    MenuSection {
        section: "Projects",
        roles: &[],
        items: &[
            MenuItem::route("/hrms/projects", "folder-kanban", "Projects")
                .roles(&["Admin", "Project Manager"]),
            MenuItem::route("/hrms/allocations", "calendar-days", "Allocations"),
            MenuItem::route("/hrms/timesheets", "clock", "Timesheets"),
        ],
    },
    MenuSection {
        section: "Finance",
        roles: &["Admin"],
        items: &[
            MenuItem::route("/hrms/expenses", "receipt", "Expenses"),
            MenuItem::route("/hrms/currency", "dollar-sign", "Currency Rates"),
        ],
    },
    MenuSection {
        section: "My Profile",
        roles: &[],
        items: &[
            MenuItem::route("/hrms/profile", "user", "Personal Info"),
            MenuItem::route("/hrms/paystructure", "dollar-sign", "Pay Structure"),
        ],
    },
];

static CRMS_MENU: &[MenuSection] = &[
    MenuSection {
        section: "Overview",
        roles: &[],
        items: &[MenuItem::route("/crms", "layout-dashboard", "Dashboard").exact()],
    },
    MenuSection {
        section: "Sales",
        roles: &[],
        items: &[
            MenuItem::route("/crms/leads", "user-plus", "Leads"),
            MenuItem::route("/crms/opportunities", "target", "Opportunities"),
            MenuItem::route("/crms/deals", "handshake", "Deals")
                .exclude(&["Marketing Manager", "Operations Manager"]),
        ],
    },
    MenuSection {
        section: "Customers",
        roles: &[],
        items: &[
            MenuItem::route("/crms/customers", "building-2", "Customers"),
            MenuItem::route("/crms/contacts", "contact", "Contacts"),
            MenuItem::route("/crms/invoices", "file-text", "Invoices")
                .exclude(&["Marketing Manager", "Operations Manager"]),
        ],
    },
    MenuSection {
        section: "Finance Overview",
        roles: &[],
        items: &[MenuItem::route("/crms/finance", "dollar-sign", "Finance View").roles(&["Admin"])],
    },
    MenuSection {
        section: "Activities",
        roles: &[],
        items: &[
            MenuItem::route("/crms/tasks", "clipboard-check", "Tasks"),
            MenuItem::route("/crms/calls", "phone", "Call Logs"),
        ],
    },
];

static TALENT_MENU: &[MenuSection] = &[
    MenuSection {
        section: "Overview",
        roles: &[],
        items: &[MenuItem::route("/talent", "layout-dashboard", "Dashboard").exact()],
    },
    MenuSection {
        section: "Recruitment",
        roles: &[],
        items: &[
            MenuItem::route("/talent/demands", "briefcase", "Demands"),
            MenuItem::route("/talent/candidates", "user-plus", "Candidates"),
            MenuItem::route("/talent/interviews", "calendar-days", "Interviews"),
        ],
    },
    MenuSection {
        section: "Development",
        roles: &[],
        items: &[
            MenuItem::route("/talent/training", "book-open", "Training Programs"),
            MenuItem::route("/talent/performance", "award", "Performance Reviews"),
            MenuItem::route("/talent/goals", "target", "Goals & OKRs"),
        ],
    },
    MenuSection {
        section: "System",
        roles: &[],
        items: &[MenuItem::action("open-talent-settings", "settings", "Settings")
            .roles(&["super_admin", "admin", "hiring_manager"])],
    },
];

static ASSESSMENT_MENU: &[MenuSection] = &[
    MenuSection {
        section: "Overview",
        roles: &[],
        items: &[MenuItem::route("/assessment", "layout-dashboard", "Dashboard").exact()],
    },
    MenuSection {
        section: "Portals",
        roles: &[],
        items: &[
            MenuItem::route("/assessment/admin", "shield", "Admin Portal").roles(&["Admin"]),
            MenuItem::route("/assessment/examiner", "book-open", "Examiner Portal")
                .roles(&["Admin", "Examiner"]),
            MenuItem::route("/assessment/candidate", "graduation-cap", "Candidate Portal")
                .roles(&["Admin", "Candidate"]),
        ],
    },
    MenuSection {
        section: "Assessments",
        roles: &[],
        items: &[
            MenuItem::route("/assessment/list", "clipboard-check", "All Assessments"),
            MenuItem::route("/assessment/create", "file-text", "Create Assessment"),
            MenuItem::route("/assessment/learning", "book-open", "Learning Materials"),
            MenuItem::route("/assessment/questions", "file-question", "Question Bank"),
        ],
    },
    MenuSection {
        section: "Participants",
        roles: &[],
        items: &[
            MenuItem::route("/assessment/candidates", "user-check", "Candidates"),
            MenuItem::route("/assessment/invitations", "user-plus", "Invitations"),
        ],
    },
    MenuSection {
        section: "Analytics",
        roles: &[],
        items: &[
            MenuItem::route("/assessment/reports", "bar-chart-3", "Reports"),
            MenuItem::route("/assessment/analytics", "trending-up", "Analytics"),
        ],
    },
];

impl CapabilityId {
    pub fn menu(self) -> &'static [MenuSection] {
        match self {
            CapabilityId::Hrms => HRMS_MENU,
            CapabilityId::Crms => CRMS_MENU,
            CapabilityId::Talent => TALENT_MENU,
            CapabilityId::Assessment => ASSESSMENT_MENU,
        }
    }
}

/// Whether one allow-list/exclusion pair admits the viewer.
fn allows(
    viewer: &Viewer,
    roles: &'static [&'static str],
    exclude_designations: &'static [&'static str],
) -> bool {
    if viewer.flags.is_admin {
        return true;
    }
    // Exclusions win over any allow-list membership.
    if exclude_designations
        .iter()
        .any(|excluded| matches_identity(viewer, excluded))
    {
        return false;
    }
    if roles.is_empty() {
        return true;
    }
    roles.iter().any(|allowed| matches_identity(viewer, allowed))
}

fn matches_identity(viewer: &Viewer, name: &str) -> bool {
    name.eq_ignore_ascii_case(&viewer.role_name) || name.eq_ignore_ascii_case(&viewer.designation)
}

/// Derive the visible menu for the active capability.
pub fn menu_for(capability: CapabilityId, viewer: Option<&Viewer>) -> Vec<VisibleSection> {
    filter_sections(capability.menu(), viewer)
}

/// Apply the section- and item-level rules to a menu table.
pub fn filter_sections(
    sections: &'static [MenuSection],
    viewer: Option<&Viewer>,
) -> Vec<VisibleSection> {
    let Some(viewer) = viewer else {
        return Vec::new();
    };
    sections
        .iter()
        .filter(|section| allows(viewer, section.roles, &[]))
        .filter_map(|section| {
            let items: Vec<&'static MenuItem> = section
                .items
                .iter()
                .filter(|item| allows(viewer, item.roles, item.exclude_designations))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(VisibleSection {
                    section: section.section,
                    items,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sections: &[VisibleSection], section: &str) -> Vec<&'static str> {
        sections
            .iter()
            .find(|visible| visible.section == section)
            .map(|visible| visible.items.iter().map(|item| item.label).collect())
            .unwrap_or_default()
    }

    #[test]
    fn admin_sees_the_full_menu() {
        let admin = Viewer::new("Admin", "", "root@example.com");
        let menu = menu_for(CapabilityId::Hrms, Some(&admin));
        assert_eq!(menu.len(), HRMS_MENU.len());
    }

    #[test]
    fn absent_viewer_gets_no_menu() {
        assert!(menu_for(CapabilityId::Hrms, None).is_empty());
    }

    #[test]
    fn restricted_items_are_dropped_per_role() {
        let associate = Viewer::new("Associate", "", "a@example.com");
        let menu = menu_for(CapabilityId::Hrms, Some(&associate));
        let hr_items = labels(&menu, "HR Management");
        assert!(!hr_items.contains(&"Associates"));
        assert!(!hr_items.contains(&"Payroll"));
        assert!(hr_items.contains(&"Org Chart"));
    }

    #[test]
    fn admin_only_sections_are_dropped_entirely() {
        let hr = Viewer::new("HR", "", "pat@example.com");
        let menu = menu_for(CapabilityId::Hrms, Some(&hr));
        assert!(menu.iter().all(|section| section.section != "Finance"));
    }

    #[test]
    fn designation_exclusions_beat_allow_lists() {
        let ops = Viewer::new("Operations Manager", "", "ops@example.com");
        let menu = menu_for(CapabilityId::Crms, Some(&ops));
        let sales = labels(&menu, "Sales");
        assert!(sales.contains(&"Leads"));
        assert!(!sales.contains(&"Deals"));
        let customers = labels(&menu, "Customers");
        assert!(!customers.contains(&"Invoices"));
    }

    #[test]
    fn section_with_all_items_excluded_is_omitted() {
        // Finance Overview holds a single admin-only item, so it must
        // vanish for everyone else rather than render empty.
        let marketing = Viewer::new("Marketing Manager", "", "mm@example.com");
        let menu = menu_for(CapabilityId::Crms, Some(&marketing));
        assert!(menu.iter().all(|section| section.section != "Finance Overview"));
    }

    #[test]
    fn designation_can_satisfy_an_allow_list() {
        let examiner = Viewer::new("Contractor", "Examiner", "ex@example.com");
        let menu = menu_for(CapabilityId::Assessment, Some(&examiner));
        let portals = labels(&menu, "Portals");
        assert_eq!(portals, vec!["Examiner Portal"]);
    }

    #[test]
    fn section_emptied_by_designation_exclusions_is_omitted() {
        static LEADERSHIP_ONLY: &[MenuSection] = &[MenuSection {
            section: "Leadership",
            roles: &[],
            items: &[
                MenuItem::route("/x/budget", "wallet", "Budget").exclude(&["Team Lead"]),
                MenuItem::route("/x/reviews", "award", "Reviews").exclude(&["Team Lead"]),
            ],
        }];
        let lead = Viewer::new("Project Manager", "Team Lead", "lead@example.com");
        assert!(filter_sections(LEADERSHIP_ONLY, Some(&lead)).is_empty());

        let other = Viewer::new("Project Manager", "Architect", "arch@example.com");
        let visible = filter_sections(LEADERSHIP_ONLY, Some(&other));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].items.len(), 2);
    }

    #[test]
    fn action_items_filter_like_routes() {
        let hr = Viewer::new("HR", "", "pat@example.com");
        let menu = menu_for(CapabilityId::Talent, Some(&hr));
        // "admin"/"hiring_manager" tier strings never match a portal role,
        // so the System section disappears for non-admins.
        assert!(menu.iter().all(|section| section.section != "System"));
    }
}
