//! Viewer identity view consumed by the pure access layer.
//!
//! # Purpose
//! Carries the raw identity strings plus the role classification derived
//! from them, so policy, menu, and visibility code never re-parse roles.
use crate::{Role, RoleFlags, TalentRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    /// Role string exactly as the backend reported it.
    pub role_name: String,
    /// Parsed portal role; `None` for roles outside the closed set.
    pub role: Option<Role>,
    /// Group flags classified once at construction.
    pub flags: RoleFlags,
    /// Talent-area tier derived from the group flags.
    pub talent_role: TalentRole,
    pub email: String,
    pub designation: String,
}

impl Viewer {
    pub fn new(role_name: &str, designation: &str, email: &str) -> Self {
        let role = Role::parse(role_name);
        let flags = RoleFlags::classify(role, designation);
        Self {
            role_name: role_name.to_string(),
            role,
            flags,
            talent_role: flags.talent_role(),
            email: email.to_string(),
            designation: designation.to_string(),
        }
    }
}
