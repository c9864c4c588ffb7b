//! Portal roles, talent-area roles, and the composite role-group
//! classification.
//!
//! # Purpose
//! Replaces scattered role-string comparisons with closed enums and a
//! `RoleFlags` value computed once per identity change. Every other module
//! consumes the flags instead of re-comparing strings.
//!
//! # Key invariants
//! - Parsing is case-insensitive; unknown strings parse to an error and
//!   deny by default downstream.
//! - Group memberships OR together (Operations Manager lands in both the
//!   HR and manager groups); this is not a strict hierarchy.
use crate::AccessError;
use serde::{Deserialize, Serialize};

/// Coarse portal-wide role as reported by the identity endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Hr,
    ProjectManager,
    MarketingManager,
    OperationsManager,
    Associate,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Hr => "HR",
            Role::ProjectManager => "Project Manager",
            Role::MarketingManager => "Marketing Manager",
            Role::OperationsManager => "Operations Manager",
            Role::Associate => "Associate",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Role> {
        let value = value.trim();
        [
            Role::Admin,
            Role::Hr,
            Role::ProjectManager,
            Role::MarketingManager,
            Role::OperationsManager,
            Role::Associate,
        ]
        .into_iter()
        .find(|role| role.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::parse(value).ok_or_else(|| AccessError::UnknownRole(value.to_string()))
    }
}

/// Finer role tier used inside the talent/recruitment area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentRole {
    SuperAdmin,
    Admin,
    HiringManager,
    Interviewer,
}

impl TalentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TalentRole::SuperAdmin => "super_admin",
            TalentRole::Admin => "admin",
            TalentRole::HiringManager => "hiring_manager",
            TalentRole::Interviewer => "interviewer",
        }
    }

    /// Whether this tier sees the full candidate/interview collections.
    pub fn sees_all_records(self) -> bool {
        matches!(
            self,
            TalentRole::SuperAdmin | TalentRole::Admin | TalentRole::HiringManager
        )
    }
}

impl std::fmt::Display for TalentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TalentRole {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(TalentRole::SuperAdmin),
            "admin" => Ok(TalentRole::Admin),
            "hiring_manager" => Ok(TalentRole::HiringManager),
            "interviewer" => Ok(TalentRole::Interviewer),
            other => Err(AccessError::UnknownTalentRole(other.to_string())),
        }
    }
}

/// Composite role-group tag consumed by the module allow-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    Admin,
    Hr,
    Manager,
    Associate,
}

/// Role-group memberships derived from role + designation.
///
/// Computed once per identity change and carried on the [`crate::Viewer`];
/// call sites pattern-match on these flags instead of comparing strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    pub is_admin: bool,
    pub is_operations_manager: bool,
    pub is_hr: bool,
    pub is_marketing_manager: bool,
    pub is_manager: bool,
    pub is_associate: bool,
}

// Designations that imply associate-group membership on their own.
const ASSOCIATE_DESIGNATIONS: &[&str] = &["developer", "software engineer"];

impl RoleFlags {
    /// Classify a parsed role plus free-form designation into group flags.
    ///
    /// Operations Manager is folded into the HR and marketing groups, and
    /// marketing into the manager group, matching how the portal widens
    /// those roles.
    pub fn classify(role: Option<Role>, designation: &str) -> Self {
        let is_admin = role == Some(Role::Admin);
        let is_operations_manager = role == Some(Role::OperationsManager);
        let is_hr = role == Some(Role::Hr) || is_operations_manager;
        let is_marketing_manager = role == Some(Role::MarketingManager) || is_operations_manager;
        let is_manager = role == Some(Role::ProjectManager) || is_marketing_manager;
        let is_associate = role == Some(Role::Associate)
            || ASSOCIATE_DESIGNATIONS
                .iter()
                .any(|named| named.eq_ignore_ascii_case(designation.trim()));
        Self {
            is_admin,
            is_operations_manager,
            is_hr,
            is_marketing_manager,
            is_manager,
            is_associate,
        }
    }

    pub fn is_in(self, group: RoleGroup) -> bool {
        match group {
            RoleGroup::Admin => self.is_admin,
            RoleGroup::Hr => self.is_hr,
            RoleGroup::Manager => self.is_manager,
            RoleGroup::Associate => self.is_associate,
        }
    }

    /// Map the portal groups onto the talent-area tier.
    ///
    /// Every unclassified identity lands on [`TalentRole::Interviewer`],
    /// the most restricted tier.
    pub fn talent_role(self) -> TalentRole {
        if self.is_admin {
            TalentRole::SuperAdmin
        } else if self.is_hr {
            TalentRole::Admin
        } else if self.is_manager || self.is_associate {
            TalentRole::HiringManager
        } else {
            TalentRole::Interviewer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_string_roundtrip() {
        let roles = [
            Role::Admin,
            Role::Hr,
            Role::ProjectManager,
            Role::MarketingManager,
            Role::OperationsManager,
            Role::Associate,
        ];

        for role in roles {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("operations manager"), Some(Role::OperationsManager));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("  hr "), Some(Role::Hr));
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert_eq!(Role::parse("Wizard"), None);
        assert!("Wizard".parse::<Role>().is_err());
    }

    #[test]
    fn operations_manager_widens_into_hr_and_manager_groups() {
        let flags = RoleFlags::classify(Some(Role::OperationsManager), "");
        assert!(flags.is_hr);
        assert!(flags.is_marketing_manager);
        assert!(flags.is_manager);
        assert!(!flags.is_admin);
        assert!(!flags.is_associate);
    }

    #[test]
    fn developer_designation_implies_associate_group() {
        let flags = RoleFlags::classify(None, "Software Engineer");
        assert!(flags.is_associate);
        assert_eq!(flags.talent_role(), TalentRole::HiringManager);
    }

    #[test]
    fn unknown_role_maps_to_interviewer_tier() {
        let flags = RoleFlags::classify(None, "Accountant");
        assert_eq!(flags, RoleFlags::default());
        assert_eq!(flags.talent_role(), TalentRole::Interviewer);
    }

    #[test]
    fn talent_tier_mapping_prefers_admin_then_hr() {
        assert_eq!(
            RoleFlags::classify(Some(Role::Admin), "").talent_role(),
            TalentRole::SuperAdmin
        );
        assert_eq!(
            RoleFlags::classify(Some(Role::Hr), "").talent_role(),
            TalentRole::Admin
        );
        assert_eq!(
            RoleFlags::classify(Some(Role::ProjectManager), "").talent_role(),
            TalentRole::HiringManager
        );
    }

    #[test]
    fn talent_role_wire_form_is_snake_case() {
        let serialized = serde_json::to_string(&TalentRole::HiringManager).expect("serialize");
        assert_eq!(serialized, "\"hiring_manager\"");
        let parsed: TalentRole = serde_json::from_str("\"super_admin\"").expect("deserialize");
        assert_eq!(parsed, TalentRole::SuperAdmin);
    }

    #[test]
    fn record_wide_tiers() {
        assert!(TalentRole::SuperAdmin.sees_all_records());
        assert!(TalentRole::Admin.sees_all_records());
        assert!(TalentRole::HiringManager.sees_all_records());
        assert!(!TalentRole::Interviewer.sees_all_records());
    }
}
