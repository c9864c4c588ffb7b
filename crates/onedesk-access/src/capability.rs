//! Top-level capability registry.
//!
//! # Purpose
//! Describes the four portal areas (people, customers, talent, assessment)
//! with their display metadata, route prefix, and role allow-list.
//!
//! # Key invariants
//! - An EMPTY role allow-list means the capability is open to every role.
//! - Admins are admitted to every capability unconditionally.
use crate::{AccessError, Role, Viewer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityId {
    Hrms,
    Crms,
    Talent,
    Assessment,
}

/// Static descriptor for one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub id: CapabilityId,
    pub name: &'static str,
    pub full_name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    /// Empty means open to all roles.
    pub allowed_roles: &'static [Role],
}

pub static CAPABILITIES: &[Capability] = &[
    Capability {
        id: CapabilityId::Hrms,
        name: "HRMS",
        full_name: "People Management",
        icon: "users",
        color: "#3b82f6",
        description: "Manage associates, payroll, and HR operations",
        allowed_roles: &[],
    },
    Capability {
        id: CapabilityId::Crms,
        name: "CRMS",
        full_name: "Customer Relationship Management",
        icon: "briefcase",
        color: "#10b981",
        description: "Manage customers, leads, and sales",
        allowed_roles: &[Role::Admin, Role::MarketingManager, Role::OperationsManager],
    },
    Capability {
        id: CapabilityId::Talent,
        name: "Talent Mgmt",
        full_name: "Talent Management",
        icon: "graduation-cap",
        color: "#8b5cf6",
        description: "Recruitment, training, and performance",
        allowed_roles: &[],
    },
    Capability {
        id: CapabilityId::Assessment,
        name: "Assessment",
        full_name: "Assessment Portal",
        icon: "clipboard-check",
        color: "#f59e0b",
        description: "Conduct assessments and evaluations",
        allowed_roles: &[],
    },
];

impl CapabilityId {
    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityId::Hrms => "HRMS",
            CapabilityId::Crms => "CRMS",
            CapabilityId::Talent => "TalentManagement",
            CapabilityId::Assessment => "AssessmentPortal",
        }
    }

    pub fn route_prefix(self) -> &'static str {
        match self {
            CapabilityId::Hrms => "/hrms",
            CapabilityId::Crms => "/crms",
            CapabilityId::Talent => "/talent",
            CapabilityId::Assessment => "/assessment",
        }
    }

    /// The landing route selected when a capability is activated.
    pub fn default_route(self) -> &'static str {
        self.route_prefix()
    }

    pub fn descriptor(self) -> &'static Capability {
        // The registry covers every variant; keep the lookup total.
        CAPABILITIES
            .iter()
            .find(|capability| capability.id == self)
            .unwrap_or(&CAPABILITIES[0])
    }
}

impl std::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CapabilityId {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "HRMS" => Ok(CapabilityId::Hrms),
            "CRMS" => Ok(CapabilityId::Crms),
            "TalentManagement" => Ok(CapabilityId::Talent),
            "AssessmentPortal" => Ok(CapabilityId::Assessment),
            other => Err(AccessError::UnknownCapability(other.to_string())),
        }
    }
}

/// Whether the viewer may enter the capability at all.
///
/// Absent viewer denies; admins pass; otherwise an empty allow-list admits
/// everyone and a non-empty one requires the viewer's parsed role.
pub fn capability_access(viewer: Option<&Viewer>, capability: CapabilityId) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };
    if viewer.flags.is_admin {
        return true;
    }
    let allowed = capability.descriptor().allowed_roles;
    if allowed.is_empty() {
        return true;
    }
    match viewer.role {
        Some(role) => allowed.contains(&role),
        None => false,
    }
}
