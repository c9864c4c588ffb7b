//! Canonical identity payload and the talent-area mapped identity.
//!
//! # Purpose
//! `Identity` mirrors the backend's identity endpoint; `TalentIdentity` is
//! the narrower user the recruitment area works with, including the
//! masquerade mechanics.
//!
//! # Key invariants
//! - `TalentIdentity::original_role` is fixed when the mapped identity is
//!   created and is never overwritten while masquerading; `restore_role`
//!   always recovers it.
use onedesk_access::{TalentRole, Viewer};
use serde::{Deserialize, Serialize};

/// Identity record as returned by the backend identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub designation_id: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl Identity {
    /// Derive the access-layer view of this identity.
    pub fn viewer(&self) -> Viewer {
        Viewer::new(&self.role, &self.designation, &self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentFeatures {
    pub dashboard: bool,
    pub demands: bool,
    pub candidates: bool,
    pub interviews: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentPermissions {
    pub is_super_admin: bool,
    pub can_manage_users: bool,
    pub features: TalentFeatures,
}

/// The recruitment area's user, mapped from the portal identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    role: TalentRole,
    original_role: TalentRole,
    pub permissions: TalentPermissions,
}

impl TalentIdentity {
    /// Map a portal identity onto the talent tier.
    pub fn derive(identity: &Identity, viewer: &Viewer) -> Self {
        let role = viewer.talent_role;
        let id = if identity.email.is_empty() {
            "unknown".to_string()
        } else {
            identity.email.clone()
        };
        let name = if identity.name.is_empty() {
            "Unknown User".to_string()
        } else {
            identity.name.clone()
        };
        Self {
            id,
            name,
            email: identity.email.clone(),
            role,
            original_role: role,
            permissions: TalentPermissions {
                is_super_admin: viewer.flags.is_admin,
                can_manage_users: viewer.flags.is_admin || viewer.flags.is_hr,
                features: TalentFeatures {
                    dashboard: true,
                    demands: true,
                    candidates: true,
                    interviews: true,
                },
            },
        }
    }

    pub fn role(&self) -> TalentRole {
        self.role
    }

    pub fn original_role(&self) -> TalentRole {
        self.original_role
    }

    /// Masquerade as another tier; the original role stays recoverable.
    pub fn switch_role(&mut self, role: TalentRole) {
        self.role = role;
    }

    pub fn restore_role(&mut self) {
        self.role = self.original_role;
    }

    /// Viewer for visibility filtering under the CURRENT (possibly
    /// masqueraded) tier.
    pub fn viewer(&self) -> Viewer {
        let mut viewer = Viewer::new("", "", &self.email);
        viewer.talent_role = self.role;
        viewer
    }
}
