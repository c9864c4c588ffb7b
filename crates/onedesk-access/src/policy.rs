//! Per-module access policy.
//!
//! This module centralizes the module allow-lists so access decisions stay
//! consistent across every call site. Lookups are fail-closed: an id that
//! does not name a known module denies, and an absent viewer denies.
//! An empty allow-list means unrestricted, not denied.
use crate::{AccessError, RoleGroup, Viewer};
use serde::{Deserialize, Serialize};

/// Gated portal module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Dashboard,
    Associates,
    Payroll,
    Assets,
    Profile,
    OrgChart,
    Projects,
    Allocations,
    Timesheets,
    Expenses,
    Customers,
    Demands,
    Candidates,
    Interviews,
}

impl Module {
    pub const ALL: [Module; 14] = [
        Module::Dashboard,
        Module::Associates,
        Module::Payroll,
        Module::Assets,
        Module::Profile,
        Module::OrgChart,
        Module::Projects,
        Module::Allocations,
        Module::Timesheets,
        Module::Expenses,
        Module::Customers,
        Module::Demands,
        Module::Candidates,
        Module::Interviews,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Associates => "associates",
            Module::Payroll => "payroll",
            Module::Assets => "assets",
            Module::Profile => "profile",
            Module::OrgChart => "org-chart",
            Module::Projects => "projects",
            Module::Allocations => "allocations",
            Module::Timesheets => "timesheets",
            Module::Expenses => "expenses",
            Module::Customers => "customers",
            Module::Demands => "demands",
            Module::Candidates => "candidates",
            Module::Interviews => "interviews",
        }
    }

    pub fn allow_list(self) -> &'static [RoleGroup] {
        MODULE_POLICIES
            .iter()
            .find(|policy| policy.module == self)
            .map(|policy| policy.allowed)
            .unwrap_or(DENY_ALL)
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Module {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|module| module.as_str() == value)
            .ok_or_else(|| AccessError::UnknownModule(value.to_string()))
    }
}

/// One module's allow-list entry.
#[derive(Debug, Clone, Copy)]
pub struct ModulePolicy {
    pub module: Module,
    /// Empty means unrestricted.
    pub allowed: &'static [RoleGroup],
}

// Sentinel used when a module is missing from the table; an empty slice
// would read as "unrestricted", so completeness is also asserted in tests.
const DENY_ALL: &[RoleGroup] = &[RoleGroup::Admin];

pub static MODULE_POLICIES: &[ModulePolicy] = &[
    ModulePolicy {
        module: Module::Dashboard,
        allowed: &[RoleGroup::Hr, RoleGroup::Manager, RoleGroup::Associate],
    },
    ModulePolicy {
        module: Module::Associates,
        allowed: &[RoleGroup::Hr, RoleGroup::Manager],
    },
    ModulePolicy {
        module: Module::Payroll,
        allowed: &[RoleGroup::Hr, RoleGroup::Associate],
    },
    ModulePolicy {
        module: Module::Assets,
        allowed: &[RoleGroup::Hr],
    },
    ModulePolicy {
        module: Module::Profile,
        allowed: &[RoleGroup::Hr],
    },
    ModulePolicy {
        module: Module::OrgChart,
        allowed: &[],
    },
    ModulePolicy {
        module: Module::Projects,
        allowed: &[RoleGroup::Manager],
    },
    ModulePolicy {
        module: Module::Allocations,
        allowed: &[RoleGroup::Manager, RoleGroup::Associate],
    },
    ModulePolicy {
        module: Module::Timesheets,
        allowed: &[RoleGroup::Manager, RoleGroup::Associate],
    },
    ModulePolicy {
        module: Module::Expenses,
        allowed: &[RoleGroup::Manager],
    },
    ModulePolicy {
        module: Module::Customers,
        allowed: &[RoleGroup::Manager],
    },
    ModulePolicy {
        module: Module::Demands,
        allowed: &[RoleGroup::Hr, RoleGroup::Manager, RoleGroup::Associate],
    },
    ModulePolicy {
        module: Module::Candidates,
        allowed: &[RoleGroup::Hr, RoleGroup::Manager, RoleGroup::Associate],
    },
    ModulePolicy {
        module: Module::Interviews,
        allowed: &[RoleGroup::Hr, RoleGroup::Manager, RoleGroup::Associate],
    },
];

/// Decide whether the viewer may use the module.
///
/// Pure over identity + static config; never errors and never logs.
pub fn module_access(viewer: Option<&Viewer>, module: Module) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };
    if viewer.flags.is_admin {
        return true;
    }
    let allowed = module.allow_list();
    if allowed.is_empty() {
        return true;
    }
    allowed.iter().any(|group| viewer.flags.is_in(*group))
}

/// String-id variant of [`module_access`]; unknown ids deny.
pub fn module_access_id(viewer: Option<&Viewer>, module_id: &str) -> bool {
    match module_id.parse::<Module>() {
        Ok(module) => module_access(viewer, module),
        Err(_) => false,
    }
}
