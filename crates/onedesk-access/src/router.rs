//! Capability selection state machine.
//!
//! # Purpose
//! Tracks the active capability and keeps it in sync with the URL. One
//! state per capability; transitions come from explicit selection (always
//! allowed, yields the default route) or from a URL change (applied only
//! when the path resolves to a different capability, so sub-route
//! navigation never flickers the menu).
use crate::CapabilityId;

/// Fixed, ordered prefix table used by URL resolution.
static ROUTE_PREFIXES: &[(&str, CapabilityId)] = &[
    ("/hrms", CapabilityId::Hrms),
    ("/crms", CapabilityId::Crms),
    ("/talent", CapabilityId::Talent),
    ("/assessment", CapabilityId::Assessment),
];

/// Resolve a path to a capability by longest-prefix match.
pub fn capability_for_path(path: &str) -> Option<CapabilityId> {
    ROUTE_PREFIXES
        .iter()
        .filter(|(prefix, _)| path.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, id)| *id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityRouter {
    current: CapabilityId,
}

impl Default for CapabilityRouter {
    fn default() -> Self {
        Self {
            current: CapabilityId::Hrms,
        }
    }
}

impl CapabilityRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> CapabilityId {
        self.current
    }

    /// Explicit user selection by capability id string.
    ///
    /// Unknown ids are ignored: no state change, no navigation. Known ids
    /// always switch and return the capability's default route to
    /// navigate to.
    pub fn select(&mut self, capability_id: &str) -> Option<&'static str> {
        let Ok(id) = capability_id.parse::<CapabilityId>() else {
            return None;
        };
        self.current = id;
        Some(id.default_route())
    }

    /// Follow a URL change.
    ///
    /// Returns whether the active capability changed. Paths that resolve
    /// to the current capability, or to none at all, are no-ops.
    pub fn sync_from_path(&mut self, path: &str) -> bool {
        let Some(id) = capability_for_path(path) else {
            return false;
        };
        if id == self.current {
            return false;
        }
        self.current = id;
        true
    }
}
