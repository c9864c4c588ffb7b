//! Onedesk access-policy primitives shared by the portal client.
//!
//! # Purpose
//! Centralizes role classification, per-module allow-lists, capability
//! routing, menu derivation, and record-visibility filtering. Everything
//! here is a pure function over identity plus compiled-in configuration.
//!
//! # How it fits
//! The session layer (`onedesk-client`) produces a [`Viewer`] once per
//! identity change; UI layers call into this crate with that viewer to
//! decide what to render. Nothing here performs I/O or suspends.
//!
//! # Key invariants
//! - Unknown role, module, and capability ids deny or are ignored; access
//!   decisions return booleans and filtered collections, never errors.
//! - Empty allow-lists mean unrestricted; the top administrative role
//!   bypasses every list.
//! - Visibility filters are stable: output order matches input order.
//!
//! # Examples
//! ```rust
//! use onedesk_access::{CapabilityId, Module, Viewer, menu_for, module_access};
//!
//! let viewer = Viewer::new("HR", "People Partner", "pat@example.com");
//! assert!(module_access(Some(&viewer), Module::Associates));
//! assert!(!menu_for(CapabilityId::Hrms, Some(&viewer)).is_empty());
//! ```

mod capability;
mod errors;
mod menu;
mod policy;
mod role;
mod router;
mod viewer;
mod visibility;

pub use capability::{CAPABILITIES, Capability, CapabilityId, capability_access};
pub use errors::{AccessError, AccessResult};
pub use menu::{MenuItem, MenuSection, MenuTarget, VisibleSection, filter_sections, menu_for};
pub use policy::{MODULE_POLICIES, Module, ModulePolicy, module_access, module_access_id};
pub use role::{Role, RoleFlags, RoleGroup, TalentRole};
pub use router::{CapabilityRouter, capability_for_path};
pub use viewer::Viewer;
pub use visibility::{CandidateLike, InterviewLike, visible_candidates, visible_interviews};
