//! Onedesk portal client: session, identity, and REST plumbing.
//!
//! # Purpose
//! Implements the stateful half of the portal's access layer: credential
//! login, persisted session storage, the canonical identity fetch, and the
//! cached read-only record lists. The pure policy decisions live in
//! `onedesk-access`; this crate produces the [`onedesk_access::Viewer`]
//! those decisions consume.
//!
//! # How to use
//! Build a [`ClientConfig`], pick a [`SessionStore`], and drive a
//! [`Session`]:
//!
//! ```rust,no_run
//! use onedesk_client::{ClientConfig, MemorySessionStore, Session};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), onedesk_client::ApiError> {
//! let config = ClientConfig::from_env();
//! let session = Session::new(&config, Arc::new(MemorySessionStore::new()))?;
//! session.load().await;
//! # Ok(())
//! # }
//! ```

mod api;
mod cache;
mod config;
mod errors;
mod identity;
mod records;
mod session;
mod store;

pub use api::{AuthProviderConfig, PortalApi};
pub use cache::ResponseCache;
pub use config::ClientConfig;
pub use errors::{ApiError, ApiResult};
pub use identity::{Identity, TalentFeatures, TalentIdentity, TalentPermissions};
pub use records::{Candidate, Demand, Interview};
pub use session::{Session, SessionState};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
