//! Session and identity provider.
//!
//! # Purpose
//! Owns the authenticated identity and its lifecycle: the startup identity
//! fetch, credential login, and logout. The derived [`Viewer`] is computed
//! once per identity change and handed to the pure access layer.
//!
//! # Concurrency model
//! All reads are synchronous snapshots of in-memory state; only
//! `load`/`login`/`logout` touch the network. Each of those claims a fresh
//! generation number, and a completed fetch installs its result only while
//! its generation is still current, so a superseded identity fetch can
//! never overwrite fresher state.
use crate::api::{AuthProviderConfig, PortalApi};
use crate::config::ClientConfig;
use crate::errors::ApiResult;
use crate::identity::{Identity, TalentIdentity};
use crate::store::SessionStore;
use onedesk_access::Viewer;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Lifecycle of the local session.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// Startup state before the first identity fetch resolves.
    #[default]
    Loading,
    Authenticated(Identity),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

pub struct Session {
    api: PortalApi,
    store: Arc<dyn SessionStore>,
    state: RwLock<SessionState>,
    viewer: RwLock<Option<Viewer>>,
    provider_config: RwLock<Option<AuthProviderConfig>>,
    generation: AtomicU64,
}

impl Session {
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let api = PortalApi::new(config, Arc::clone(&store))?;
        Ok(Self {
            api,
            store,
            state: RwLock::new(SessionState::Loading),
            viewer: RwLock::new(None),
            provider_config: RwLock::new(None),
            generation: AtomicU64::new(0),
        })
    }

    /// The underlying REST client, for record fetches.
    pub fn api(&self) -> &PortalApi {
        &self.api
    }

    /// Startup flow: resolve the persisted token into an identity.
    ///
    /// A failed fetch clears the stored token and cached picture and lands
    /// on `Anonymous`; a missing token skips the fetch entirely.
    pub async fn load(&self) {
        let generation = self.begin();
        self.refresh_provider_config().await;

        if self.store.token().is_none() {
            self.install(generation, SessionState::Anonymous).await;
            return;
        }

        match self.api.me().await {
            Ok(identity) => {
                self.install(generation, SessionState::Authenticated(identity))
                    .await;
            }
            Err(err) => {
                warn!(error = %err, "identity fetch failed; clearing stored session");
                self.store.clear_token();
                self.store.clear_picture();
                self.install(generation, SessionState::Anonymous).await;
            }
        }
    }

    /// Exchange an external credential for a session and install the
    /// freshly fetched identity.
    ///
    /// The identity is always re-fetched from the backend after the
    /// exchange; the backend copy is the source of truth, so a role change
    /// made since the last session is picked up immediately.
    pub async fn login(&self, credential: &str) -> ApiResult<()> {
        let generation = self.begin();

        let token = self.api.exchange_credential(credential).await?;
        self.store.set_token(&token);

        match self.api.me().await {
            Ok(identity) => {
                self.install(generation, SessionState::Authenticated(identity))
                    .await;
                Ok(())
            }
            Err(err) => {
                if err.is_unauthorized() {
                    self.store.clear_token();
                    self.store.clear_picture();
                }
                self.install(generation, SessionState::Anonymous).await;
                Err(err)
            }
        }
    }

    /// End the session. The remote notification is best-effort; local
    /// state is cleared unconditionally even when the call fails.
    pub async fn logout(&self) {
        let generation = self.begin();

        if self.store.token().is_some() {
            if let Err(err) = self.api.logout().await {
                warn!(error = %err, "remote logout failed; clearing local session anyway");
            }
        }

        self.store.clear_token();
        self.store.clear_picture();
        self.api.cache().clear().await;
        self.install(generation, SessionState::Anonymous).await;
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn identity(&self) -> Option<Identity> {
        match &*self.state.read().await {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    /// The role classification computed at install time.
    pub async fn viewer(&self) -> Option<Viewer> {
        self.viewer.read().await.clone()
    }

    pub async fn talent_identity(&self) -> Option<TalentIdentity> {
        let state = self.state.read().await;
        let viewer = self.viewer.read().await;
        match (&*state, &*viewer) {
            (SessionState::Authenticated(identity), Some(viewer)) => {
                Some(TalentIdentity::derive(identity, viewer))
            }
            _ => None,
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// `Authorization` header value for the data layer, when a token is
    /// persisted.
    pub fn auth_header(&self) -> Option<String> {
        self.store.token().map(|token| format!("Bearer {token}"))
    }

    /// External sign-in client id, when the auth config loaded.
    pub async fn google_client_id(&self) -> Option<String> {
        self.provider_config
            .read()
            .await
            .as_ref()
            .map(|config| config.google_client_id.clone())
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn install(&self, generation: u64, mut state: SessionState) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "dropping superseded session state");
            return false;
        }
        // Picture reconciliation happens after the generation gate so a
        // superseded fetch cannot touch the picture cache either.
        if let SessionState::Authenticated(identity) = &mut state {
            self.reconcile_picture(identity);
        }
        let viewer = match &state {
            SessionState::Authenticated(identity) => Some(identity.viewer()),
            _ => None,
        };
        *self.viewer.write().await = viewer;
        *self.state.write().await = state;
        true
    }

    // The backend picture wins and refreshes the local copy; an absent or
    // empty picture falls back to the cached one.
    fn reconcile_picture(&self, identity: &mut Identity) {
        match identity.picture.as_deref() {
            Some(picture) if !picture.is_empty() => self.store.set_picture(picture),
            _ => identity.picture = self.store.picture(),
        }
    }

    async fn refresh_provider_config(&self) {
        match self.api.auth_config().await {
            Ok(config) => *self.provider_config.write().await = Some(config),
            Err(err) => {
                // Degrade: the external sign-in button simply never renders.
                warn!(error = %err, "auth config load failed");
            }
        }
    }
}
