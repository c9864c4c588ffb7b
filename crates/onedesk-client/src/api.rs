//! Thin REST client for the portal backend.
//!
//! # Purpose
//! Wraps the versioned HTTP API: credential exchange, identity fetch,
//! logout notification, auth-provider config, and the read-only record
//! lists. Every request attaches the persisted bearer token when present,
//! and list responses flow through the TTL cache.
//!
//! # Error mapping
//! Non-success statuses become [`ApiError::Status`], with 401 surfaced
//! separately as [`ApiError::Unauthorized`] so callers can treat it as
//! logged-out. The backend's `detail` message is carried through when the
//! error body is decodable.
use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::errors::{ApiError, ApiResult};
use crate::identity::Identity;
use crate::records::{Candidate, Demand, Interview};
use crate::store::SessionStore;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
struct CredentialExchangeRequest<'a> {
    credential: &'a str,
}

#[derive(Debug, Deserialize)]
struct CredentialExchangeResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// External sign-in configuration served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthProviderConfig {
    pub google_client_id: String,
}

pub struct PortalApi {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    cache: ResponseCache,
}

impl PortalApi {
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            cache: ResponseCache::new(config.cache_ttl),
        })
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized(detail));
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Exchange an external sign-in credential for a session token.
    pub async fn exchange_credential(&self, credential: &str) -> ApiResult<String> {
        let response = self
            .http
            .post(self.url("/auth/google"))
            .json(&CredentialExchangeRequest { credential })
            .send()
            .await?;
        let response = Self::check(response).await?;
        let body: CredentialExchangeResponse = response.json().await?;
        Ok(body.access_token)
    }

    /// Fetch the canonical identity for the persisted token.
    pub async fn me(&self) -> ApiResult<Identity> {
        self.get_json("/auth/me").await
    }

    /// Notify the backend that the session is over.
    pub async fn logout(&self) -> ApiResult<()> {
        let response = self
            .authorize(self.http.post(self.url("/auth/logout")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn auth_config(&self) -> ApiResult<AuthProviderConfig> {
        self.get_json("/auth/config").await
    }

    async fn cached_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        if let Some(value) = self.cache.get(path).await {
            debug!(path, "serving list from cache");
            return serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()));
        }
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        let response = Self::check(response).await?;
        let value: serde_json::Value = response.json().await?;
        self.cache.put(path, value.clone()).await;
        serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn candidates(&self) -> ApiResult<Vec<Candidate>> {
        self.cached_list("/candidates/").await
    }

    pub async fn interviews(&self) -> ApiResult<Vec<Interview>> {
        self.cached_list("/interviews/").await
    }

    pub async fn demands(&self) -> ApiResult<Vec<Demand>> {
        self.cached_list("/demands/").await
    }
}
