//! REST client for the user-management service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning the failure/absent case since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response is funneled through the normalizer so callers only see a
//! success payload or a single message string; fetch-level failures map to
//! the fixed network-error message instead of surfacing transport details.

#![allow(clippy::unused_async)]

use crate::config::ApiConfig;
use crate::net::types::{HealthStatus, Session};

#[cfg(feature = "hydrate")]
use crate::net::normalize::{NETWORK_ERROR, STATUS_CHECK_FAILED, UNKNOWN_ERROR, normalize};
#[cfg(feature = "hydrate")]
use crate::net::types::{LoginRequest, RegisterRequest};

/// Issues login, registration, token-validation, and health requests.
///
/// Holds its [`ApiConfig`] by value; construct one per call site from the
/// config provided in context. Never touches session storage — callers own
/// all session-state updates.
#[derive(Clone, Debug)]
pub struct AuthClient {
    config: ApiConfig,
}

impl AuthClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Authenticate with an identifier (username or email) and password.
    ///
    /// # Errors
    ///
    /// Returns the normalized server message on rejection, or the fixed
    /// network-error message when the request itself fails.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Session, String> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.login_url())
                .json(&LoginRequest {
                    user_name: identifier,
                    password,
                })
                .map_err(|e| {
                    leptos::logging::warn!("login request build failed: {e}");
                    NETWORK_ERROR.to_owned()
                })?;
            let resp = request.send().await.map_err(|e| {
                leptos::logging::warn!("login request failed: {e}");
                NETWORK_ERROR.to_owned()
            })?;
            let http_ok = resp.ok();
            let body = resp.json::<serde_json::Value>().await.ok();
            let data = normalize(http_ok, body, UNKNOWN_ERROR)?;
            serde_json::from_value(data).map_err(|_| UNKNOWN_ERROR.to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, password);
            Err("not available on server".to_owned())
        }
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns the normalized server message on rejection, or the fixed
    /// network-error message when the request itself fails.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.register_url())
                .json(&RegisterRequest {
                    user_name: username,
                    gmail: email,
                    password,
                })
                .map_err(|e| {
                    leptos::logging::warn!("register request build failed: {e}");
                    NETWORK_ERROR.to_owned()
                })?;
            let resp = request.send().await.map_err(|e| {
                leptos::logging::warn!("register request failed: {e}");
                NETWORK_ERROR.to_owned()
            })?;
            let http_ok = resp.ok();
            let body = resp.json::<serde_json::Value>().await.ok();
            normalize(http_ok, body, UNKNOWN_ERROR).map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, email, password);
            Err("not available on server".to_owned())
        }
    }

    /// Check a bearer token against the profile endpoint.
    ///
    /// True iff the HTTP status is 2xx; the body is never inspected. Any
    /// transport failure counts as invalid rather than an error.
    pub async fn validate_token(&self, token: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.profile_url())
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
            match resp {
                Ok(resp) => resp.ok(),
                Err(e) => {
                    leptos::logging::warn!("token validation failed: {e}");
                    false
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            false
        }
    }

    /// Fetch the backend health status. No credential is attached.
    ///
    /// # Errors
    ///
    /// Returns the normalized server message, or the fixed status-check
    /// fallback when the response is unusable, or the network-error
    /// message when the request itself fails.
    pub async fn check_health(&self) -> Result<HealthStatus, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.health_url())
                .send()
                .await
                .map_err(|e| {
                    leptos::logging::warn!("health check failed: {e}");
                    NETWORK_ERROR.to_owned()
                })?;
            let http_ok = resp.ok();
            let body = resp.json::<serde_json::Value>().await.ok();
            let data = normalize(http_ok, body, STATUS_CHECK_FAILED)?;
            serde_json::from_value(data).map_err(|_| STATUS_CHECK_FAILED.to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err("not available on server".to_owned())
        }
    }
}
