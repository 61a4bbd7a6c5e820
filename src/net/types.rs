#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User profile snapshot as the server returns it.
///
/// The wire uses camelCase `userName` and the historical `gmail` field name
/// for the email address; Rust fields stay snake_case behind renames.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userName", default)]
    pub user_name: String,
    #[serde(default)]
    pub gmail: String,
}

/// Token plus cached user profile. Created on login success, persisted by
/// [`crate::state::session`], destroyed on logout or failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Login request body. The form collects a generic identifier (username or
/// email); the wire contract names the field `userName` either way.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    #[serde(rename = "userName")]
    pub user_name: &'a str,
    pub password: &'a str,
}

/// Registration request body; the email travels as `gmail`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    #[serde(rename = "userName")]
    pub user_name: &'a str,
    pub gmail: &'a str,
    pub password: &'a str,
}

/// Health endpoint payload. No success envelope; a 2xx with this body is
/// the whole contract.
#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    /// One-line status message shown on the login page.
    pub fn summary(&self) -> String {
        format!("System Status: {} - {} v{}", self.status, self.service, self.version)
    }
}
