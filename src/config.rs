#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Immutable API configuration: base URL plus the endpoint paths the
/// [`crate::net::api::AuthClient`] targets.
///
/// Constructed once in [`crate::app::App`] and passed to the client
/// explicitly — there is no ambient global to reach for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub register_path: String,
    pub profile_path: String,
    pub health_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api/v1".to_owned(),
            login_path: "/users/login".to_owned(),
            register_path: "/users/register".to_owned(),
            profile_path: "/users/profile".to_owned(),
            health_path: "/health".to_owned(),
        }
    }
}

impl ApiConfig {
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, self.login_path)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, self.register_path)
    }

    pub fn profile_url(&self) -> String {
        format!("{}{}", self.base_url, self.profile_path)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }
}
