//! Persistent session storage over `localStorage`.
//!
//! Holds the bearer token under `authToken` and the cached user profile as
//! JSON under `user`. The token is an opaque string; nothing here checks
//! its shape or freshness — presence in storage is necessary but never
//! sufficient, and protected views must still confirm it with the server.
//!
//! Requires a browser environment; non-hydrate builds see an always-empty
//! store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "authToken";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

/// Persist a session. Token is written first, then the user snapshot; the
/// narrow window between the two writes is a known limitation.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(user_json) = serde_json::to_string(&session.user) {
                let _ = storage.set_item(TOKEN_KEY, &session.token);
                let _ = storage.set_item(USER_KEY, &user_json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Load the stored session, or `None` if either entry is missing or the
/// user snapshot fails to parse.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        decode(token, user_json)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove both session entries.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Whether a token is present at all, regardless of validity.
pub fn has_token() -> bool {
    #[cfg(feature = "hydrate")]
    {
        local_storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Rebuild a [`Session`] from the two raw storage values.
pub fn decode(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    let user = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
