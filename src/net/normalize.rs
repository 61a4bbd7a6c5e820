#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::Value;

/// Fallback for envelope endpoints when the server gives no usable message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Fallback for the health endpoint, which carries no success envelope.
pub const STATUS_CHECK_FAILED: &str = "System status check failed";

/// Shown when the request itself fails before any response arrives.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Collapse an HTTP ok-flag plus parsed JSON body into either the success
/// payload or a single human-readable message.
///
/// `body` is `None` when the response body failed to parse as JSON; that is
/// reported as a failure with `fallback` rather than a propagated parse
/// error. A body with `success: true` (or with no `success` key at all, as
/// the health endpoint) yields its `data` field, or the whole body when
/// `data` is absent. Anything else yields `message`, then `error`, then
/// `fallback`.
pub fn normalize(http_ok: bool, body: Option<Value>, fallback: &str) -> Result<Value, String> {
    let Some(body) = body else {
        return Err(fallback.to_owned());
    };

    let success = match body.get("success") {
        Some(flag) => flag.as_bool().unwrap_or(false),
        // No envelope at all; trust the HTTP status.
        None => true,
    };

    if http_ok && success {
        let payload = body.get("data").cloned().unwrap_or(body);
        return Ok(payload);
    }

    Err(failure_message(&body, fallback))
}

/// Pick the server's error message, preferring `message` over `error`.
fn failure_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or(fallback)
        .to_owned()
}
