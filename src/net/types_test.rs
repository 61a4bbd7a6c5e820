use super::*;
use serde_json::json;

// =============================================================
// Wire field names
// =============================================================

#[test]
fn login_request_posts_identifier_as_user_name() {
    let req = LoginRequest {
        user_name: "alice",
        password: "secret1",
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value, json!({"userName": "alice", "password": "secret1"}));
}

#[test]
fn register_request_posts_email_as_gmail() {
    let req = RegisterRequest {
        user_name: "alice",
        gmail: "a@x.com",
        password: "secret1",
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        json!({"userName": "alice", "gmail": "a@x.com", "password": "secret1"})
    );
}

// =============================================================
// Response deserialization
// =============================================================

#[test]
fn session_deserializes_from_login_data() {
    let data = json!({
        "token": "abc123",
        "user": {"userName": "alice", "gmail": "a@x.com"}
    });
    let session: Session = serde_json::from_value(data).expect("session");
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user.user_name, "alice");
    assert_eq!(session.user.gmail, "a@x.com");
}

#[test]
fn user_tolerates_missing_fields() {
    let user: User = serde_json::from_value(json!({"userName": "bob"})).expect("user");
    assert_eq!(user.user_name, "bob");
    assert_eq!(user.gmail, "");
}

// =============================================================
// Health summary
// =============================================================

#[test]
fn health_summary_format() {
    let health = HealthStatus {
        status: "UP".to_owned(),
        service: "users".to_owned(),
        version: "1.0".to_owned(),
    };
    assert_eq!(health.summary(), "System Status: UP - users v1.0");
}

#[test]
fn health_tolerates_partial_body() {
    let health: HealthStatus =
        serde_json::from_value(json!({"status": "UP"})).expect("health");
    assert_eq!(health.status, "UP");
    assert_eq!(health.summary(), "System Status: UP -  v");
}
