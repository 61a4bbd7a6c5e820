use super::*;
use crate::net::types::User;

// =============================================================
// decode
// =============================================================

#[test]
fn decode_rebuilds_session_from_raw_values() {
    let session = decode(
        Some("abc123".to_owned()),
        Some(r#"{"userName":"alice","gmail":"a@x.com"}"#.to_owned()),
    )
    .expect("session");
    assert_eq!(session.token, "abc123");
    assert_eq!(
        session.user,
        User {
            user_name: "alice".to_owned(),
            gmail: "a@x.com".to_owned(),
        }
    );
}

#[test]
fn decode_requires_both_entries() {
    assert!(decode(None, Some("{}".to_owned())).is_none());
    assert!(decode(Some("abc123".to_owned()), None).is_none());
    assert!(decode(None, None).is_none());
}

#[test]
fn decode_rejects_corrupt_user_json() {
    assert!(decode(Some("abc123".to_owned()), Some("not json".to_owned())).is_none());
}

// =============================================================
// Non-browser stubs
// =============================================================

#[test]
fn store_is_empty_without_a_browser() {
    assert!(load().is_none());
    assert!(!has_token());
}
