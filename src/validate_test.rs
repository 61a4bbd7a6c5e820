use super::*;

// =============================================================
// Login validation
// =============================================================

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("", "secret1"), Err(MSG_MISSING_FIELDS));
    assert_eq!(validate_login("alice", ""), Err(MSG_MISSING_FIELDS));
    assert_eq!(validate_login("   ", "secret1"), Err(MSG_MISSING_FIELDS));
    assert_eq!(validate_login("alice", "secret1"), Ok(()));
}

// =============================================================
// Registration validation order
// =============================================================

#[test]
fn registration_accepts_well_formed_input() {
    assert_eq!(validate_registration("alice", "a@x.com", "secret1"), Ok(()));
}

#[test]
fn registration_reports_missing_fields_first() {
    // Email is also invalid here, but presence is checked first.
    assert_eq!(
        validate_registration("alice", "", "secret1"),
        Err(MSG_MISSING_FIELDS)
    );
    assert_eq!(
        validate_registration("", "not-an-email", "x"),
        Err(MSG_MISSING_FIELDS)
    );
}

#[test]
fn registration_rejects_bad_email_before_lengths() {
    // Password and username are also too short; email wins.
    assert_eq!(
        validate_registration("ab", "not-an-email", "abc"),
        Err(MSG_BAD_EMAIL)
    );
}

#[test]
fn registration_rejects_short_password() {
    assert_eq!(
        validate_registration("alice", "a@x.com", "12345"),
        Err(MSG_SHORT_PASSWORD)
    );
    assert_eq!(validate_registration("alice", "a@x.com", "123456"), Ok(()));
}

#[test]
fn registration_rejects_short_username() {
    assert_eq!(
        validate_registration("ab", "a@x.com", "secret1"),
        Err(MSG_SHORT_USERNAME)
    );
    assert_eq!(validate_registration("abc", "a@x.com", "secret1"), Ok(()));
}

#[test]
fn registration_trims_before_checking() {
    assert_eq!(validate_registration("  alice  ", " a@x.com ", " secret1 "), Ok(()));
    // Whitespace padding does not rescue a short password.
    assert_eq!(
        validate_registration("alice", "a@x.com", "  12345  "),
        Err(MSG_SHORT_PASSWORD)
    );
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_valid_email("a@x.com"));
    assert!(is_valid_email("first.last@sub.domain.co"));
    assert!(is_valid_email("user+tag@host.io"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email("a@"));
    assert!(!is_valid_email("a@nodot"));
    assert!(!is_valid_email("a@x."));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a b@x.com"));
    assert!(!is_valid_email("a@@x.com"));
}
