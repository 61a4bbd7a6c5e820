//! Local field validation, evaluated before any network call.
//!
//! Rules run in a fixed order and short-circuit on the first failure, so
//! the user sees exactly one violation at a time. The server remains
//! authoritative; these checks only catch the obvious cases early.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_USERNAME_LEN: usize = 3;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_BAD_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters long";
pub const MSG_SHORT_USERNAME: &str = "Username must be at least 3 characters long";

/// Validate login input: both fields non-empty after trimming.
///
/// # Errors
///
/// Returns the first violated rule's message.
pub fn validate_login(identifier: &str, password: &str) -> Result<(), &'static str> {
    if identifier.trim().is_empty() || password.trim().is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    Ok(())
}

/// Validate registration input: presence, then email shape, then password
/// length, then username length.
///
/// # Errors
///
/// Returns the first violated rule's message.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), &'static str> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    if !is_valid_email(email) {
        return Err(MSG_BAD_EMAIL);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(MSG_SHORT_PASSWORD);
    }
    if username.len() < MIN_USERNAME_LEN {
        return Err(MSG_SHORT_USERNAME);
    }
    Ok(())
}

/// Basic `local@domain.tld` shape check: exactly one `@`, no whitespace,
/// and a dot-separated domain with non-empty parts. Deliberately loose —
/// format screening, not RFC enforcement.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
