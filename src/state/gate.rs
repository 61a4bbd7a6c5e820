#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Milliseconds before a blocked or expired dashboard redirects to login.
pub const REDIRECT_DELAY_MS: u32 = 3000;

/// Auth-gate state machine for a protected view, advanced once per mount:
/// `Unchecked → LocalPresent | LocalAbsent → Confirmed | Expired`.
///
/// `LocalPresent` renders the cached user optimistically while the token is
/// confirmed with the server; `LocalAbsent` and `Expired` block the view
/// and schedule exactly one redirect to the login page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unchecked,
    LocalPresent,
    LocalAbsent,
    Confirmed,
    Expired,
}

impl GateState {
    /// First transition: what the local session store held on entry.
    pub fn on_load(found: bool) -> Self {
        if found { Self::LocalPresent } else { Self::LocalAbsent }
    }

    /// Second transition: the server's verdict on the stored token. Only
    /// meaningful from `LocalPresent`; other states are left unchanged.
    pub fn on_validated(self, valid: bool) -> Self {
        match self {
            Self::LocalPresent => {
                if valid {
                    Self::Confirmed
                } else {
                    Self::Expired
                }
            }
            other => other,
        }
    }

    /// Whether protected content may render (optimistically or confirmed).
    pub fn allows_view(self) -> bool {
        matches!(self, Self::LocalPresent | Self::Confirmed)
    }

    /// Whether this state schedules the delayed redirect to login.
    pub fn schedules_redirect(self) -> bool {
        matches!(self, Self::LocalAbsent | Self::Expired)
    }

    /// Error message for blocked states.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::LocalAbsent => Some("You need to be logged in to view this page."),
            Self::Expired => Some("Session expired. Please log in again."),
            _ => None,
        }
    }
}
