#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Visual weight of a form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS class suffix for the message element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message shown in a form's feedback area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

/// Per-form UI state: the loading flag plus the current feedback message.
/// Each page owns its own copy; nothing is shared across forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub loading: bool,
    pub message: Option<Message>,
}

impl FormState {
    /// Enter the loading state with an in-progress info message. Disables
    /// re-submission until [`Self::settle`] runs.
    pub fn begin(&mut self, text: &str) {
        self.loading = true;
        self.message = Some(Message {
            text: text.to_owned(),
            severity: Severity::Info,
        });
    }

    /// Leave the loading state with the operation's outcome message.
    /// Applied whether the operation succeeded or failed.
    pub fn settle(&mut self, text: String, severity: Severity) {
        self.loading = false;
        self.message = Some(Message { text, severity });
    }

    /// Show a validation error without ever entering the loading state.
    pub fn reject(&mut self, text: &str) {
        self.message = Some(Message {
            text: text.to_owned(),
            severity: Severity::Error,
        });
    }
}
