//! User-facing notification payload.

use serde::{Deserialize, Serialize};

/// Title used for every validation failure raised by the core.
pub const INVALID_INPUT_TITLE: &str = "Invalid input";

/// One dismissible message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Builds the standard "Invalid input" notification.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(INVALID_INPUT_TITLE, message)
    }
}
