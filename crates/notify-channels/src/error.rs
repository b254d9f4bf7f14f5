//! Error types for notify-channels

/// A field was given a value of the wrong kind.
///
/// This is the only error a caller sees while building a notifier. The
/// rendered message always has the shape
/// `<field> can only set <expected> (not "<actual>")`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} can only set {expected} (not \"{actual}\")")]
pub struct NotificationError {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl NotificationError {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Errors that can occur while configuring or dispatching notifications
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Validation(#[from] NotificationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for notify-channels operations
pub type Result<T> = std::result::Result<T, NotifyError>;
