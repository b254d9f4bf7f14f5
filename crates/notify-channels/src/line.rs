//! LINE Notify client

use std::sync::Arc;

use crate::io::{pairs, HttpClient};
use crate::notifier::Notifier;

pub const LINE_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";

/// Sends a message through LINE Notify with a personal access token
pub struct LineNotifier {
    message: String,
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for LineNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineNotifier")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl LineNotifier {
    pub fn new(
        message: impl Into<String>,
        token: impl Into<String>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            message: message.into(),
            token: token.into(),
            http,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Always [`LINE_NOTIFY_URL`]
    pub fn url(&self) -> &str {
        LINE_NOTIFY_URL
    }
}

impl Notifier for LineNotifier {
    fn type_name(&self) -> &str {
        "line"
    }

    fn send(&self) -> crate::Result<()> {
        let authorization = format!("Bearer {}", self.token);
        tracing::debug!("Sending LINE notification");
        self.http
            .post_query(
                LINE_NOTIFY_URL,
                &pairs(&[("Authorization", authorization.as_str())]),
                &pairs(&[("message", self.message.as_str())]),
            )?
            .error_for_status("line")?;
        Ok(())
    }
}
