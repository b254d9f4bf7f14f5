//! Fields shared by the webhook channels

use crate::error::NotificationError;
use crate::fields::require_non_empty;

/// Message and target URL of a webhook notification
///
/// `Webhook` has no dispatch of its own; the payload shape belongs to the
/// concrete channel ([`crate::SlackNotifier`], [`crate::DiscordNotifier`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    message: String,
    url: String,
}

impl Webhook {
    pub fn new(
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, NotificationError> {
        let message = message.into();
        let url = url.into();
        require_non_empty("message", &message)?;
        require_non_empty("url", &url)?;
        Ok(Self { message, url })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> Result<(), NotificationError> {
        let message = message.into();
        require_non_empty("message", &message)?;
        self.message = message;
        Ok(())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<(), NotificationError> {
        let url = url.into();
        require_non_empty("url", &url)?;
        self.url = url;
        Ok(())
    }
}
