//! Slack incoming webhook

use std::sync::Arc;

use serde::Serialize;

use crate::io::HttpClient;
use crate::notifier::Notifier;
use crate::webhook::Webhook;

#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

/// Posts `{"text": message}` to a Slack incoming webhook
pub struct SlackNotifier {
    webhook: Webhook,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SlackNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackNotifier")
            .field("webhook", &self.webhook)
            .finish()
    }
}

impl SlackNotifier {
    pub fn new(webhook: Webhook, http: Arc<dyn HttpClient>) -> Self {
        Self { webhook, http }
    }

    pub fn webhook(&self) -> &Webhook {
        &self.webhook
    }

    pub fn webhook_mut(&mut self) -> &mut Webhook {
        &mut self.webhook
    }

    /// JSON request body
    pub fn payload(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&SlackPayload {
            text: self.webhook.message(),
        })?)
    }
}

impl Notifier for SlackNotifier {
    fn type_name(&self) -> &str {
        "slack"
    }

    fn send(&self) -> crate::Result<()> {
        let body = self.payload()?;
        tracing::debug!("Sending Slack notification ({} bytes)", body.len());
        // Slack accepts the JSON without a Content-Type header
        self.http
            .post(self.webhook.url(), &[], &body)?
            .error_for_status("slack")?;
        Ok(())
    }
}
