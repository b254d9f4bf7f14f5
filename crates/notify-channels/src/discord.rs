//! Discord webhook

use std::sync::Arc;

use serde::Serialize;

use crate::io::{pairs, HttpClient};
use crate::notifier::Notifier;
use crate::webhook::Webhook;

#[derive(Serialize)]
struct DiscordPayload<'a> {
    content: &'a str,
}

/// Posts `{"content": message}` as JSON to a Discord webhook
pub struct DiscordNotifier {
    webhook: Webhook,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DiscordNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordNotifier")
            .field("webhook", &self.webhook)
            .finish()
    }
}

impl DiscordNotifier {
    pub fn new(webhook: Webhook, http: Arc<dyn HttpClient>) -> Self {
        Self { webhook, http }
    }

    pub fn webhook(&self) -> &Webhook {
        &self.webhook
    }

    pub fn webhook_mut(&mut self) -> &mut Webhook {
        &mut self.webhook
    }

    pub fn payload(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&DiscordPayload {
            content: self.webhook.message(),
        })?)
    }
}

impl Notifier for DiscordNotifier {
    fn type_name(&self) -> &str {
        "discord"
    }

    fn send(&self) -> crate::Result<()> {
        let body = self.payload()?;
        tracing::debug!("Sending Discord notification ({} bytes)", body.len());
        self.http
            .post(
                self.webhook.url(),
                &pairs(&[("Content-Type", "application/json")]),
                &body,
            )?
            .error_for_status("discord")?;
        Ok(())
    }
}
