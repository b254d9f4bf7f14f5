//! notify-channels - send a short message through one or more channels
//!
//! Each channel is a [`Notifier`]: beep and Notification Center through
//! `osascript`, Slack and Discord webhooks, and LINE Notify. Fields are
//! checked when a notifier is built; dispatch is a single blocking call.

pub mod beep;
pub mod center;
pub mod config;
pub mod discord;
pub mod error;
pub mod fields;
pub mod io;
pub mod line;
pub mod notifier;
pub mod slack;
pub mod webhook;

pub use beep::BeepNotifier;
pub use center::CenterNotifier;
pub use config::{load_config, Config, NotifierConfig, Transports};
pub use discord::DiscordNotifier;
pub use error::{NotificationError, NotifyError, Result};
pub use line::{LineNotifier, LINE_NOTIFY_URL};
pub use notifier::Notifier;
pub use slack::SlackNotifier;
pub use webhook::Webhook;

/// How [`dispatch_all`] treats a failed dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Call [`Notifier::notify`] on every channel and ignore failures
    #[default]
    FireAndForget,
    /// Call [`Notifier::send`] and stop at the first failure
    Checked,
}

/// Dispatch `notifiers` once each, in order
pub fn dispatch_all(notifiers: &[Box<dyn Notifier>], delivery: Delivery) -> Result<()> {
    for notifier in notifiers {
        tracing::debug!("Dispatching {} notification", notifier.type_name());
        match delivery {
            Delivery::FireAndForget => notifier.notify(),
            Delivery::Checked => notifier.send()?,
        }
    }
    tracing::info!("Dispatched {} notification(s)", notifiers.len());
    Ok(())
}
