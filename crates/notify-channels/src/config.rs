//! Channel configuration
//!
//! Channel fields are read as raw JSON values and checked with
//! [`crate::fields`], so a value of the wrong kind is reported as a
//! [`NotificationError`] naming the field rather than as a parse error.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::beep::BeepNotifier;
use crate::center::CenterNotifier;
use crate::discord::DiscordNotifier;
use crate::error::NotificationError;
use crate::fields;
use crate::io::{CommandRunner, HttpClient, ReqwestHttpClient, SystemCommandRunner};
use crate::line::LineNotifier;
use crate::notifier::Notifier;
use crate::slack::SlackNotifier;
use crate::webhook::Webhook;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifiers: Vec<NotifierConfig>,
}

/// Notifier configuration with tagged enum for extensibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotifierConfig {
    #[serde(rename = "beep")]
    Beep {
        #[serde(default)]
        times: Value,
    },
    #[serde(rename = "center")]
    Center {
        #[serde(default)]
        message: Value,
        #[serde(default)]
        title: Value,
        #[serde(default)]
        subtitle: Value,
        #[serde(default = "default_sound")]
        sound: Value,
    },
    #[serde(rename = "slack")]
    Slack {
        #[serde(default)]
        message: Value,
        #[serde(default)]
        url: Value,
    },
    #[serde(rename = "discord")]
    Discord {
        #[serde(default)]
        message: Value,
        #[serde(default)]
        url: Value,
    },
    #[serde(rename = "line")]
    Line {
        #[serde(default)]
        message: Value,
        #[serde(default)]
        token: Value,
    },
}

/// The outbound transports handed to every notifier built from config
#[derive(Clone)]
pub struct Transports {
    pub http: Arc<dyn HttpClient>,
    pub commands: Arc<dyn CommandRunner>,
}

impl Transports {
    /// Blocking reqwest client and real process spawning
    pub fn system() -> Self {
        Self {
            http: Arc::new(ReqwestHttpClient::new()),
            commands: Arc::new(SystemCommandRunner),
        }
    }
}

impl NotifierConfig {
    pub fn type_name(&self) -> &str {
        match self {
            NotifierConfig::Beep { .. } => "beep",
            NotifierConfig::Center { .. } => "center",
            NotifierConfig::Slack { .. } => "slack",
            NotifierConfig::Discord { .. } => "discord",
            NotifierConfig::Line { .. } => "line",
        }
    }

    /// Validate every field and build the notifier
    ///
    /// `message` replaces the configured message when given. Beep has no
    /// message and ignores it.
    pub fn build(
        &self,
        message: Option<&str>,
        transports: &Transports,
    ) -> Result<Box<dyn Notifier>, NotificationError> {
        let message_or = |configured: &Value| -> Value {
            match message {
                Some(m) => Value::String(m.to_string()),
                None => configured.clone(),
            }
        };

        let notifier: Box<dyn Notifier> = match self {
            NotifierConfig::Beep { times } => Box::new(BeepNotifier::new(
                fields::count("times", times)?,
                Arc::clone(&transports.commands),
            )),
            NotifierConfig::Center {
                message: configured,
                title,
                subtitle,
                sound,
            } => {
                let mut center = CenterNotifier::new(
                    fields::string("message", &message_or(configured))?,
                    Arc::clone(&transports.commands),
                );
                if let Some(title) = fields::optional_string("title", title)? {
                    center.set_title(title);
                }
                if let Some(subtitle) = fields::optional_string("subtitle", subtitle)? {
                    center.set_subtitle(subtitle);
                }
                center.set_sound(fields::flag("sound", sound)?);
                Box::new(center)
            }
            NotifierConfig::Slack {
                message: configured,
                url,
            } => Box::new(SlackNotifier::new(
                webhook(&message_or(configured), url)?,
                Arc::clone(&transports.http),
            )),
            NotifierConfig::Discord {
                message: configured,
                url,
            } => Box::new(DiscordNotifier::new(
                webhook(&message_or(configured), url)?,
                Arc::clone(&transports.http),
            )),
            NotifierConfig::Line {
                message: configured,
                token,
            } => Box::new(LineNotifier::new(
                fields::string("message", &message_or(configured))?,
                fields::string("token", token)?,
                Arc::clone(&transports.http),
            )),
        };
        Ok(notifier)
    }
}

fn webhook(message: &Value, url: &Value) -> Result<Webhook, NotificationError> {
    Webhook::new(
        fields::non_empty_string("message", message)?,
        fields::non_empty_string("url", url)?,
    )
}

impl Config {
    /// Build every configured notifier, or none if any entry is invalid
    pub fn build_notifiers(
        &self,
        message: Option<&str>,
        transports: &Transports,
    ) -> Result<Vec<Box<dyn Notifier>>, NotificationError> {
        self.notifiers
            .iter()
            .map(|entry| {
                tracing::debug!("Building {} notifier", entry.type_name());
                entry.build(message, transports)
            })
            .collect()
    }
}

fn default_sound() -> Value {
    Value::Bool(true)
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::NotifyError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
