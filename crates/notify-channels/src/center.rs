//! Notification Center banner through AppleScript

use std::sync::Arc;

use crate::beep::OSASCRIPT;
use crate::io::CommandRunner;
use crate::notifier::Notifier;

/// Stands in for a missing title or subtitle. `display notification` only
/// accepts the two together.
const PLACEHOLDER: &str = " ";

/// Shows a banner in the macOS Notification Center
///
/// Title and subtitle are set as a pair: setting one while the other is
/// unset (or empty) fills the other with a single space.
pub struct CenterNotifier {
    message: String,
    title: Option<String>,
    subtitle: Option<String>,
    sound: bool,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for CenterNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CenterNotifier")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("sound", &self.sound)
            .finish()
    }
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl CenterNotifier {
    /// Message only, with sound
    pub fn new(message: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            message: message.into(),
            title: None,
            subtitle: None,
            sound: true,
            runner,
        }
    }

    /// An empty title counts as not provided
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.set_title(title);
        }
        self
    }

    /// An empty subtitle counts as not provided
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        if !subtitle.is_empty() {
            self.set_subtitle(subtitle);
        }
        self
    }

    pub fn with_sound(mut self, sound: bool) -> Self {
        self.set_sound(sound);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
        if is_unset(&self.subtitle) {
            self.subtitle = Some(PLACEHOLDER.to_string());
        }
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = Some(subtitle.into());
        if is_unset(&self.title) {
            self.title = Some(PLACEHOLDER.to_string());
        }
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn set_sound(&mut self, sound: bool) {
        self.sound = sound;
    }

    /// The AppleScript passed to `osascript -e`
    ///
    /// Message, title and sound clauses are always joined by single spaces,
    /// even when a clause is empty. Quotes in the fields are not escaped.
    pub fn script(&self) -> String {
        let message = format!("display notification \"{}\"", self.message);
        let title = match (self.title.as_deref(), self.subtitle.as_deref()) {
            (Some(title), Some(subtitle)) if !title.is_empty() && !subtitle.is_empty() => {
                format!("with title \"{}\" subtitle \"{}\"", title, subtitle)
            }
            _ => String::new(),
        };
        let sound = if self.sound { "sound name \"\"" } else { "" };
        format!("{} {} {}", message, title, sound)
    }
}

impl Notifier for CenterNotifier {
    fn type_name(&self) -> &str {
        "center"
    }

    fn send(&self) -> crate::Result<()> {
        let script = self.script();
        self.runner.run(OSASCRIPT, &["-e".to_string(), script])?;
        Ok(())
    }
}
