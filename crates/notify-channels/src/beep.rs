//! Audible beep through AppleScript

use std::sync::Arc;

use crate::io::CommandRunner;
use crate::notifier::Notifier;

pub(crate) const OSASCRIPT: &str = "osascript";

/// Beeps `times` times (macOS)
pub struct BeepNotifier {
    times: u32,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for BeepNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeepNotifier")
            .field("times", &self.times)
            .finish()
    }
}

impl BeepNotifier {
    pub fn new(times: u32, runner: Arc<dyn CommandRunner>) -> Self {
        Self { times, runner }
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    pub fn set_times(&mut self, times: u32) {
        self.times = times;
    }

    /// The AppleScript passed to `osascript -e`
    pub fn script(&self) -> String {
        format!("beep {}", self.times)
    }
}

impl Notifier for BeepNotifier {
    fn type_name(&self) -> &str {
        "beep"
    }

    fn send(&self) -> crate::Result<()> {
        let script = self.script();
        self.runner.run(OSASCRIPT, &["-e".to_string(), script])?;
        Ok(())
    }
}
