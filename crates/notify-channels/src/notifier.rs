//! Notifier trait for sending notifications

/// A single notification channel, ready to dispatch
///
/// Every implementor holds already-validated fields. Dispatch performs one
/// outbound call (a process spawn or an HTTP request) and never retries.
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "slack")
    fn type_name(&self) -> &str;

    /// Dispatch once and report whether the call went through
    fn send(&self) -> crate::Result<()>;

    /// Dispatch once, discarding the outcome
    fn notify(&self) {
        if let Err(e) = self.send() {
            tracing::warn!("{} notification was not delivered: {}", self.type_name(), e);
        }
    }
}
