//! Injectable diagnostic sink for prompt warnings and raw-mode failures.

/// Logger with optional channels.
///
/// Every method defaults to a no-op, so implementors override only the
/// channels they care about; an absent channel silently drops that class of
/// diagnostic.
pub trait PromptLogger: Send + Sync {
    /// Informational diagnostics.
    fn info(&self, _message: &str) {}

    /// Recoverable problems, such as an invalid answer to a prompt.
    fn warn(&self, _message: &str) {}

    /// Failures, such as an unsuccessful raw-mode switch.
    fn error(&self, _message: &str) {}
}

/// Default logger: forwards each channel to the matching `tracing` macro.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PromptLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Logger that drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl PromptLogger for NullLogger {}
