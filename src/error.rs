//! Error types for tty-prompt.

use std::io;

use thiserror::Error;

/// Errors raised by the prompting operations.
///
/// Raw-mode operations never return these; they report failure as a `false`
/// return plus a logged diagnostic, so callers can treat raw-mode support as
/// a capability probe.
#[derive(Error, Debug)]
pub enum PromptError {
    /// No interactive terminal is attached and the caller supplied no
    /// default answer. Signals a caller-configuration problem: supply a
    /// default for non-interactive contexts.
    #[error("TTY input is not available for {0} prompt")]
    NoInteractiveInput(&'static str),

    /// A configured retry limit was reached without a valid answer.
    ///
    /// Only possible when the manager was built with a retry limit; the
    /// default behavior re-prompts forever.
    #[error("no valid answer after {0} attempts")]
    RetriesExhausted(usize),

    /// The input stream failed or hit end of file mid-prompt.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
