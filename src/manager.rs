//! Prompting and raw-keystroke management over a terminal input stream.

use std::io::{self, Write};
use std::sync::Arc;

use tokio::task::{self, JoinHandle};

use crate::error::PromptError;
use crate::handle::{InputHandle, OutputHandle, StdinHandle};
use crate::logger::{PromptLogger, TracingLogger};

/// Construction-time collaborators for [`InputManager`].
///
/// Unset fields resolve to the ambient process streams at construction time,
/// never at call time, so each manager's behavior is fixed once built.
pub struct InputOptions {
    /// Input stream. Defaults to process stdin.
    pub input: Arc<dyn InputHandle>,
    /// Display sink for prompt text. `None` makes the manager
    /// non-interactive. Defaults to process stdout.
    pub output: Option<OutputHandle>,
    /// Diagnostic sink. Defaults to [`TracingLogger`].
    pub logger: Arc<dyn PromptLogger>,
    /// Cap on invalid answers per prompt before giving up with
    /// [`PromptError::RetriesExhausted`]. `None` re-prompts forever.
    pub retry_limit: Option<usize>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            input: Arc::new(StdinHandle::new()),
            output: Some(Box::new(io::stdout())),
            logger: Arc::new(TracingLogger),
            retry_limit: None,
        }
    }
}

/// Options for [`InputManager::prompt_yes_no`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNoOptions {
    /// Answer assumed on an empty line, and returned outright when no
    /// interactive terminal is attached.
    pub default: Option<bool>,
}

/// Options for [`InputManager::prompt_text`].
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Answer assumed on an empty line, and returned outright when no
    /// interactive terminal is attached.
    pub default: Option<String>,
    /// Accept an empty line as a valid empty answer when no default is set.
    pub allow_empty: bool,
}

/// Façade over a terminal input stream.
///
/// Offers line-oriented yes/no and free-text prompts with default fallback
/// for non-interactive contexts, and a raw single-keystroke subscription for
/// manual-control loops. Prompting and raw mode are not mutually exclusive;
/// callers should disable raw mode before prompting.
pub struct InputManager {
    input: Arc<dyn InputHandle>,
    output: Option<OutputHandle>,
    logger: Arc<dyn PromptLogger>,
    retry_limit: Option<usize>,
    /// Forwarding task for the active raw-mode subscription.
    raw_task: Option<JoinHandle<()>>,
    /// Whether the input stream is currently in raw delivery mode.
    raw_active: bool,
}

impl InputManager {
    /// Create a manager from explicit collaborators.
    pub fn new(options: InputOptions) -> Self {
        Self {
            input: options.input,
            output: options.output,
            logger: options.logger,
            retry_limit: options.retry_limit,
            raw_task: None,
            raw_active: false,
        }
    }

    /// Create a manager bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(InputOptions::default())
    }

    /// True iff the input stream is a terminal and an output sink is
    /// configured. Pure predicate, no side effects.
    pub fn is_interactive(&self) -> bool {
        self.input.is_terminal() && self.output.is_some()
    }

    /// Ask a yes/no question, reading one line per attempt.
    ///
    /// Without an interactive terminal the default answer is returned, or
    /// [`PromptError::NoInteractiveInput`] when none was supplied, and the
    /// output sink is never touched. Interactively, an empty line takes the
    /// default, `y`/`yes` and `n`/`no` (case-insensitive) resolve the
    /// question, and anything else warns and re-prompts. The loop is
    /// unbounded unless the manager was built with a retry limit.
    pub async fn prompt_yes_no(
        &mut self,
        question: &str,
        options: &YesNoOptions,
    ) -> Result<bool, PromptError> {
        if !self.is_interactive() {
            return options
                .default
                .ok_or(PromptError::NoInteractiveInput("yes/no"));
        }

        let prompt = format!("{} (y/n): ", question.trim_end());
        let mut attempts = 0;
        loop {
            self.display(&prompt)?;
            let line = self.read_line().await?;
            let answer = line.trim().to_lowercase();
            if answer.is_empty() {
                if let Some(default) = options.default {
                    return Ok(default);
                }
            }
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    self.logger.warn("Please answer with y or n.");
                    attempts += 1;
                    self.check_retries(attempts)?;
                }
            }
        }
    }

    /// Ask a free-text question, reading one line per attempt.
    ///
    /// Without an interactive terminal the default answer is returned, or
    /// [`PromptError::NoInteractiveInput`] when none was supplied.
    /// Interactively, the answer is trimmed; an empty line takes the default
    /// when set, is accepted as `""` when `allow_empty` is set, and
    /// otherwise warns and re-prompts under the same retry policy as
    /// [`prompt_yes_no`](Self::prompt_yes_no).
    pub async fn prompt_text(
        &mut self,
        question: &str,
        options: &TextOptions,
    ) -> Result<String, PromptError> {
        if !self.is_interactive() {
            return options
                .default
                .clone()
                .ok_or(PromptError::NoInteractiveInput("text"));
        }

        let prompt = format!("{}: ", question.trim_end());
        let mut attempts = 0;
        loop {
            self.display(&prompt)?;
            let line = self.read_line().await?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            if let Some(default) = &options.default {
                return Ok(default.clone());
            }
            if options.allow_empty {
                return Ok(String::new());
            }
            self.logger.warn("Input cannot be empty.");
            attempts += 1;
            self.check_retries(attempts)?;
        }
    }

    /// Subscribe `handler` to raw keystroke delivery.
    ///
    /// Returns `false` with no side effects when the input stream is not a
    /// terminal, and `false` with a logged error when the raw-mode switch
    /// fails; in neither case is a handler left attached. An
    /// already-active subscription is detached first, so at most one handler
    /// is ever live. On success the handler runs on a spawned task, once per
    /// decoded keystroke chunk, until [`disable_raw_mode`] is called.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// [`disable_raw_mode`]: Self::disable_raw_mode
    pub fn enable_raw_mode<F>(&mut self, mut handler: F) -> bool
    where
        F: FnMut(&str) + Send + 'static,
    {
        if !self.input.is_terminal() {
            return false;
        }
        if self.raw_task.is_some() || self.raw_active {
            self.disable_raw_mode();
        }
        if let Err(err) = self.input.set_raw_mode(true) {
            self.logger
                .error(&format!("Failed to enable raw mode: {err}"));
            return false;
        }
        let mut chunks = match self.input.key_chunks() {
            Ok(chunks) => chunks,
            Err(err) => {
                self.logger
                    .error(&format!("Failed to subscribe to keystrokes: {err}"));
                let _ = self.input.set_raw_mode(false);
                return false;
            }
        };
        self.raw_task = Some(tokio::spawn(async move {
            while let Some(chunk) = chunks.recv().await {
                handler(&chunk);
            }
        }));
        self.raw_active = true;
        true
    }

    /// Tear down the active raw-mode subscription, if any.
    ///
    /// Failure to restore buffered delivery is logged as a warning and
    /// otherwise swallowed; the subscription is considered gone regardless,
    /// since the caller has no meaningful recovery action. Idempotent.
    pub fn disable_raw_mode(&mut self) {
        if let Some(handler) = self.raw_task.take() {
            handler.abort();
        }
        if self.raw_active {
            if let Err(err) = self.input.set_raw_mode(false) {
                self.logger
                    .warn(&format!("Failed to restore terminal mode: {err}"));
            }
            self.raw_active = false;
        }
    }

    fn display(&mut self, prompt: &str) -> Result<(), PromptError> {
        if let Some(out) = self.output.as_mut() {
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Read one line off the executor; the blocking read runs on the
    /// runtime's blocking pool so prompt callers only suspend.
    async fn read_line(&self) -> Result<String, PromptError> {
        let input = Arc::clone(&self.input);
        let line = task::spawn_blocking(move || input.read_line())
            .await
            .map_err(io::Error::other)??;
        Ok(line)
    }

    fn check_retries(&self, attempts: usize) -> Result<(), PromptError> {
        match self.retry_limit {
            Some(limit) if attempts >= limit => Err(PromptError::RetriesExhausted(limit)),
            _ => Ok(()),
        }
    }
}

impl Drop for InputManager {
    fn drop(&mut self) {
        // Never leave the terminal in raw delivery mode.
        self.disable_raw_mode();
    }
}
