//! tty-prompt: line-oriented prompts and raw keystroke subscriptions over a
//! terminal's standard input.
//!
//! [`InputManager`] asks yes/no and free-text questions on an interactive
//! terminal and falls back to caller-supplied defaults when input is
//! redirected; [`ManualControlBinder`] layers a fixed advance/exit keymap on
//! top for simple manual-control loops.
//!
//! # Quick start
//!
//! ```no_run
//! use tty_prompt::{InputManager, YesNoOptions};
//!
//! # async fn example() -> Result<(), tty_prompt::PromptError> {
//! let mut input = InputManager::stdio();
//! let proceed = input
//!     .prompt_yes_no("Continue?", &YesNoOptions { default: Some(true) })
//!     .await?;
//! if proceed {
//!     println!("continuing");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Prompts suspend the calling task while a line is read; raw-mode handlers
//! run on a spawned task, once per decoded keystroke, until the subscription
//! is explicitly disabled. Invalid interactive answers re-prompt forever by
//! default; set [`InputOptions::retry_limit`] to bound the loop.

pub mod error;
pub mod handle;
pub mod logger;
pub mod manager;
pub mod manual;

pub use error::PromptError;
pub use handle::{InputHandle, OutputHandle, ScriptedHandle, StdinHandle};
pub use logger::{NullLogger, PromptLogger, TracingLogger};
pub use manager::{InputManager, InputOptions, TextOptions, YesNoOptions};
pub use manual::{ManualControlBinder, ManualControls};
