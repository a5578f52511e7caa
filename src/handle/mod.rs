//! Terminal capability seam.
//!
//! [`InputHandle`] abstracts the process input stream so prompting logic can
//! run against scripted handles in tests. [`StdinHandle`] is the production
//! implementation bound to process stdin; [`ScriptedHandle`] replays queued
//! lines and keystrokes deterministically.

mod scripted;
mod stdio;

use std::io::{self, Write};

use tokio::sync::mpsc::UnboundedReceiver;

pub use scripted::ScriptedHandle;
pub use stdio::StdinHandle;

/// Sink for displayed prompt text. Defaults to process stdout.
pub type OutputHandle = Box<dyn Write + Send>;

/// Capability set required of an input stream.
pub trait InputHandle: Send + Sync {
    /// Whether the stream is attached to an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Block until one line of input is available and return it.
    ///
    /// End of file surfaces as [`io::ErrorKind::UnexpectedEof`]. Any reader
    /// resource is scoped to the call, so it is released on every exit path,
    /// error paths included.
    fn read_line(&self) -> io::Result<String>;

    /// Switch the stream in or out of unbuffered keystroke delivery.
    ///
    /// Enabling also resumes delivery; disabling pauses it and ends any
    /// stream previously handed out by [`key_chunks`](Self::key_chunks).
    fn set_raw_mode(&self, enabled: bool) -> io::Result<()>;

    /// Begin delivering decoded keystroke chunks.
    ///
    /// Each chunk is the text decoding of one incoming key. Delivery ends
    /// when raw mode is disabled or the receiver is dropped.
    fn key_chunks(&self) -> io::Result<UnboundedReceiver<String>>;
}
