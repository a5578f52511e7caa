//! Scripted input handle for tests and deterministic automation.
//!
//! Queue lines with [`ScriptedHandle::push_line`] before prompting; feed
//! keystroke chunks through [`ScriptedHandle::feed_keys`] after enabling raw
//! mode. Whether the handle reports terminal attachment is fixed at
//! construction.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::InputHandle;

/// Input handle that replays queued lines and keystrokes.
pub struct ScriptedHandle {
    interactive: bool,
    fail_raw: bool,
    lines: Mutex<VecDeque<String>>,
    keys: Mutex<Option<UnboundedSender<String>>>,
    raw_calls: Mutex<Vec<bool>>,
}

impl ScriptedHandle {
    /// A handle that reports terminal attachment.
    pub fn terminal() -> Self {
        Self::with_interactive(true)
    }

    /// A handle that reports no terminal, like a redirected stdin.
    pub fn detached() -> Self {
        Self::with_interactive(false)
    }

    fn with_interactive(interactive: bool) -> Self {
        Self {
            interactive,
            fail_raw: false,
            lines: Mutex::new(VecDeque::new()),
            keys: Mutex::new(None),
            raw_calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every raw-mode switch fail, for exercising the error path.
    pub fn fail_raw_mode(mut self) -> Self {
        self.fail_raw = true;
        self
    }

    /// Queue one line to be returned by a future `read_line` call.
    pub fn push_line(&self, line: &str) {
        self.lines.lock().unwrap().push_back(line.to_string());
    }

    /// Deliver a keystroke chunk to the current raw-mode subscriber, if any.
    pub fn feed_keys(&self, chunk: &str) {
        if let Some(tx) = self.keys.lock().unwrap().as_ref() {
            let _ = tx.send(chunk.to_string());
        }
    }

    /// Raw-mode switches observed so far, in call order.
    pub fn raw_mode_calls(&self) -> Vec<bool> {
        self.raw_calls.lock().unwrap().clone()
    }
}

impl InputHandle for ScriptedHandle {
    fn is_terminal(&self) -> bool {
        self.interactive
    }

    fn read_line(&self) -> io::Result<String> {
        self.lines
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| io::ErrorKind::UnexpectedEof.into())
    }

    fn set_raw_mode(&self, enabled: bool) -> io::Result<()> {
        if self.fail_raw {
            return Err(io::ErrorKind::Unsupported.into());
        }
        self.raw_calls.lock().unwrap().push(enabled);
        if !enabled {
            // Dropping the sender ends the subscriber's chunk stream.
            self.keys.lock().unwrap().take();
        }
        Ok(())
    }

    fn key_chunks(&self) -> io::Result<UnboundedReceiver<String>> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.keys.lock().unwrap() = Some(tx);
        Ok(rx)
    }
}
