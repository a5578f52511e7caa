//! Process-stdin implementation of [`InputHandle`].

use std::io::{self, BufRead, IsTerminal};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::InputHandle;

/// How long the key-delivery loop waits before re-checking its stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Input handle bound to the process's standard input.
///
/// Raw mode is switched through crossterm; keystrokes are decoded from
/// crossterm key events on a blocking poll loop that runs until raw mode is
/// disabled or the chunk receiver is dropped.
#[derive(Default)]
pub struct StdinHandle {
    /// Stop flag for the current key-delivery loop, if one is running.
    stop: Mutex<Option<Arc<AtomicBool>>>,
}

impl StdinHandle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputHandle for StdinHandle {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line)
    }

    fn set_raw_mode(&self, enabled: bool) -> io::Result<()> {
        if enabled {
            terminal::enable_raw_mode()
        } else {
            if let Some(stop) = self.stop.lock().unwrap().take() {
                stop.store(true, Ordering::SeqCst);
            }
            terminal::disable_raw_mode()
        }
    }

    fn key_chunks(&self) -> io::Result<UnboundedReceiver<String>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        *self.stop.lock().unwrap() = Some(Arc::clone(&stop));

        tokio::task::spawn_blocking(move || {
            while !stop.load(Ordering::SeqCst) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }
                let key = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                    Ok(_) => continue,
                    Err(_) => break,
                };
                if let Some(chunk) = decode_key(key) {
                    if tx.send(chunk).is_err() {
                        break;
                    }
                }
            }
        });

        Ok(rx)
    }
}

/// Decode a key event into the chunk text a raw-mode handler receives.
///
/// Mirrors what a raw terminal delivers on the wire: Escape and control
/// characters as their C0 bytes, printable characters verbatim. Keys with no
/// byte representation (arrows, function keys) are dropped.
fn decode_key(key: KeyEvent) -> Option<String> {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => Some("\u{1b}".to_string()),
        KeyCode::Enter => Some("\r".to_string()),
        KeyCode::Tab => Some("\t".to_string()),
        KeyCode::Backspace => Some("\u{7f}".to_string()),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.is_ascii_alphabetic() {
                let byte = (c.to_ascii_uppercase() as u8) & 0x1f;
                Some((byte as char).to_string())
            } else {
                None
            }
        }
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn escape_decodes_to_escape_byte() {
        assert_eq!(decode_key(key(KeyCode::Esc)).as_deref(), Some("\u{1b}"));
    }

    #[test]
    fn enter_decodes_to_carriage_return() {
        assert_eq!(decode_key(key(KeyCode::Enter)).as_deref(), Some("\r"));
    }

    #[test]
    fn printable_char_passes_through() {
        assert_eq!(decode_key(key(KeyCode::Char('q'))).as_deref(), Some("q"));
    }

    #[test]
    fn ctrl_letter_decodes_to_control_byte() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(event).as_deref(), Some("\u{3}"));
    }

    #[test]
    fn keys_without_byte_form_are_dropped() {
        assert!(decode_key(key(KeyCode::F(1))).is_none());
        assert!(decode_key(key(KeyCode::Up)).is_none());
    }
}
