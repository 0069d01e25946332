use crate::controllers::explorer::ports::KeySourcePort;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;

/// Blocks until a character key press arrives; releases, repeats, and
/// non-character events (resize, mouse, navigation keys) are skipped.
pub struct TerminalKeySource;

impl TerminalKeySource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySourcePort for TerminalKeySource {
    fn next_key(&mut self) -> io::Result<char> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let KeyCode::Char(c) = key.code {
                    return Ok(c);
                }
            }
        }
    }
}
