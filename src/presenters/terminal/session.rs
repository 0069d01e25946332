use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// RAII guard for the terminal session: raw mode, alternate screen, hidden
/// cursor. Dropping the guard restores all three, so the user's shell comes
/// back intact on every exit path, including error returns.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        log::debug!("entered raw-mode alternate screen");

        Ok(Self { _private: () })
    }

    /// Current terminal size as (rows, cols) character cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            log::error!("failed to leave alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("failed to restore terminal mode: {}", err);
        }
    }
}
