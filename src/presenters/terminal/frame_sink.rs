use crate::controllers::explorer::ports::FrameSinkPort;
use crate::core::data::screen_buffer::ScreenBuffer;
use crossterm::{cursor::MoveTo, queue};
use std::io::{self, Stdout, Write};

/// Writes frames to the real terminal: home the cursor, emit the whole
/// frame in a single write (rows wrap at the right edge, as the frame holds
/// exactly rows × cols glyphs and no newlines), park the cursor on the
/// viewport's center cell, flush.
pub struct TerminalFrameSink {
    out: Stdout,
}

impl TerminalFrameSink {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalFrameSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSinkPort for TerminalFrameSink {
    fn present(&mut self, frame: &ScreenBuffer, cursor: (u16, u16)) -> io::Result<()> {
        let (row, col) = cursor;

        queue!(self.out, MoveTo(0, 0))?;
        self.out.write_all(frame.as_bytes())?;
        // MoveTo takes (column, row)
        queue!(self.out, MoveTo(col, row))?;
        self.out.flush()
    }
}
