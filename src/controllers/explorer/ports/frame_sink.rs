use crate::core::data::screen_buffer::ScreenBuffer;
use std::io;

/// Where finished frames go. `cursor` is the grid cell (row, col) the
/// terminal cursor should rest on once the frame is visible.
pub trait FrameSinkPort {
    fn present(&mut self, frame: &ScreenBuffer, cursor: (u16, u16)) -> io::Result<()>;
}
