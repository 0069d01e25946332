use std::io;

/// Blocking source of single key presses.
pub trait KeySourcePort {
    fn next_key(&mut self) -> io::Result<char>;
}
