//! Crossterm adapters for the real terminal: session lifetime, frame
//! output, and key input.

pub mod frame_sink;
pub mod key_source;
pub mod session;

pub use frame_sink::TerminalFrameSink;
pub use key_source::TerminalKeySource;
pub use session::TerminalSession;
