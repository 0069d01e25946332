pub mod frame_sink;
pub mod key_source;

pub use frame_sink::FrameSinkPort;
pub use key_source::KeySourcePort;
