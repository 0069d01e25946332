mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::explorer::ports::{FrameSinkPort, KeySourcePort};
pub use crate::controllers::explorer::{ExplorerConfig, ExplorerController, ExplorerError};
pub use crate::core::actions::render_frame::glyph_mapping::factory::glyph_mapper_factory;
pub use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
pub use crate::core::actions::render_frame::glyph_mapping::mapper::GlyphMapper;
pub use crate::core::actions::render_frame::render_frame::render_frame;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::plane_vec::PlaneVec;
pub use crate::core::data::screen_buffer::ScreenBuffer;
pub use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
pub use crate::core::viewport::{Direction, Viewport, ViewportError, Zoom};
pub use crate::input::keymap::{Command, command_for_key};
pub use crate::presenters::terminal::{TerminalFrameSink, TerminalKeySource, TerminalSession};
