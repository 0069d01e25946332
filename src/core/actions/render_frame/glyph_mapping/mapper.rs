use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::viewport::Viewport;

/// Chooses the glyph for one grid cell. Implementations decide how many
/// escape tests a cell costs and what its classification looks like.
pub trait GlyphMapper {
    fn kind(&self) -> GlyphMapKinds;

    fn cell_glyph(
        &self,
        viewport: &Viewport,
        escape: &EscapeTime,
        row: u16,
        col: u16,
    ) -> &'static str;
}
