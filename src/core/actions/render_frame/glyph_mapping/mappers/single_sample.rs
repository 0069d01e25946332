use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::actions::render_frame::glyph_mapping::mapper::GlyphMapper;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::viewport::Viewport;

/// One escape test at the cell center: a star for members, blank space for
/// everything else. The cheapest mapper at one iteration run per cell.
#[derive(Debug, Default)]
pub struct SingleSample;

impl GlyphMapper for SingleSample {
    fn kind(&self) -> GlyphMapKinds {
        GlyphMapKinds::SingleSample
    }

    fn cell_glyph(
        &self,
        viewport: &Viewport,
        escape: &EscapeTime,
        row: u16,
        col: u16,
    ) -> &'static str {
        if escape.contains(viewport.cell_center(row, col)) {
            "*"
        } else {
            " "
        }
    }
}
