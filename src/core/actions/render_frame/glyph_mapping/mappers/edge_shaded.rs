use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::actions::render_frame::glyph_mapping::mapper::GlyphMapper;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::viewport::Viewport;

/// Escape fractions above this render as the boundary halo.
const HALO_THRESHOLD: f64 = 0.9;

pub(crate) fn shade_for_fraction(fraction: f64) -> &'static str {
    if fraction == 1.0 {
        "#"
    } else if fraction > HALO_THRESHOLD {
        ":"
    } else {
        " "
    }
}

/// One escape test at the cell center, shaded in three levels: members are
/// solid, points that only just escaped draw a halo along the set boundary.
#[derive(Debug, Default)]
pub struct EdgeShaded;

impl GlyphMapper for EdgeShaded {
    fn kind(&self) -> GlyphMapKinds {
        GlyphMapKinds::EdgeShaded
    }

    fn cell_glyph(
        &self,
        viewport: &Viewport,
        escape: &EscapeTime,
        row: u16,
        col: u16,
    ) -> &'static str {
        shade_for_fraction(escape.escape_fraction(viewport.cell_center(row, col)))
    }
}
