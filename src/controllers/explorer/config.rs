use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::data::complex::Complex;
use crate::core::data::plane_vec::PlaneVec;
use crate::core::fractals::mandelbrot::algorithm::DEFAULT_ITERATION_BUDGET;

pub(crate) fn default_center() -> Complex {
    Complex { re: -0.5, im: 0.0 }
}

pub(crate) fn default_extents() -> PlaneVec {
    PlaneVec { x: 1.5, y: 1.0 }
}

/// Initial view and rendering choices. The horizontal extent is advisory;
/// the viewport recomputes it to fit the terminal's cell aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub center: Complex,
    pub extents: PlaneVec,
    pub iteration_budget: u32,
    pub glyph_map: GlyphMapKinds,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            extents: default_extents(),
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            glyph_map: GlyphMapKinds::default(),
        }
    }
}
