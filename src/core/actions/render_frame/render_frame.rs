use crate::core::actions::render_frame::glyph_mapping::mapper::GlyphMapper;
use crate::core::data::screen_buffer::ScreenBuffer;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::viewport::Viewport;

/// Fills the reusable screen buffer with one complete frame: rows walk top
/// to bottom, columns left to right, one glyph per cell. The buffer is
/// reset first, so a frame is never appended to a previous one.
pub fn render_frame<M: GlyphMapper + ?Sized>(
    viewport: &Viewport,
    escape: &EscapeTime,
    mapper: &M,
    frame: &mut ScreenBuffer,
) {
    frame.clear();

    for row in 0..viewport.rows() {
        for col in 0..viewport.cols() {
            frame.push_glyph(mapper.cell_glyph(viewport, escape, row, col));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::glyph_mapping::factory::glyph_mapper_factory;
    use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
    use crate::core::data::complex::Complex;
    use crate::core::data::plane_vec::PlaneVec;

    fn home_view() -> Viewport {
        Viewport::new(
            Complex { re: -0.5, im: 0.0 },
            PlaneVec { x: 1.5, y: 1.0 },
            21,
            61,
        )
        .unwrap()
    }

    #[test]
    fn frame_holds_one_glyph_per_cell_for_every_mapper() {
        let viewport = home_view();
        let escape = EscapeTime::default();

        for &kind in GlyphMapKinds::ALL {
            let mapper = glyph_mapper_factory(kind);
            let mut frame = ScreenBuffer::new(viewport.rows(), viewport.cols());

            render_frame(&viewport, &escape, mapper.as_ref(), &mut frame);

            let text = std::str::from_utf8(frame.as_bytes()).unwrap();
            assert_eq!(text.chars().count(), 21 * 61, "kind: {}", kind);
        }
    }

    #[test]
    fn center_cell_classifies_as_in_set_for_every_mapper() {
        // (-0.5, 0) sits inside the main body of the set
        let viewport = home_view();
        let escape = EscapeTime::default();
        let (row, col) = viewport.center_cell();

        for (kind, expected) in [
            (GlyphMapKinds::QuadSample, "█"),
            (GlyphMapKinds::SingleSample, "*"),
            (GlyphMapKinds::EdgeShaded, "#"),
        ] {
            let mapper = glyph_mapper_factory(kind);
            assert_eq!(
                mapper.cell_glyph(&viewport, &escape, row, col),
                expected,
                "kind: {}",
                kind
            );
        }
    }

    #[test]
    fn center_cell_of_the_rendered_frame_is_a_star_in_single_sample_mode() {
        let viewport = home_view();
        let escape = EscapeTime::default();
        let mapper = glyph_mapper_factory(GlyphMapKinds::SingleSample);
        let mut frame = ScreenBuffer::new(viewport.rows(), viewport.cols());

        render_frame(&viewport, &escape, mapper.as_ref(), &mut frame);

        // single-sample glyphs are all one byte, so the frame indexes
        // directly by cell
        let (row, col) = viewport.center_cell();
        let index = usize::from(row) * usize::from(viewport.cols()) + usize::from(col);
        assert_eq!(frame.as_bytes()[index], b'*');
    }

    #[test]
    fn rendering_reuses_the_buffer_without_growing_it() {
        let viewport = home_view();
        let escape = EscapeTime::default();
        let mapper = glyph_mapper_factory(GlyphMapKinds::QuadSample);
        let mut frame = ScreenBuffer::new(viewport.rows(), viewport.cols());

        render_frame(&viewport, &escape, mapper.as_ref(), &mut frame);
        let first_len = frame.len();
        let capacity = frame.capacity();

        render_frame(&viewport, &escape, mapper.as_ref(), &mut frame);

        assert_eq!(frame.len(), first_len);
        assert_eq!(frame.capacity(), capacity);
    }

    #[test]
    fn a_view_of_empty_plane_renders_all_blanks() {
        let viewport = Viewport::new(
            Complex { re: 50.0, im: 50.0 },
            PlaneVec { x: 1.5, y: 1.0 },
            5,
            9,
        )
        .unwrap();
        let escape = EscapeTime::default();
        let mapper = glyph_mapper_factory(GlyphMapKinds::QuadSample);
        let mut frame = ScreenBuffer::new(viewport.rows(), viewport.cols());

        render_frame(&viewport, &escape, mapper.as_ref(), &mut frame);

        assert!(frame.as_bytes().iter().all(|&b| b == b' '));
        assert_eq!(frame.len(), 5 * 9);
    }
}
