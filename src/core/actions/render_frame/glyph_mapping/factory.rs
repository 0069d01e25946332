use crate::core::actions::render_frame::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::actions::render_frame::glyph_mapping::mapper::GlyphMapper;
use crate::core::actions::render_frame::glyph_mapping::mappers::{
    edge_shaded::EdgeShaded, quad_sample::QuadSample, single_sample::SingleSample,
};

#[must_use]
pub fn glyph_mapper_factory(kind: GlyphMapKinds) -> Box<dyn GlyphMapper> {
    match kind {
        GlyphMapKinds::QuadSample => Box::new(QuadSample),
        GlyphMapKinds::SingleSample => Box::new(SingleSample),
        GlyphMapKinds::EdgeShaded => Box::new(EdgeShaded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            GlyphMapKinds::ALL.first(),
            Some(&GlyphMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in GlyphMapKinds::ALL {
            let mapper = glyph_mapper_factory(kind);
            assert_eq!(mapper.kind(), kind);
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = GlyphMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
