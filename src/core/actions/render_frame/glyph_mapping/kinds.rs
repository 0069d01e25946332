#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphMapKinds {
    QuadSample,
    SingleSample,
    EdgeShaded,
}

impl GlyphMapKinds {
    pub const ALL: &'static [Self] = &[Self::QuadSample, Self::SingleSample, Self::EdgeShaded];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::QuadSample => "Quadrant blocks",
            Self::SingleSample => "Single sample",
            Self::EdgeShaded => "Edge shaded",
        }
    }
}

impl Default for GlyphMapKinds {
    fn default() -> Self {
        Self::QuadSample
    }
}

impl std::fmt::Display for GlyphMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
