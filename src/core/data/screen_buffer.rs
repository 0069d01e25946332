/// Worst-case UTF-8 bytes per cell: the block-element glyphs are 3 bytes,
/// the ASCII fallbacks 1.
const MAX_GLYPH_BYTES: usize = 4;

/// One rendered frame as raw bytes. The buffer is reused across frames:
/// `clear` resets the logical length, the capacity reserved at construction
/// is never given back.
#[derive(Debug)]
pub struct ScreenBuffer {
    rows: u16,
    cols: u16,
    bytes: Vec<u8>,
}

impl ScreenBuffer {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        let capacity = usize::from(rows) * usize::from(cols) * MAX_GLYPH_BYTES;

        Self {
            rows,
            cols,
            bytes: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn push_glyph(&mut self, glyph: &str) {
        self.bytes.extend_from_slice(glyph.as_bytes());
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }
}
