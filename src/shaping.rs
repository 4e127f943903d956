// this_file: src/shaping.rs

//! Text shaping using HarfBuzz.

use crate::fonts::FontFace;
use harfbuzz_rs::UnicodeBuffer;
use log::debug;

/// One shaped glyph. Advances and offsets are in 26.6 fixed-point units,
/// as reported by HarfBuzz for the face's configured scale.
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    /// Glyph index in the font's glyph table
    pub glyph_id: u32,
    /// Index of the source character cluster this glyph belongs to
    pub cluster: u32,
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

/// Shaped glyph sequence for one run of text, in shaping order.
#[derive(Debug, Clone, Default)]
pub struct ShapedText {
    pub glyphs: Vec<ShapedGlyph>,
}

impl ShapedText {
    /// Number of shaped glyphs (may differ from the input character count).
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True when shaping produced no glyphs (empty input text).
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Text shaper delegating to HarfBuzz.
pub struct TextShaper;

impl TextShaper {
    /// Create a new text shaper.
    pub fn new() -> Self {
        Self
    }

    /// Shape `text` with the given face. Segment properties (direction,
    /// script, language) are guessed from the text content.
    pub fn shape(&self, face: &FontFace, text: &str) -> ShapedText {
        let buffer = UnicodeBuffer::new().add_str(text);
        let output = harfbuzz_rs::shape(face.hb_font(), buffer, &[]);

        let infos = output.get_glyph_infos();
        let positions = output.get_glyph_positions();

        let glyphs = infos
            .iter()
            .zip(positions)
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.codepoint,
                cluster: info.cluster,
                x_advance: pos.x_advance,
                y_advance: pos.y_advance,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
            })
            .collect::<Vec<_>>();

        debug!("shaped {:?} into {} glyphs", text, glyphs.len());
        ShapedText { glyphs }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
