// this_file: src/render.rs

//! Per-glyph rasterization using skrifa and zeno.
//!
//! Outlines are extracted with skrifa at the face's nominal pixel size,
//! transformed by the configured rotation plus the caller's pen position,
//! and rendered by zeno into a natural-size coverage mask.

use crate::canvas::GlyphBitmap;
use crate::error::{Error, Result};
use crate::fonts::FontFace;
use read_fonts::types::GlyphId;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::MetadataProvider;
use zeno::{Command, Mask, Transform};

/// A rasterized glyph: its coverage bitmap and where the bitmap's
/// upper-left corner lands in canvas coordinates.
#[derive(Debug, Clone)]
pub struct RasterizedGlyph {
    /// Glyph index in the font's glyph table
    pub glyph_id: u32,
    /// Coverage mask (may be empty for blank glyphs such as spaces)
    pub bitmap: GlyphBitmap,
    /// Canvas x of the bitmap's left edge
    pub left: i32,
    /// Canvas y of the bitmap's top edge
    pub top: i32,
}

/// Glyph rasterizer applying one uniform rotation to every glyph.
pub struct GlyphRasterizer {
    cos: f32,
    sin: f32,
}

impl GlyphRasterizer {
    /// Create a rasterizer. Positive `rotation_degrees` rotates glyphs
    /// counter-clockwise on the rendered image.
    pub fn new(rotation_degrees: f32) -> Self {
        // outline commands are flipped into y-down canvas space before
        // rasterization, so the angle is negated here
        let radians = -rotation_degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        Self { cos, sin }
    }

    /// Rasterize one glyph with its origin placed at `origin` (canvas
    /// coordinates, y growing downward). The rotation is applied about
    /// the glyph origin before translation, so every glyph is rotated
    /// uniformly regardless of pen position.
    pub fn rasterize(
        &self,
        face: &FontFace,
        glyph_id: u32,
        origin: (f32, f32),
    ) -> Result<RasterizedGlyph> {
        let outlines = face.font_ref().outline_glyphs();
        let Some(outline) = outlines.get(GlyphId::new(glyph_id)) else {
            return Err(Error::Rasterization {
                glyph_id,
                reason: "glyph not present in font".to_string(),
            });
        };

        let mut commands = Vec::new();
        let mut pen = ZenoPen::new(&mut commands);
        let settings = DrawSettings::unhinted(Size::new(face.size_px()), LocationRef::default());
        outline.draw(settings, &mut pen).map_err(|e| Error::Rasterization {
            glyph_id,
            reason: format!("failed to extract outline: {}", e),
        })?;

        if commands.is_empty() {
            // blank glyph, nothing to composite
            return Ok(RasterizedGlyph {
                glyph_id,
                bitmap: GlyphBitmap::empty(),
                left: 0,
                top: 0,
            });
        }

        let transform = Transform::new(
            self.cos,
            self.sin,
            -self.sin,
            self.cos,
            origin.0,
            origin.1,
        );

        let (coverage, placement) = Mask::new(commands.as_slice())
            .transform(Some(transform))
            .render();

        Ok(RasterizedGlyph {
            glyph_id,
            left: placement.left,
            top: placement.top,
            bitmap: GlyphBitmap::new(placement.width, placement.height, coverage)?,
        })
    }
}

/// Adapter converting skrifa outline callbacks into zeno commands.
struct ZenoPen<'a> {
    commands: &'a mut Vec<Command>,
}

impl<'a> ZenoPen<'a> {
    fn new(commands: &'a mut Vec<Command>) -> Self {
        Self { commands }
    }
}

impl<'a> OutlinePen for ZenoPen<'a> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::MoveTo([x, -y].into())); // Flip Y for graphics coordinates
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::LineTo([x, -y].into()));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands
            .push(Command::QuadTo([cx0, -cy0].into(), [x, -y].into()));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(Command::CurveTo(
            [cx0, -cy0].into(),
            [cx1, -cy1].into(),
            [x, -y].into(),
        ));
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rotation_is_identity() {
        let rasterizer = GlyphRasterizer::new(0.0);
        assert_eq!(rasterizer.cos, 1.0);
        assert_eq!(rasterizer.sin, 0.0);
    }

    #[test]
    fn rotation_negates_for_canvas_space() {
        let rasterizer = GlyphRasterizer::new(90.0);
        assert!((rasterizer.cos - 0.0).abs() < 1e-6);
        assert!((rasterizer.sin - (-1.0)).abs() < 1e-6);
    }
}
