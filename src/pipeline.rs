// this_file: src/pipeline.rs

//! The render sequence: shape, rasterize each glyph, composite, advance.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::fonts::FontFace;
use crate::render::GlyphRasterizer;
use crate::shaping::{ShapedGlyph, TextShaper};
use log::{debug, warn};

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 640;

/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 480;

/// Rendering options for one run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Rotation applied to every glyph, in degrees (counter-clockwise)
    pub rotation_degrees: f32,
    /// Canvas row of the text baseline; defaults to 75% of the height
    pub baseline: Option<f32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            rotation_degrees: 0.0,
            baseline: None,
        }
    }
}

/// Pen position in 26.6 fixed-point units, advanced after each glyph by
/// exactly the advance the shaper reported for it.
#[derive(Debug, Clone, Copy, Default)]
struct Pen {
    x: i32,
    y: i32,
}

impl Pen {
    fn advance(&mut self, glyph: &ShapedGlyph) {
        self.x += glyph.x_advance;
        self.y += glyph.y_advance;
    }

    fn x_px(&self) -> f32 {
        self.x as f32 / 64.0
    }

    fn y_px(&self) -> f32 {
        self.y as f32 / 64.0
    }
}

/// Shape `text` with the face and render it into a fresh canvas.
///
/// A glyph that fails to rasterize is logged and skipped; the rest of the
/// sequence continues and partial output is returned. Setup problems
/// (zero-sized canvas) fail the whole run.
pub fn render_text(face: &FontFace, text: &str, options: &RenderOptions) -> Result<Canvas> {
    if options.width == 0 || options.height == 0 {
        return Err(Error::InvalidParameter(format!(
            "canvas dimensions must be non-zero, got {}x{}",
            options.width, options.height
        )));
    }

    let mut canvas = Canvas::new(options.width, options.height);

    let shaped = TextShaper::new().shape(face, text);
    if shaped.is_empty() {
        debug!("no glyphs to render");
        return Ok(canvas);
    }

    let baseline = options
        .baseline
        .unwrap_or(options.height as f32 * 0.75);
    let rasterizer = GlyphRasterizer::new(options.rotation_degrees);
    let mut pen = Pen::default();

    for (index, glyph) in shaped.glyphs.iter().enumerate() {
        let origin_x = pen.x_px() + glyph.x_offset as f32 / 64.0;
        let origin_y = baseline - (pen.y_px() + glyph.y_offset as f32 / 64.0);

        match rasterizer.rasterize(face, glyph.glyph_id, (origin_x, origin_y)) {
            Ok(rendered) => canvas.or_blit(&rendered.bitmap, rendered.left, rendered.top),
            Err(e) => warn!("failed to load glyph image for index {}: {}", index, e),
        }

        pen.advance(glyph);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_advances_in_fixed_point() {
        let mut pen = Pen::default();
        let glyph = ShapedGlyph {
            glyph_id: 1,
            cluster: 0,
            x_advance: 640,
            y_advance: -32,
            x_offset: 0,
            y_offset: 0,
        };

        pen.advance(&glyph);
        assert_eq!(pen.x_px(), 10.0);
        assert_eq!(pen.y_px(), -0.5);

        pen.advance(&glyph);
        assert_eq!(pen.x_px(), 20.0);
        assert_eq!(pen.y_px(), -1.0);
    }

    #[test]
    fn default_options_match_canvas_constants() {
        let options = RenderOptions::default();
        assert_eq!(options.width, CANVAS_WIDTH);
        assert_eq!(options.height, CANVAS_HEIGHT);
        assert_eq!(options.rotation_degrees, 0.0);
        assert!(options.baseline.is_none());
    }
}
