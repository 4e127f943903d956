// this_file: src/lib.rs
//! Glyphcheck - a smoke test for the text-rendering stack
//!
//! This library provides the pieces the `glyphcheck` binary wires
//! together:
//! - Memory-mapped font loading
//! - Text shaping via HarfBuzz
//! - Glyph rasterization via skrifa and zeno
//! - OR-combine compositing into a fixed-size coverage canvas

pub mod canvas;
pub mod error;
pub mod fonts;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod shaping;

// Re-export commonly used types
pub use canvas::{Canvas, GlyphBitmap};
pub use error::{Error, Result};
pub use fonts::FontFace;
pub use pipeline::{render_text, RenderOptions, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
