// this_file: src/fonts.rs

//! Font face loading.
//!
//! Fonts are memory mapped and parsed zero-copy. A loaded face owns its
//! mapping together with the HarfBuzz handles built from it, so dropping
//! the face releases everything regardless of which path the program
//! exits through.

use crate::error::{Error, Result};
use camino::Utf8Path;
use harfbuzz_rs::{Face as HbFace, Font as HbFont, Owned};
use memmap2::Mmap;
use read_fonts::{FileRef, FontRef};
use std::fs::File;
use std::io::ErrorKind;
use std::sync::Arc;

/// Maximum allowed font file size (50MB)
pub const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024;

/// A loaded font face at a nominal pixel size.
pub struct FontFace {
    /// Memory-mapped font data; kept alive for the 'static views below
    #[allow(dead_code)]
    mmap: Arc<Mmap>,
    /// Font reference (zero-copy view into mmap)
    font_ref: FontRef<'static>,
    /// HarfBuzz font scaled to the nominal size
    hb_font: Owned<HbFont<'static>>,
    size_px: f32,
}

impl FontFace {
    /// Memory-map and parse a font file, and build the HarfBuzz font for
    /// it scaled to `size_px` pixels per em.
    pub fn load(path: &Utf8Path, size_px: f32) -> Result<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "font size must be positive, got {}",
                size_px
            )));
        }

        let std_path = path.as_std_path();
        let file = File::open(std_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FontNotFound {
                path: std_path.to_path_buf(),
            },
            _ => Error::Mmap {
                path: std_path.to_path_buf(),
                source: e,
            },
        })?;

        let meta = file.metadata().map_err(|e| Error::Mmap {
            path: std_path.to_path_buf(),
            source: e,
        })?;
        if meta.len() > MAX_FONT_SIZE {
            return Err(Error::InvalidParameter(format!(
                "font file too large: {} bytes (max: {} bytes)",
                meta.len(),
                MAX_FONT_SIZE
            )));
        }

        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| Error::Mmap {
                path: std_path.to_path_buf(),
                source: e,
            })?
        };
        let mmap = Arc::new(mmap);

        // Convert mmap bytes to 'static lifetime (safe because mmap is Arc'd
        // and outlives every view handed out by this struct)
        let font_data: &'static [u8] =
            unsafe { std::slice::from_raw_parts(mmap.as_ptr(), mmap.len()) };

        let file_ref = FileRef::new(font_data).map_err(|e| Error::InvalidFont {
            path: std_path.to_path_buf(),
            reason: format!("failed to parse font file: {}", e),
        })?;

        let font_ref = match file_ref {
            FileRef::Font(f) => f,
            FileRef::Collection(c) => c.get(0).map_err(|e| Error::InvalidFont {
                path: std_path.to_path_buf(),
                reason: format!("failed to get font from collection: {}", e),
            })?,
        };

        let face = HbFace::from_bytes(font_data, 0);
        let mut hb_font = HbFont::new(face);
        let scale = (size_px * 64.0).round() as i32;
        hb_font.set_scale(scale, scale);

        log::debug!("loaded font {} at {}px", path, size_px);

        Ok(Self {
            mmap,
            font_ref,
            hb_font,
            size_px,
        })
    }

    /// Get the font reference.
    pub fn font_ref(&self) -> &FontRef<'static> {
        &self.font_ref
    }

    /// Get the sized HarfBuzz font.
    pub fn hb_font(&self) -> &HbFont<'static> {
        &self.hb_font
    }

    /// Nominal pixel size the face was loaded at.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_font_reports_not_found() {
        let result = FontFace::load(Utf8Path::new("no-such-font.ttf"), 16.0);
        assert!(matches!(result, Err(Error::FontNotFound { .. })));
    }

    #[test]
    fn garbage_data_reports_invalid_font() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font file").unwrap();
        file.flush().unwrap();

        let path = Utf8Path::from_path(file.path()).unwrap();
        let result = FontFace::load(path, 16.0);
        assert!(matches!(result, Err(Error::InvalidFont { .. })));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let result = FontFace::load(Utf8Path::new("whatever.ttf"), 0.0);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));

        let result = FontFace::load(Utf8Path::new("whatever.ttf"), -4.0);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
