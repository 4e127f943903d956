// this_file: src/output.rs

//! Canvas export for inspecting rendered output.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use camino::Utf8Path;
use image::GrayImage;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write the canvas to `path`. A `.pgm` extension gets a plain portable
/// graymap; anything else goes through the image crate, which picks the
/// format from the extension.
pub fn save_canvas(canvas: &Canvas, path: &Utf8Path) -> Result<()> {
    match path.extension() {
        Some("pgm") => write_pgm(canvas, path),
        _ => {
            let img = GrayImage::from_raw(
                canvas.width(),
                canvas.height(),
                canvas.pixels().to_vec(),
            )
            .ok_or_else(|| Error::ImageWrite("canvas buffer too small for image".to_string()))?;
            img.save(path.as_std_path())
                .map_err(|e| Error::ImageWrite(format!("failed to write {}: {}", path, e)))
        }
    }
}

/// Plain (P2) PGM writer for quick viewing without image tooling.
fn write_pgm(canvas: &Canvas, path: &Utf8Path) -> Result<()> {
    let file = File::create(path.as_std_path())?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P2")?;
    writeln!(out, "{} {}", canvas.width(), canvas.height())?;
    writeln!(out, "255")?;
    for (i, px) in canvas.pixels().iter().enumerate() {
        write!(out, "{} ", px)?;
        if (i + 1) % (canvas.width() as usize) == 0 {
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::GlyphBitmap;

    #[test]
    fn writes_pgm_with_expected_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pgm");
        let path = Utf8Path::from_path(&path).unwrap();

        let mut canvas = Canvas::new(4, 2);
        canvas.or_blit(&GlyphBitmap::new(1, 1, vec![255]).unwrap(), 1, 0);
        save_canvas(&canvas, path).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("P2"));
        assert_eq!(lines.next(), Some("4 2"));
        assert_eq!(lines.next(), Some("255"));
        assert!(contents.contains("255"));
    }

    #[test]
    fn writes_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let path = Utf8Path::from_path(&path).unwrap();

        let mut canvas = Canvas::new(8, 8);
        canvas.or_blit(&GlyphBitmap::new(2, 2, vec![0x80; 4]).unwrap(), 3, 3);
        save_canvas(&canvas, path).unwrap();

        let img = image::open(path.as_std_path()).unwrap().into_luma8();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(3, 3).0[0], 0x80);
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
    }
}
