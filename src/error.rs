// this_file: src/error.rs
//! Error types for the glyphcheck library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for glyphcheck operations
#[derive(Debug, Error)]
pub enum Error {
    /// Font file does not exist
    #[error("font file not found: {path}")]
    FontNotFound { path: PathBuf },

    /// Memory-mapping the font file failed
    #[error("failed to map font file {path}: {source}")]
    Mmap {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Font data could not be parsed
    #[error("invalid font {path}: {reason}")]
    InvalidFont { path: PathBuf, reason: String },

    /// A single glyph could not be rasterized; callers may skip and continue
    #[error("failed to rasterize glyph {glyph_id}: {reason}")]
    Rasterization { glyph_id: u32, reason: String },

    /// Invalid input parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Canvas export error
    #[error("image write error: {0}")]
    ImageWrite(String),

    /// IO operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for glyphcheck operations
pub type Result<T> = std::result::Result<T, Error>;
