//! Error types for the photo-watermark library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the photo-watermark library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// PNG encoding error (metadata-bearing output path)
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Font error
    #[error("Font error: {0}")]
    Font(String),

    /// Input directory missing or not a directory
    #[error("Input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}
