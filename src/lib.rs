//! Photo Watermark Library
//!
//! A library for batch-watermarking portfolio images before web
//! publication. This library provides functionality to:
//! - Composite a tiled, rotated text pattern over an image
//! - Place a single diagonal or corner watermark with a drop shadow
//! - Parse named/hex colors and load fonts with a silent fallback chain
//! - Embed attribution metadata (Copyright, Author, URL, License) in PNGs
//! - Drive a per-file-isolated batch run over a directory of images
//!
//! # Example
//!
//! ```no_run
//! use photo_watermark::watermark::{apply_tiled_watermark, TiledStyle};
//!
//! let image = image::open("photo.png").expect("Failed to open image");
//! let marked = apply_tiled_watermark(&image, "© 2025 Example", &TiledStyle::default())
//!     .expect("Failed to watermark");
//! marked.save("photo_wm.png").expect("Failed to save");
//! ```

pub mod batch;
pub mod color;
pub mod error;
pub mod font;
pub mod metadata;
pub mod watermark;

// Re-export commonly used items
pub use error::{Error, Result};
