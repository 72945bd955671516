//! Font loading with a silent fallback chain
//!
//! Resolution order: the caller-supplied path, then a fixed list of common
//! system fonts, then a bundled DejaVu Sans. A missing or unreadable font
//! never fails a watermark run.

use std::fs;
use std::path::Path;

use ab_glyph::FontVec;

use crate::error::{Error, Result};

/// Bundled fallback font, always available
static DEFAULT_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// System font candidates tried when no usable font path is given
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\calibri.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Load a font, falling back through system candidates to the bundled font.
///
/// The explicit `font_path` is tried first. Candidates that are missing or
/// fail to parse are skipped silently. Only a corrupt bundled font could
/// make this fail, so callers can rely on getting a usable font back.
pub fn load_font(font_path: Option<&Path>) -> Result<FontVec> {
    if let Some(path) = font_path {
        if let Some(font) = load_font_file(path) {
            return Ok(font);
        }
    }

    for candidate in FALLBACK_FONTS {
        if let Some(font) = load_font_file(Path::new(candidate)) {
            return Ok(font);
        }
    }

    FontVec::try_from_vec(DEFAULT_FONT.to_vec())
        .map_err(|_| Error::Font("bundled fallback font failed to parse".to_string()))
}

fn load_font_file(path: &Path) -> Option<FontVec> {
    let data = fs::read(path).ok()?;
    FontVec::try_from_vec(data).ok()
}
