//! Style parameters for watermark composition
//!
//! Plain value structs passed explicitly into each compositor call; nothing
//! here is read from ambient process state.

use std::path::PathBuf;

/// Parameters for the tiled (repeating pattern) watermark
#[derive(Debug, Clone)]
pub struct TiledStyle {
    /// Fill opacity, 0..1
    pub opacity: f64,
    /// Rotation in degrees, counter-clockwise
    pub angle: f32,
    /// Font size as a fraction of the image width
    pub scale: f64,
    /// Tile spacing multiplier (1.0 = tiles touch; clamped to at least 0.5)
    pub spacing: f32,
    /// Fill color, named or hex
    pub color: String,
    /// Outline thickness in pixels (0 disables the outline)
    pub stroke_width: u32,
    /// Outline color, named or hex
    pub stroke_color: String,
    /// Outline opacity, 0..1
    pub stroke_opacity: f64,
    /// Optional font file; falls back to system fonts, then the bundled font
    pub font_path: Option<PathBuf>,
    /// Horizontal tiling origin offset in pixels
    pub offset_x: i64,
    /// Vertical tiling origin offset in pixels
    pub offset_y: i64,
}

impl Default for TiledStyle {
    fn default() -> Self {
        Self {
            opacity: 0.22,
            angle: 30.0,
            scale: 0.06,
            spacing: 2.2,
            color: "#FFFFFF".to_string(),
            stroke_width: 2,
            stroke_color: "#000000".to_string(),
            stroke_opacity: 0.5,
            font_path: None,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// Placement of a single (non-repeating) watermark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkPlacement {
    /// Centered, rotated 30 degrees
    Diagonal,
    /// Bottom-right corner
    Corner,
}

/// Parameters for the single watermark
#[derive(Debug, Clone)]
pub struct SingleStyle {
    /// Where to place the mark
    pub placement: MarkPlacement,
    /// Text opacity, 0..1
    pub opacity: f64,
    /// Font size as a fraction of the image width
    pub scale: f64,
    /// Distance from the image edges in pixels (corner placement)
    pub margin: u32,
    /// Optional font file; same fallback chain as the tiled style
    pub font_path: Option<PathBuf>,
}

impl Default for SingleStyle {
    fn default() -> Self {
        Self {
            placement: MarkPlacement::Diagonal,
            opacity: 0.2,
            scale: 0.06,
            margin: 24,
            font_path: None,
        }
    }
}
