//! Text tile construction
//!
//! A tile is a small transparent image holding one rendering of the
//! watermark string, later repeated across the overlay grid.

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Build a transparent tile containing `text` once, with optional outline.
///
/// The tile measures `measured_text + 2 * (padding + stroke_width)` in each
/// dimension, so the outline never clips at the tile edge. The outline is
/// produced by stamping the glyphs at every integer offset within the
/// stroke radius before drawing the fill on top. Output is deterministic
/// for identical inputs.
pub fn build_text_tile(
    text: &str,
    font: &FontVec,
    scale: PxScale,
    fill: Rgba<u8>,
    stroke_width: u32,
    stroke_fill: Rgba<u8>,
    padding: u32,
) -> RgbaImage {
    let (text_w, text_h) = text_size(scale, font, text);

    let inset = padding + stroke_width;
    let tile_w = text_w + 2 * inset;
    let tile_h = text_h + 2 * inset;
    let mut tile = RgbaImage::from_pixel(tile_w, tile_h, Rgba([0, 0, 0, 0]));

    if text.is_empty() {
        return tile;
    }

    let origin = inset as i32;
    if stroke_width > 0 && stroke_fill.0[3] > 0 {
        let radius = stroke_width as i32;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius || (dx == 0 && dy == 0) {
                    continue;
                }
                draw_text_mut(
                    &mut tile,
                    stroke_fill,
                    origin + dx,
                    origin + dy,
                    scale,
                    font,
                    text,
                );
            }
        }
    }
    draw_text_mut(&mut tile, fill, origin, origin, scale, font, text);

    tile
}
