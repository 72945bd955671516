//! Tiled watermark compositor
//!
//! Repeats a text tile in a rotated grid across the whole image, in the
//! style of stock-photo preview watermarks. The pattern is built on an
//! oversized square canvas, rotated about its center, and cropped back to
//! the source dimensions before the final alpha composite.

use ab_glyph::PxScale;
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use crate::color::parse_color;
use crate::error::Result;
use crate::font::load_font;
use crate::watermark::style::TiledStyle;
use crate::watermark::tile::build_text_tile;

/// Lower bound on the spacing multiplier; keeps the grid step positive
const MIN_SPACING: f32 = 0.5;

/// Smallest font size used for the tiled text, in pixels
const MIN_FONT_SIZE: f64 = 16.0;

/// Build a `width x height` transparent overlay with `tile` repeated in a
/// rotated grid.
///
/// The working canvas side is `hypot(width, height) + 2 * max(tile_w,
/// tile_h)` so the rotated pattern always covers the target rectangle.
/// Tiling starts one tile before the canvas origin (shifted by `offset`)
/// to avoid truncation at the edges, and the grid step is the tile
/// dimension times the spacing multiplier, clamped to at least one pixel
/// so a degenerate tile cannot stall the loop. Positive angles rotate
/// counter-clockwise; content rotated out of the canvas is discarded.
pub fn make_tiled_overlay(
    width: u32,
    height: u32,
    tile: &RgbaImage,
    spacing_scale: f32,
    angle_deg: f32,
    offset: (i64, i64),
) -> RgbaImage {
    let (tile_w, tile_h) = tile.dimensions();
    let spacing = spacing_scale.max(MIN_SPACING);

    let diag = f64::from(width).hypot(f64::from(height)).ceil() as u32;
    let side = diag + 2 * tile_w.max(tile_h);
    let mut canvas = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0]));

    let step_x = ((tile_w as f32 * spacing) as i64).max(1);
    let step_y = ((tile_h as f32 * spacing) as i64).max(1);
    let start_x = -i64::from(tile_w) + offset.0;
    let start_y = -i64::from(tile_h) + offset.1;
    let end_x = i64::from(side) + i64::from(tile_w);
    let end_y = i64::from(side) + i64::from(tile_h);

    let mut y = start_y;
    while y < end_y {
        let mut x = start_x;
        while x < end_x {
            imageops::overlay(&mut canvas, tile, x, y);
            x += step_x;
        }
        y += step_y;
    }

    let rotated = rotate_about_center(
        &canvas,
        -angle_deg.to_radians(),
        Interpolation::Bicubic,
        Rgba([0, 0, 0, 0]),
    );

    let left = (side - width) / 2;
    let top = (side - height) / 2;
    imageops::crop_imm(&rotated, left, top, width, height).to_image()
}

/// Apply a tiled text watermark to an image.
///
/// The source is never mutated; the result is a new RGBA image of
/// identical dimensions regardless of the input color model. The font
/// size is derived from the image width (`width * style.scale`, at least
/// 16px) so the pattern density is resolution-independent.
pub fn apply_tiled_watermark(
    image: &DynamicImage,
    text: &str,
    style: &TiledStyle,
) -> Result<RgbaImage> {
    let mut base = image.to_rgba8();
    let (width, height) = base.dimensions();

    let font = load_font(style.font_path.as_deref())?;
    let font_size = (f64::from(width) * style.scale).floor().max(MIN_FONT_SIZE);
    let scale = PxScale::from(font_size as f32);

    let fill = parse_color(&style.color, style.opacity)?;
    let stroke_fill = if style.stroke_width > 0 {
        parse_color(&style.stroke_color, style.stroke_opacity)?
    } else {
        Rgba([0, 0, 0, 0])
    };

    let padding = (font_size as u32 / 6).max(8);
    let tile = build_text_tile(
        text,
        &font,
        scale,
        fill,
        style.stroke_width,
        stroke_fill,
        padding,
    );

    let overlay = make_tiled_overlay(
        width,
        height,
        &tile,
        style.spacing,
        style.angle,
        (style.offset_x, style.offset_y),
    );
    imageops::overlay(&mut base, &overlay, 0, 0);

    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tile() -> RgbaImage {
        let font = load_font(None).unwrap();
        build_text_tile(
            "© TEST",
            &font,
            PxScale::from(16.0),
            Rgba([255, 255, 255, 200]),
            0,
            Rgba([0, 0, 0, 0]),
            8,
        )
    }

    #[test]
    fn test_overlay_has_exact_target_dimensions() {
        let tile = test_tile();
        for (w, h) in [(333, 217), (64, 64), (100, 1)] {
            let overlay = make_tiled_overlay(w, h, &tile, 2.2, 30.0, (0, 0));
            assert_eq!(overlay.dimensions(), (w, h));
        }
    }

    #[test]
    fn test_overlay_covers_all_quadrants() {
        let tile = test_tile();
        let overlay = make_tiled_overlay(200, 200, &tile, 1.0, 30.0, (0, 0));

        // With spacing 1.0 every quadrant must contain pattern pixels
        let quadrants = [(0, 0), (100, 0), (0, 100), (100, 100)];
        for (qx, qy) in quadrants {
            let mut drawn = 0usize;
            for y in qy..qy + 100 {
                for x in qx..qx + 100 {
                    if overlay.get_pixel(x, y).0[3] > 0 {
                        drawn += 1;
                    }
                }
            }
            assert!(drawn > 0, "no pattern in quadrant at ({}, {})", qx, qy);
        }
    }

    #[test]
    fn test_degenerate_tile_does_not_stall() {
        let tile = RgbaImage::new(0, 0);
        let overlay = make_tiled_overlay(40, 30, &tile, 2.2, 30.0, (0, 0));
        assert_eq!(overlay.dimensions(), (40, 30));
        assert!(overlay.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_apply_preserves_dimensions_and_input() {
        let source = RgbaImage::from_pixel(200, 160, Rgba([40, 40, 40, 255]));
        let image = DynamicImage::ImageRgba8(source.clone());

        let marked = apply_tiled_watermark(&image, "© TEST", &TiledStyle::default()).unwrap();

        assert_eq!(marked.dimensions(), (200, 160));
        // Watermark visibly changed some pixels
        assert!(marked.pixels().any(|p| p.0 != [40, 40, 40, 255]));
        // Copy-on-read: the input is untouched
        assert_eq!(image.to_rgba8().as_raw(), source.as_raw());
    }

    #[test]
    fn test_apply_converts_opaque_input_to_rgba() {
        let grey = image::GrayImage::from_pixel(120, 90, image::Luma([128]));
        let image = DynamicImage::ImageLuma8(grey);

        let marked = apply_tiled_watermark(&image, "© TEST", &TiledStyle::default()).unwrap();
        assert_eq!(marked.dimensions(), (120, 90));
    }

    #[test]
    fn test_spacing_below_minimum_is_clamped() {
        let tile = test_tile();
        // Would loop forever stepping 0 pixels if the clamp were missing
        let overlay = make_tiled_overlay(80, 60, &tile, 0.0, 0.0, (0, 0));
        assert_eq!(overlay.dimensions(), (80, 60));
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(64, 64));
        let style = TiledStyle {
            color: "no-such-color".to_string(),
            ..Default::default()
        };
        assert!(apply_tiled_watermark(&image, "x", &style).is_err());
    }
}
