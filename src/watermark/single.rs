//! Single watermark placement
//!
//! One rendering of the text, either centered on a 30-degree diagonal or
//! tucked into the bottom-right corner, with a soft drop shadow for
//! contrast. Reuses the same composition idea as the tiled pattern at
//! lower complexity.

use ab_glyph::PxScale;
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use crate::error::Result;
use crate::font::load_font;
use crate::watermark::style::{MarkPlacement, SingleStyle};

/// Rotation used by the diagonal placement, degrees counter-clockwise
const DIAGONAL_ANGLE: f32 = 30.0;

/// Smallest font size for the single mark, in pixels
const MIN_FONT_SIZE: f64 = 14.0;

/// Apply a single white watermark with a drop shadow.
///
/// The source is never mutated; the result is a new RGBA image of the
/// same dimensions. Text is always drawn on a transparent layer and then
/// alpha-composited, so a semi-transparent mark blends correctly over an
/// opaque base.
pub fn apply_single_watermark(
    image: &DynamicImage,
    text: &str,
    style: &SingleStyle,
) -> Result<RgbaImage> {
    let mut base = image.to_rgba8();
    let (width, height) = base.dimensions();

    let font = load_font(style.font_path.as_deref())?;
    let font_size = (f64::from(width) * style.scale).floor().max(MIN_FONT_SIZE);
    let scale = PxScale::from(font_size as f32);

    let alpha = (255.0 * style.opacity.clamp(0.0, 1.0)).round() as u8;
    let fill = Rgba([255, 255, 255, alpha]);
    let (text_w, text_h) = text_size(scale, &font, text);

    let mut layer = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    match style.placement {
        MarkPlacement::Corner => {
            let shadow = Rgba([0, 0, 0, (f64::from(alpha) * 0.8).round() as u8]);
            let x = width.saturating_sub(text_w + style.margin) as i32;
            let y = height.saturating_sub(text_h + style.margin) as i32;
            draw_text_mut(&mut layer, shadow, x + 2, y + 2, scale, &font, text);
            draw_text_mut(&mut layer, fill, x, y, scale, &font, text);
        }
        MarkPlacement::Diagonal => {
            let shadow = Rgba([0, 0, 0, (f64::from(alpha) * 0.6).round() as u8]);
            let x = (width.saturating_sub(text_w) / 2) as i32;
            let y = (height.saturating_sub(text_h) / 2) as i32;
            draw_text_mut(&mut layer, shadow, x + 3, y + 3, scale, &font, text);
            draw_text_mut(&mut layer, fill, x, y, scale, &font, text);
            layer = rotate_about_center(
                &layer,
                -DIAGONAL_ANGLE.to_radians(),
                Interpolation::Bicubic,
                Rgba([0, 0, 0, 0]),
            );
        }
    }
    imageops::overlay(&mut base, &layer, 0, 0);

    Ok(base)
}
