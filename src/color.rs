//! Color parsing
//!
//! Accepts named colors ("white") or hex strings ("#FFFFFF", "#FFF"),
//! combined with a separate 0..1 opacity into an RGBA pixel.

use image::Rgba;

use crate::error::{Error, Result};

/// Parse a color string and opacity into an RGBA pixel.
///
/// The opacity is clamped to `[0, 1]` and becomes the alpha channel
/// (`round(255 * opacity)`); any alpha implied by the color string itself
/// is ignored.
pub fn parse_color(color: &str, opacity: f64) -> Result<Rgba<u8>> {
    let (r, g, b) = parse_rgb(color)?;
    let a = (255.0 * opacity.clamp(0.0, 1.0)).round() as u8;
    Ok(Rgba([r, g, b, a]))
}

/// Parse the RGB part of a color string (named or hex)
fn parse_rgb(color: &str) -> Result<(u8, u8, u8)> {
    let trimmed = color.trim();

    if let Some(rgb) = named_color(trimmed) {
        return Ok(rgb);
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    // Byte-offset slicing below is only safe on ASCII input
    if !hex.is_ascii() {
        return Err(Error::InvalidColor(color.to_string()));
    }
    match hex.len() {
        6 => {
            let r = parse_hex_pair(&hex[0..2], color)?;
            let g = parse_hex_pair(&hex[2..4], color)?;
            let b = parse_hex_pair(&hex[4..6], color)?;
            Ok((r, g, b))
        }
        3 => {
            // #RGB shorthand: each digit doubles (#F0A -> #FF00AA)
            let r = parse_hex_pair(&hex[0..1].repeat(2), color)?;
            let g = parse_hex_pair(&hex[1..2].repeat(2), color)?;
            let b = parse_hex_pair(&hex[2..3].repeat(2), color)?;
            Ok((r, g, b))
        }
        _ => Err(Error::InvalidColor(color.to_string())),
    }
}

fn parse_hex_pair(pair: &str, original: &str) -> Result<u8> {
    u8::from_str_radix(pair, 16).map_err(|_| Error::InvalidColor(original.to_string()))
}

/// Basic named colors (CSS keyword values)
fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "white" => (255, 255, 255),
        "black" => (0, 0, 0),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "purple" => (128, 0, 128),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c = parse_color("#FFFFFF", 1.0).unwrap();
        assert_eq!(c, Rgba([255, 255, 255, 255]));

        let c = parse_color("#000000", 0.5).unwrap();
        assert_eq!(c, Rgba([0, 0, 0, 128]));

        // Leading '#' is optional
        let c = parse_color("ff8000", 1.0).unwrap();
        assert_eq!(c, Rgba([255, 128, 0, 255]));
    }

    #[test]
    fn test_parse_short_hex() {
        let c = parse_color("#F0A", 1.0).unwrap();
        assert_eq!(c, Rgba([255, 0, 170, 255]));
    }

    #[test]
    fn test_parse_named_color() {
        let c = parse_color("white", 0.22).unwrap();
        assert_eq!(c, Rgba([255, 255, 255, 56]));

        // Case-insensitive
        let c = parse_color("Black", 1.0).unwrap();
        assert_eq!(c, Rgba([0, 0, 0, 255]));

        let c = parse_color("green", 1.0).unwrap();
        assert_eq!(c, Rgba([0, 128, 0, 255]));
    }

    #[test]
    fn test_opacity_is_clamped() {
        let c = parse_color("white", 2.0).unwrap();
        assert_eq!(c.0[3], 255);

        let c = parse_color("white", -0.5).unwrap();
        assert_eq!(c.0[3], 0);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        assert!(parse_color("not-a-color", 1.0).is_err());
        assert!(parse_color("#12345", 1.0).is_err());
        assert!(parse_color("#GGGGGG", 1.0).is_err());
    }

    #[test]
    fn test_non_ascii_color_is_an_error_not_a_panic() {
        // Multi-byte characters can hit the 3- and 6-byte hex branches
        assert!(parse_color("€€", 1.0).is_err());
        assert!(parse_color("€", 1.0).is_err());
        assert!(parse_color("#ÿÿÿ", 1.0).is_err());
    }
}
