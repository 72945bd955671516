//! PNG attribution metadata
//!
//! Writes RGBA PNGs with optional tEXt chunks (Copyright, Author, URL,
//! License) so published assets carry their attribution with them. JPEG
//! outputs are written elsewhere without metadata; see [`crate::batch`].

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;

use crate::error::Result;

/// Attribution fields embedded into PNG outputs
#[derive(Debug, Clone, Default)]
pub struct ImageMetadata {
    /// Copyright notice (usually the watermark text itself)
    pub copyright: Option<String>,
    /// Author name
    pub author: Option<String>,
    /// URL of the publishing site
    pub url: Option<String>,
    /// License statement
    pub license: Option<String>,
}

impl ImageMetadata {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.copyright.is_none()
            && self.author.is_none()
            && self.url.is_none()
            && self.license.is_none()
    }
}

/// Write an RGBA image as PNG with tEXt chunks for any metadata fields set
pub fn write_png_with_metadata(
    path: &Path,
    image: &RgbaImage,
    metadata: &ImageMetadata,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let (width, height) = image.dimensions();
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let fields = [
        ("Copyright", &metadata.copyright),
        ("Author", &metadata.author),
        ("URL", &metadata.url),
        ("License", &metadata.license),
    ];
    for (keyword, value) in fields {
        if let Some(value) = value {
            encoder.add_text_chunk(keyword.to_string(), value.clone())?;
        }
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;

    Ok(())
}
