//! Batch driver
//!
//! Walks a directory of images, applies a caller-supplied watermark
//! operation to each, and writes results under a `_wm` suffix. A failure
//! on one file never aborts the batch: every file yields a
//! [`FileOutcome`] and the caller decides how to report them.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::{Error, Result};
use crate::metadata::{write_png_with_metadata, ImageMetadata};

/// Input extensions the batch driver picks up (case-insensitive)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff"];

/// Suffix appended to output stems; doubles as the reprocessing guard
pub const OUTPUT_SUFFIX: &str = "_wm";

/// JPEG output quality, matching the original export settings
const JPEG_QUALITY: u8 = 90;

/// Options controlling one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned for input images (must exist)
    pub input_dir: PathBuf,
    /// Directory for outputs (created if missing)
    pub output_dir: PathBuf,
    /// Keep the source extension for PNG/JPEG outputs instead of
    /// normalizing everything to PNG
    pub keep_ext: bool,
    /// Restrict the batch to these extensions (without dots,
    /// case-insensitive); `None` selects every supported extension
    pub include: Option<Vec<String>>,
    /// Attribution embedded into PNG outputs
    pub metadata: ImageMetadata,
}

/// Result of processing one file
#[derive(Debug)]
pub struct FileOutcome {
    /// Source image path
    pub source: PathBuf,
    /// Output path on success, the per-file error otherwise
    pub result: Result<PathBuf>,
}

/// Collected outcomes of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// One entry per selected input file, in processing order
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    /// Number of files processed successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of files that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// True when no input files were selected
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// List the supported images in a directory, sorted by path.
///
/// Files whose stem already ends in [`OUTPUT_SUFFIX`] are skipped so a
/// previous run's outputs are never reprocessed, even when the input and
/// output directories coincide.
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_supported_extension(path) && !is_watermark_output(path))
        .collect();
    files.sort();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// True when the file's extension is in the user-supplied include list.
///
/// Entries match without dots and case-insensitively ("png", ".PNG" and
/// "png" are equivalent); "jpg" and "jpeg" are distinct, as in the
/// original filter.
fn extension_included(path: &Path, include: &[String]) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };
    include
        .iter()
        .any(|e| e.trim().trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

/// True when the file stem carries the output suffix
pub fn is_watermark_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.ends_with(OUTPUT_SUFFIX))
        .unwrap_or(false)
}

/// Derive the output path for a source image.
///
/// The stem gains the `_wm` suffix. With `keep_ext`, PNG and JPEG sources
/// keep their (lowercased) extension; everything else normalizes to PNG.
pub fn output_path(source: &Path, output_dir: &Path, keep_ext: bool) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let out_ext = match ext.as_deref() {
        Some(e @ ("png" | "jpg" | "jpeg")) if keep_ext => e,
        _ => "png",
    };
    output_dir.join(format!("{}{}.{}", stem, OUTPUT_SUFFIX, out_ext))
}

/// Process every supported image in `options.input_dir`.
///
/// `mark` receives the decoded source and returns the watermarked RGBA
/// image. Fatal errors are limited to the input-directory precondition
/// and creating the output directory; everything after that is isolated
/// per file and recorded in the summary.
pub fn process_dir<F>(options: &BatchOptions, mark: F) -> Result<BatchSummary>
where
    F: Fn(&DynamicImage) -> Result<RgbaImage>,
{
    let mut files = collect_image_files(&options.input_dir)?;
    if let Some(include) = &options.include {
        files.retain(|path| extension_included(path, include));
    }
    fs::create_dir_all(&options.output_dir)?;

    let mut summary = BatchSummary::default();
    for source in files {
        let result = process_file(&source, options, &mark);
        summary.outcomes.push(FileOutcome { source, result });
    }
    Ok(summary)
}

fn process_file<F>(source: &Path, options: &BatchOptions, mark: &F) -> Result<PathBuf>
where
    F: Fn(&DynamicImage) -> Result<RgbaImage>,
{
    let image = image::open(source)?;
    let marked = mark(&image)?;

    let out = output_path(source, &options.output_dir, options.keep_ext);
    save_output(&out, &marked, &options.metadata)?;
    Ok(out)
}

/// Persist a watermarked image.
///
/// JPEG outputs are flattened to opaque RGB (the format has no alpha
/// channel) and carry no metadata; everything else is written as RGBA PNG
/// with attribution tEXt chunks.
pub fn save_output(path: &Path, image: &RgbaImage, metadata: &ImageMetadata) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => {
            let flat: RgbImage = image.convert();
            let file = fs::File::create(path)?;
            let mut writer = BufWriter::new(file);
            {
                let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
                encoder.encode_image(&flat)?;
            }
            writer.flush()?;
            Ok(())
        }
        _ => write_png_with_metadata(path, image, metadata),
    }
}
