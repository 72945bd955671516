//! Photo Watermark CLI tool
//!
//! A command-line tool for batch-watermarking images with copyright text.

use anyhow::Context;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use photo_watermark::batch::{process_dir, BatchOptions, BatchSummary};
use photo_watermark::metadata::ImageMetadata;
use photo_watermark::watermark::{
    apply_single_watermark, apply_tiled_watermark, MarkPlacement, SingleStyle, TiledStyle,
};

/// Photo Watermark - Overlay copyright watermarks on portfolio images
#[derive(Parser)]
#[command(name = "photo-watermark")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Tile a rotated copyright pattern over every image in a directory
    photo-watermark tiled --dir ./shots --outdir ./web --text \"© 2025 Jane Doe\"

    # Denser pattern with a subtle outline
    photo-watermark tiled --dir ./shots --outdir ./web --spacing 1.5 --stroke-width 1

    # Single corner mark, keeping JPEGs as JPEG
    photo-watermark single --dir ./shots --outdir ./web --mode corner --keep-ext

    # Embed attribution metadata in the PNG outputs
    photo-watermark tiled --dir ./shots --outdir ./web --author \"Jane Doe\" \\
        --url https://example.com --license \"All rights reserved\"")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Single watermark placement, CLI-facing
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Centered, rotated 30 degrees
    Diagonal,
    /// Bottom-right corner
    Corner,
}

#[derive(Subcommand)]
enum Commands {
    /// Overlay a rotated, repeating text pattern on every image in a directory
    Tiled {
        /// Input directory with images
        #[arg(long)]
        dir: PathBuf,

        /// Output directory
        #[arg(long)]
        outdir: PathBuf,

        /// Watermark text (also embedded as the Copyright metadata field)
        #[arg(long, default_value_t = default_text())]
        text: String,

        /// Fill opacity, 0..1
        #[arg(long, default_value_t = 0.22)]
        opacity: f64,

        /// Rotation angle in degrees (counter-clockwise)
        #[arg(long, default_value_t = 30.0)]
        angle: f32,

        /// Font size as a fraction of the image width (0.06 = 6%)
        #[arg(long, default_value_t = 0.06)]
        scale: f64,

        /// Tile spacing multiplier (minimum 0.5)
        #[arg(long, default_value_t = 2.2)]
        spacing: f32,

        /// Text color, named or hex
        #[arg(long, default_value = "#FFFFFF")]
        color: String,

        /// Outline thickness in pixels (improves contrast; 0 disables)
        #[arg(long, default_value_t = 2)]
        stroke_width: u32,

        /// Outline color, named or hex
        #[arg(long, default_value = "#000000")]
        stroke_color: String,

        /// Outline opacity, 0..1
        #[arg(long, default_value_t = 0.5)]
        stroke_opacity: f64,

        /// Path to a .ttf font; falls back to system fonts, then a bundled font
        #[arg(long)]
        font: Option<PathBuf>,

        /// Horizontal offset of the tiling origin in pixels
        #[arg(long, default_value_t = 0)]
        offset_x: i64,

        /// Vertical offset of the tiling origin in pixels
        #[arg(long, default_value_t = 0)]
        offset_y: i64,

        /// Keep the source extension for PNG/JPEG outputs (otherwise normalize to PNG)
        #[arg(long)]
        keep_ext: bool,

        /// Author for PNG metadata
        #[arg(long)]
        author: Option<String>,

        /// URL for PNG metadata
        #[arg(long)]
        url: Option<String>,

        /// License for PNG metadata
        #[arg(long)]
        license: Option<String>,
    },

    /// Overlay a single diagonal or corner watermark on every image in a directory
    Single {
        /// Input directory with images
        #[arg(long)]
        dir: PathBuf,

        /// Output directory
        #[arg(long)]
        outdir: PathBuf,

        /// Watermark text (also embedded as the Copyright metadata field)
        #[arg(long, default_value_t = default_text())]
        text: String,

        /// Watermark placement
        #[arg(long, value_enum, default_value = "diagonal")]
        mode: Mode,

        /// Text opacity, 0..1
        #[arg(long, default_value_t = 0.2)]
        opacity: f64,

        /// Font size as a fraction of the image width (0.06 = 6%)
        #[arg(long, default_value_t = 0.06)]
        scale: f64,

        /// Corner margin in pixels
        #[arg(long, default_value_t = 24)]
        margin: u32,

        /// Only process these extensions (e.g. --include png jpg)
        #[arg(long, num_args = 1..)]
        include: Option<Vec<String>>,

        /// Path to a .ttf font; falls back to system fonts, then a bundled font
        #[arg(long)]
        font: Option<PathBuf>,

        /// Keep the source extension for PNG/JPEG outputs (otherwise normalize to PNG)
        #[arg(long)]
        keep_ext: bool,

        /// Author for PNG metadata
        #[arg(long)]
        author: Option<String>,

        /// URL for PNG metadata
        #[arg(long)]
        url: Option<String>,

        /// License for PNG metadata
        #[arg(long)]
        license: Option<String>,
    },
}

/// Default watermark text using the current year
fn default_text() -> String {
    format!("© {} All rights reserved", Local::now().year())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tiled {
            dir,
            outdir,
            text,
            opacity,
            angle,
            scale,
            spacing,
            color,
            stroke_width,
            stroke_color,
            stroke_opacity,
            font,
            offset_x,
            offset_y,
            keep_ext,
            author,
            url,
            license,
        } => {
            let style = TiledStyle {
                opacity,
                angle,
                scale,
                spacing,
                color,
                stroke_width,
                stroke_color,
                stroke_opacity,
                font_path: font,
                offset_x,
                offset_y,
            };
            let options = batch_options(dir, outdir, keep_ext, None, &text, author, url, license);
            run_batch(&options, |img| apply_tiled_watermark(img, &text, &style))
        }
        Commands::Single {
            dir,
            outdir,
            text,
            mode,
            opacity,
            scale,
            margin,
            include,
            font,
            keep_ext,
            author,
            url,
            license,
        } => {
            let style = SingleStyle {
                placement: match mode {
                    Mode::Diagonal => MarkPlacement::Diagonal,
                    Mode::Corner => MarkPlacement::Corner,
                },
                opacity,
                scale,
                margin,
                font_path: font,
            };
            let options =
                batch_options(dir, outdir, keep_ext, include, &text, author, url, license);
            run_batch(&options, |img| apply_single_watermark(img, &text, &style))
        }
    };

    match result {
        Ok(failed) if failed > 0 => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn batch_options(
    input_dir: PathBuf,
    output_dir: PathBuf,
    keep_ext: bool,
    include: Option<Vec<String>>,
    text: &str,
    author: Option<String>,
    url: Option<String>,
    license: Option<String>,
) -> BatchOptions {
    BatchOptions {
        input_dir,
        output_dir,
        keep_ext,
        include,
        metadata: ImageMetadata {
            copyright: Some(text.to_string()),
            author,
            url,
            license,
        },
    }
}

/// Run one batch, print per-file status lines, and return the failure count
fn run_batch<F>(options: &BatchOptions, mark: F) -> anyhow::Result<usize>
where
    F: Fn(&image::DynamicImage) -> photo_watermark::Result<image::RgbaImage>,
{
    let summary = process_dir(options, mark)
        .with_context(|| format!("Batch failed for {}", options.input_dir.display()))?;

    if summary.is_empty() {
        eprintln!(
            "No supported images found in: {}",
            options.input_dir.display()
        );
        return Ok(0);
    }

    eprintln!(
        "Processing {} file(s) from {} -> {}",
        summary.outcomes.len(),
        options.input_dir.display(),
        options.output_dir.display()
    );
    report(&summary);
    Ok(summary.failed())
}

fn report(summary: &BatchSummary) {
    for outcome in &summary.outcomes {
        let name = outcome
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| outcome.source.display().to_string());

        match &outcome.result {
            Ok(out) => {
                let out_name = out
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| out.display().to_string());
                println!("OK: {} -> {}", name, out_name);
            }
            Err(e) => println!("ERROR: {} -> {}", name, e),
        }
    }
    eprintln!(
        "Done: {} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );
}
