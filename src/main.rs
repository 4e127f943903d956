// this_file: src/main.rs
//! Glyphcheck CLI - render a line of text to prove the stack links and runs

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use glyphcheck::{logging, output, pipeline, FontFace, RenderOptions};
use log::{info, warn, Level};

/// Render a line of text through the shaping and rasterization stack
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Font file to load
    #[arg(short, long, default_value = "Knewave-Regular.ttf")]
    font: Utf8PathBuf,

    /// Text to shape and render
    #[arg(short, long, default_value = "Hello, World!")]
    text: String,

    /// Nominal glyph size in pixels
    #[arg(short, long, default_value_t = 50.0)]
    size: f32,

    /// Rotation applied to every glyph, in degrees (counter-clockwise)
    #[arg(short, long, default_value_t = 25.0)]
    rotation: f32,

    /// Canvas width in pixels
    #[arg(long, default_value_t = pipeline::CANVAS_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = pipeline::CANVAS_HEIGHT)]
    height: u32,

    /// Canvas row of the text baseline (defaults to 75% of the height)
    #[arg(short, long)]
    baseline: Option<f32>,

    /// Write the rendered canvas to this file (.pgm or anything the image
    /// crate understands, e.g. .png)
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: String,

    /// Enable quiet mode (only errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "log_level")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level, cli.quiet);

    let timer = logging::Timer::new("text render");

    let face = FontFace::load(&cli.font, cli.size)?;

    let options = RenderOptions {
        width: cli.width,
        height: cli.height,
        rotation_degrees: cli.rotation,
        baseline: cli.baseline,
    };
    let canvas = pipeline::render_text(&face, &cli.text, &options)?;

    timer.log_elapsed(Level::Debug);

    match canvas.ink_bounds() {
        Some((x, y, w, h)) => info!("rendered ink bounds: {}x{} at ({}, {})", w, h, x, y),
        None => warn!("canvas is blank (all glyphs empty or clipped)"),
    }

    if let Some(path) = &cli.output {
        output::save_canvas(&canvas, path)?;
        info!("wrote {}", path);
    }

    println!("It worked?");
    Ok(())
}
