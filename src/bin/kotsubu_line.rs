//! kotsubu-line - render one line onto a pixel board and save the enlarged view.
//!
//! Run: `cargo run --features cli -- --start 2,2 --end 37,20 --mode decay -o line.png`

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use kotsubu_line::prelude::*;
use std::path::PathBuf;

/// Render a line with pseudo anti-aliasing and alpha decay to PNG
#[derive(Parser, Debug)]
#[command(name = "kotsubu-line")]
#[command(version)]
#[command(about = "Integer line rasterizer with pseudo anti-aliasing and alpha decay")]
#[command(long_about = None)]
struct Cli {
    /// Board width in pixels
    #[arg(long, default_value = "40")]
    width: u32,

    /// Board height in pixels
    #[arg(long, default_value = "30")]
    height: u32,

    /// Display scale (clamped to 1..=50)
    #[arg(short, long, default_value = "12")]
    scale: f32,

    /// Start point, where the line ends up (X,Y)
    #[arg(long, value_parser = parse_point)]
    start: Point,

    /// End point, where rendering begins (X,Y)
    #[arg(long, value_parser = parse_point)]
    end: Point,

    /// Line color as R,G,B,A floats in 0..=1
    #[arg(long, value_parser = parse_color, default_value = "0.4,0.8,1.0,1.0")]
    color: ColorF,

    /// Background as R,G,B bytes
    #[arg(long, value_parser = parse_background, default_value = "0,0,0")]
    background: Rgba,

    /// Color policy
    #[arg(short, long, value_enum, default_value_t = Mode::Decay)]
    mode: Mode,

    /// Corner pixel alpha rate
    #[arg(long, default_value_t = DEFAULT_AA_COLOR_RATE)]
    aa_rate: f32,

    /// Fading tail fraction (decay mode)
    #[arg(long, default_value_t = DEFAULT_DECAY_SECTION_RATE)]
    decay_rate: f32,

    /// Per-step alpha multiplier (geometric mode)
    #[arg(long, default_value = "0.92")]
    geometric_rate: f32,

    /// Output PNG path
    #[arg(short, long, default_value = "line.png")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// No corner pixels, no decay
    Plain,
    /// Corner pixels at diagonal steps
    Aa,
    /// Corner pixels and a linearly fading tail
    Decay,
    /// Corner pixels and per-step multiplicative fading
    Geometric,
}

impl Cli {
    fn options(&self) -> LineOptions {
        match self.mode {
            Mode::Plain => LineOptions::plain(),
            Mode::Aa => LineOptions::anti_aliased(self.aa_rate),
            Mode::Decay => LineOptions::decaying(self.decay_rate, self.aa_rate),
            Mode::Geometric => LineOptions::geometric(self.geometric_rate, self.aa_rate),
        }
    }
}

fn parse_numbers<T: std::str::FromStr>(s: &str, count: usize) -> Result<Vec<T>, String> {
    let parts: Vec<T> = s
        .split(',')
        .map(|p| p.trim().parse::<T>().map_err(|_| format!("bad number '{p}' in '{s}'")))
        .collect::<Result<_, _>>()?;
    if parts.len() != count {
        return Err(format!("expected {count} comma-separated values, got '{s}'"));
    }
    Ok(parts)
}

fn parse_point(s: &str) -> Result<Point, String> {
    let v = parse_numbers::<i32>(s, 2)?;
    Ok(Point::new(v[0], v[1]))
}

fn parse_color(s: &str) -> Result<ColorF, String> {
    let v = parse_numbers::<f32>(s, 4)?;
    Ok(ColorF::new(v[0], v[1], v[2], v[3]))
}

fn parse_background(s: &str) -> Result<Rgba, String> {
    let v = parse_numbers::<u8>(s, 3)?;
    Ok(Rgba::rgb(v[0], v[1], v[2]))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut board = PixelBoard::new(cli.width, cli.height, cli.scale)
        .context("failed to create pixel board")?;

    for (name, p) in [("start", cli.start), ("end", cli.end)] {
        if !board.contains(p) {
            bail!(
                "{name} point ({}, {}) is outside the {}x{} board",
                p.x,
                p.y,
                board.width(),
                board.height()
            );
        }
    }

    let options = cli.options();
    rasterize(&mut board, cli.start, cli.end, cli.color, &options);

    let view = board.present(cli.background)?;
    PngEncoder::write_to_file(&view, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Rendered {} px ({:?}) at scale {} -> {} ({}x{})",
        Segment::new(cli.start, cli.end).pixel_count(),
        cli.mode,
        board.scale(),
        cli.output.display(),
        view.width(),
        view.height()
    );

    Ok(())
}
