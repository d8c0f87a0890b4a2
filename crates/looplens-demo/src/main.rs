// File: crates/looplens-demo/src/main.rs
// Summary: Loads a simulation result and renders one PNG chart per dashboard card.

mod dashboard;
mod input;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use looplens_core::{ChartRenderer, RasterSurface};
use tracing::info;

use crate::dashboard::DASHBOARD;

/// Render simulation metric charts to PNG files
#[derive(Parser, Debug)]
#[command(name = "looplens-demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Simulation result: server JSON envelope, JSON array of iterations, or CSV
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory that receives <card>.png files
    #[arg(long, default_value = "target/out", value_name = "DIR")]
    out_dir: PathBuf,

    /// Chart width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f32,

    /// Chart height in logical pixels
    #[arg(long, default_value_t = 220.0)]
    height: f32,

    /// Device pixel ratio applied to the backing buffer
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Render only these cards (can be specified multiple times)
    #[arg(long = "card", value_name = "ID")]
    cards: Vec<String>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let records = input::load(&args.input)
        .with_context(|| format!("failed to load simulation result '{}'", args.input.display()))?;
    if records.is_empty() {
        bail!("no iterations in '{}'", args.input.display());
    }
    info!(iterations = records.len(), input = %args.input.display(), "loaded simulation result");

    let cards = dashboard::select(DASHBOARD, &args.cards)?;
    let renderer = ChartRenderer::new();
    for card in cards {
        let spec = card.project(&records).with_context(|| format!("projecting card '{}'", card.id))?;
        let mut surface = RasterSurface::new(args.width, args.height)?.with_device_pixel_ratio(args.dpr);
        renderer
            .render(&mut surface, &spec)
            .with_context(|| format!("rendering card '{}'", card.id))?;

        let out = args.out_dir.join(format!("{}.png", card.id));
        surface
            .write_png(&out)
            .with_context(|| format!("writing {}", out.display()))?;
        info!(card = card.id, title = card.title, path = %out.display(), "wrote chart");
    }
    Ok(())
}
