mod config;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use noise2d::NoiseKind;

use crate::config::RenderConfig;

/// Render value, fBm, Perlin and Worley noise to grayscale PGM images
#[derive(Parser, Debug)]
#[command(name = "noise2d")]
#[command(about = "Render 2D procedural noise fields to PGM", long_about = None)]
struct Args {
    /// JSON file with render settings (flags below override it)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Noise-space distance between neighbouring pixels
    #[arg(long)]
    scale: Option<f64>,

    /// Seed shared by every generator
    #[arg(long)]
    seed: Option<u32>,

    /// fBm octave count
    #[arg(long)]
    octaves: Option<u32>,

    /// fBm frequency multiplier per octave
    #[arg(long)]
    lacunarity: Option<f64>,

    /// fBm amplitude multiplier per octave
    #[arg(long)]
    gain: Option<f64>,

    /// Directory the images are written to
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Noise kinds to render: value, fbm, perlin, worley (default: all)
    #[arg(long = "noise", value_name = "KIND")]
    kinds: Vec<NoiseKind>,
}

impl Args {
    // File settings first, then any flag given on the command line
    fn resolve(self) -> Result<RenderConfig, config::ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        };
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.scale {
            cfg.scale = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = self.octaves {
            cfg.fbm.octaves = v;
        }
        if let Some(v) = self.lacunarity {
            cfg.fbm.lacunarity = v;
        }
        if let Some(v) = self.gain {
            cfg.fbm.gain = v;
        }
        if let Some(v) = self.out_dir {
            cfg.out_dir = v;
        }
        if !self.kinds.is_empty() {
            cfg.kinds = self.kinds;
        }
        Ok(cfg)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Args::parse().resolve()?;
    let spec = cfg.raster_spec();

    // Validate everything before touching the file system
    spec.validate()?;
    let generators = cfg
        .kinds
        .iter()
        .map(|&kind| Ok((kind, kind.build(cfg.seed, cfg.fbm)?)))
        .collect::<Result<Vec<_>, noise2d::NoiseError>>()?;
    if generators.is_empty() {
        warn!("no noise kinds selected, nothing to do");
        return Ok(());
    }

    std::fs::create_dir_all(&cfg.out_dir)?;
    info!(
        "rendering {}x{} at scale {} with seed {}",
        cfg.width, cfg.height, cfg.scale, cfg.seed
    );

    let mut written = Vec::with_capacity(generators.len());
    for (kind, noise) in &generators {
        let start = Instant::now();
        let path = cfg.output_path(*kind);
        raster::save_pgm(noise, &spec, &path)?;
        info!("{kind} done in {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);
        written.push(path);
    }

    println!("Images generated:");
    for path in &written {
        println!(" - {}", path.display());
    }
    Ok(())
}
