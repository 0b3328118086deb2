// raster drives a noise generator over a pixel grid and writes grayscale PGM files

pub mod models;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{GrayImage, Luma};
use log::{debug, info};
use noise2d::NoiseGenerator;
use thiserror::Error;

pub use crate::models::RasterSpec;

/// Errors that can occur while rendering or writing a raster.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("raster must have non-zero size, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },
    #[error("scale must be finite, got {0}")]
    InvalidScale(f64),
}

// Largest 8-bit grey level
const MAX_GREY: f64 = 255.0;

// floor(clamp(v) * 255) as one grey byte
#[inline]
pub fn quantize(v: f64) -> u8 {
    (noise2d::utils::clamp_unit(v) * MAX_GREY) as u8
}

// Sample `noise` at every pixel of `spec`, row-major
pub fn render<N: NoiseGenerator + ?Sized>(
    noise: &N,
    spec: &RasterSpec,
) -> Result<GrayImage, ExportError> {
    spec.validate()?;
    debug!(
        "rendering {}x{} raster at scale {}",
        spec.width, spec.height, spec.scale
    );
    Ok(GrayImage::from_fn(spec.width, spec.height, |px, py| {
        let (nx, ny) = spec.to_noise_space(px, py);
        Luma([quantize(noise.sample(nx, ny))])
    }))
}

/// Write `img` as a binary PGM (P5): ASCII header then one byte per pixel.
pub fn write_pgm<W: Write>(img: &GrayImage, mut out: W) -> Result<(), ExportError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(ExportError::EmptyRaster {
            width: img.width(),
            height: img.height(),
        });
    }
    // image's PnmEncoder puts maxval on the size line ("P5\n<w> <h> 255\n"),
    // this layout keeps it on its own line
    write!(out, "P5\n{} {}\n255\n", img.width(), img.height())?;
    out.write_all(img.as_raw())?;
    out.flush()?;
    Ok(())
}

/// Render `noise` and save it to `path` as PGM.
pub fn save_pgm<N: NoiseGenerator + ?Sized>(
    noise: &N,
    spec: &RasterSpec,
    path: &Path,
) -> Result<(), ExportError> {
    let img = render(noise, spec)?;
    let file = File::create(path)?;
    write_pgm(&img, BufWriter::new(file))?;
    info!("wrote {}", path.display());
    Ok(())
}
