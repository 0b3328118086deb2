use std::fs;
use std::path::{Path, PathBuf};

use noise2d::{FbmConfig, NoiseKind};
use raster::RasterSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Everything needed to render one batch of noise rasters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub seed: u32,
    pub fbm: FbmConfig,
    pub out_dir: PathBuf,
    pub kinds: Vec<NoiseKind>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 0.02,
            seed: 1234,
            fbm: FbmConfig::new(6, 2.0, 0.5),
            out_dir: PathBuf::from("output"),
            kinds: NoiseKind::ALL.to_vec(),
        }
    }
}

impl RenderConfig {
    // Load a JSON config; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn raster_spec(&self) -> RasterSpec {
        RasterSpec::new(self.width, self.height, self.scale)
    }

    pub fn output_path(&self, kind: NoiseKind) -> PathBuf {
        self.out_dir.join(format!("{}.pgm", kind.file_stem()))
    }
}
