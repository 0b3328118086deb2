use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::fractal2::{FbmConfig, FbmValueNoise2D};
use crate::perlin2::PerlinNoise2D;
use crate::value2::ValueNoise2D;
use crate::worley2::WorleyNoise2D;
use crate::NoiseGenerator;

/// Selects one of the noise generators by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    Value,
    #[serde(alias = "fbm_value")]
    Fbm,
    Perlin,
    Worley,
}

impl NoiseKind {
    pub const ALL: [NoiseKind; 4] = [
        NoiseKind::Value,
        NoiseKind::Fbm,
        NoiseKind::Perlin,
        NoiseKind::Worley,
    ];

    // Base name of the raster written for this kind
    pub fn file_stem(self) -> &'static str {
        match self {
            NoiseKind::Value => "value_noise",
            NoiseKind::Fbm => "fbm_value_noise",
            NoiseKind::Perlin => "perlin_noise",
            NoiseKind::Worley => "worley_noise",
        }
    }

    /// Build a boxed generator for this kind.
    ///
    /// `fbm` is only read for [`NoiseKind::Fbm`] and is validated there.
    pub fn build(
        self,
        seed: u32,
        fbm: FbmConfig,
    ) -> Result<Box<dyn NoiseGenerator + Send + Sync>, NoiseError> {
        Ok(match self {
            NoiseKind::Value => Box::new(ValueNoise2D::new(seed)),
            NoiseKind::Fbm => Box::new(FbmValueNoise2D::new(seed, fbm)?),
            NoiseKind::Perlin => Box::new(PerlinNoise2D::new(seed)),
            NoiseKind::Worley => Box::new(WorleyNoise2D::new(seed)),
        })
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoiseKind::Value => "value",
            NoiseKind::Fbm => "fbm",
            NoiseKind::Perlin => "perlin",
            NoiseKind::Worley => "worley",
        };
        f.write_str(name)
    }
}

impl FromStr for NoiseKind {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" => Ok(NoiseKind::Value),
            "fbm" | "fbm_value" => Ok(NoiseKind::Fbm),
            "perlin" => Ok(NoiseKind::Perlin),
            "worley" | "cellular" => Ok(NoiseKind::Worley),
            _ => Err(NoiseError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoiseKind;
    use crate::error::NoiseError;
    use crate::fractal2::FbmConfig;
    use crate::value2::ValueNoise2D;
    use crate::NoiseGenerator;

    #[test]
    fn parse_names() {
        assert_eq!("value".parse::<NoiseKind>(), Ok(NoiseKind::Value));
        assert_eq!("FBM".parse::<NoiseKind>(), Ok(NoiseKind::Fbm));
        assert_eq!(" perlin ".parse::<NoiseKind>(), Ok(NoiseKind::Perlin));
        assert_eq!("cellular".parse::<NoiseKind>(), Ok(NoiseKind::Worley));
        assert_eq!(
            "simplex".parse::<NoiseKind>(),
            Err(NoiseError::UnknownKind("simplex".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in NoiseKind::ALL {
            assert_eq!(kind.to_string().parse::<NoiseKind>(), Ok(kind));
        }
    }

    #[test]
    fn file_stems_are_distinct() {
        let stems: std::collections::HashSet<_> =
            NoiseKind::ALL.iter().map(|k| k.file_stem()).collect();
        assert_eq!(stems.len(), 4);
    }

    #[test]
    fn build_matches_direct_construction() {
        let boxed = NoiseKind::Value.build(1234, FbmConfig::default()).unwrap();
        let direct = ValueNoise2D::new(1234);
        assert_eq!(boxed.sample(1.5, 2.5), direct.sample(1.5, 2.5));
    }

    #[test]
    fn build_rejects_bad_fbm_config() {
        let bad = FbmConfig::new(0, 2.0, 0.5);
        assert!(NoiseKind::Fbm.build(1, bad).is_err());
        // other kinds ignore the fBm parameters
        assert!(NoiseKind::Perlin.build(1, bad).is_ok());
    }

    #[test]
    fn serde_lowercase_names() {
        let kinds: Vec<NoiseKind> = serde_json::from_str(r#"["value", "fbm", "worley"]"#).unwrap();
        assert_eq!(kinds, vec![NoiseKind::Value, NoiseKind::Fbm, NoiseKind::Worley]);
    }
}
