use thiserror::Error;

/// Errors raised while configuring a noise generator.
///
/// Sampling itself never fails; only construction can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("fBm needs at least one octave")]
    ZeroOctaves,
    #[error("lacunarity must be finite and positive, got {0}")]
    InvalidLacunarity(f64),
    #[error("gain must be finite and positive, got {0}")]
    InvalidGain(f64),
    #[error("{octaves} octaves overflow the last octave's frequency or amplitude")]
    OctaveOverflow { octaves: u32 },
    #[error("unknown noise kind '{0}' (expected value, fbm, perlin or worley)")]
    UnknownKind(String),
}
