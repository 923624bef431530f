//! Per-pixel noise sources for the stylizer
//!
//! Noise is addressed by pixel coordinate rather than drawn from a shared
//! stream, so the filter can visit pixels in any order (or from several
//! threads) and still produce the same bytes for the same seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies one uniform noise value per pixel coordinate
pub trait NoiseSource: Sync {
    /// Uniform sample in `[-1.0, 1.0)` for the pixel at (x, y)
    fn sample(&self, x: u32, y: u32) -> f32;
}

/// Deterministic noise derived from a seed and the pixel coordinate
#[derive(Debug, Clone, Copy)]
pub struct SeededNoise {
    seed: u64,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the process entropy source
    pub fn from_entropy() -> Self {
        Self {
            seed: rand::random(),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn sample(&self, x: u32, y: u32) -> f32 {
        let pixel = ((y as u64) << 32) | x as u64;
        let mut rng = StdRng::seed_from_u64(mix(self.seed, pixel));
        rng.gen_range(-1.0..1.0)
    }
}

/// Splitmix-style finalizer spreading (seed, pixel) over the u64 space
fn mix(seed: u64, pixel: u64) -> u64 {
    let mut z = seed ^ pixel.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
