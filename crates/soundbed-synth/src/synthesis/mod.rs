//! Waveform synthesis for placeholder ambient sounds.
//!
//! - `ambient` - per-category closed-form ambient formulas
//! - `noise` - gaussian noise driven by a deterministic RNG

pub mod ambient;
pub mod noise;

use rand_pcg::Pcg32;

pub use ambient::AmbientSynth;
pub use noise::GaussianNoise;

/// 2π, the full phase cycle.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Common trait for synthesis modules.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    ///
    /// # Returns
    /// Vector of audio samples, nominally in range [-1.0, 1.0]
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}
