//! Gaussian noise sampling.

use rand::Rng;
use rand_pcg::Pcg32;

use super::TWO_PI;

/// Gaussian (normal) noise source.
///
/// Uses the Box-Muller transform over the caller's PCG32 stream, so two
/// generators with the same parameters and the same RNG state produce the
/// same sequence. The transform yields values in pairs; the second value is
/// cached and returned on the next call.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    /// Distribution mean.
    pub mean: f64,
    /// Distribution standard deviation.
    pub std_dev: f64,
    spare: Option<f64>,
}

impl GaussianNoise {
    /// Creates a gaussian noise source with the given mean and standard
    /// deviation.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev,
            spare: None,
        }
    }

    /// Draws the next noise value.
    pub fn sample(&mut self, rng: &mut Pcg32) -> f64 {
        if let Some(z) = self.spare.take() {
            return self.mean + self.std_dev * z;
        }

        // Box-Muller: two uniforms in (0, 1) to two independent normals.
        let mut u1: f64 = rng.gen();
        while u1 <= f64::EPSILON {
            u1 = rng.gen();
        }
        let u2: f64 = rng.gen();

        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = TWO_PI * u2;

        self.spare = Some(radius * theta.sin());
        self.mean + self.std_dev * radius * theta.cos()
    }
}
