//! Per-category ambient waveform formulas.
//!
//! Each category is a small closed-form mix of sine partials, gaussian
//! noise, and amplitude gating, sampled at `t_i = i / sample_rate` with the
//! endpoint excluded. The coefficients are the contract: tests and
//! downstream consumers rely on these exact mixes.

use rand_pcg::Pcg32;

use crate::category::Category;

use super::noise::GaussianNoise;
use super::{Synthesizer, TWO_PI};

/// Ambient sound synthesizer for a single category.
#[derive(Debug, Clone, Copy)]
pub struct AmbientSynth {
    /// Category whose formula is rendered.
    pub category: Category,
}

impl AmbientSynth {
    /// Creates a synthesizer for the given category.
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Synthesizer for AmbientSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        match self.category {
            // Noise shimmering at 8 Hz.
            Category::Rain => gated_noise(num_samples, sample_rate, rng, 0.1, 8.0),
            // Two slow swells.
            Category::Ocean => {
                partial_mix(num_samples, sample_rate, &[(0.3, 0.5), (0.1, 1.0)])
            }
            // Noise swelling at 0.3 Hz.
            Category::Wind => gated_noise(num_samples, sample_rate, rng, 0.1, 0.3),
            // Deep rumble over a noise floor.
            Category::Thunder => {
                let mut samples = partial_mix(num_samples, sample_rate, &[(0.2, 0.1)]);
                add_noise(&mut samples, rng, 0.1, 0.05);
                samples
            }
            Category::Forest => {
                partial_mix(num_samples, sample_rate, &[(0.1, 0.4), (0.05, 2.0)])
            }
            Category::Cafe => {
                let mut samples = partial_mix(num_samples, sample_rate, &[(0.05, 3.0)]);
                add_noise(&mut samples, rng, 0.02, 0.01);
                samples
            }
            Category::City => {
                let mut samples =
                    partial_mix(num_samples, sample_rate, &[(0.08, 1.5), (0.04, 5.0)]);
                add_noise(&mut samples, rng, 0.03, 0.02);
                samples
            }
            Category::Fire => fire(num_samples, sample_rate, rng),
            Category::Birds => birds(num_samples, sample_rate),
            Category::Fan => {
                partial_mix(num_samples, sample_rate, &[(0.1, 2.0), (0.05, 4.0)])
            }
            // Unmatched names get a plain reference tone.
            Category::Tone => partial_mix(num_samples, sample_rate, &[(0.1, 440.0)]),
        }
    }
}

/// Sums `amplitude * sin(2π * frequency * t)` for each partial.
fn partial_mix(num_samples: usize, sample_rate: f64, partials: &[(f64, f64)]) -> Vec<f64> {
    let mut output = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        let sample = partials
            .iter()
            .map(|&(amplitude, frequency)| amplitude * (TWO_PI * frequency * t).sin())
            .sum();
        output.push(sample);
    }
    output
}

/// Gaussian noise multiplied by a sine gate: `n(0, std_dev) * sin(2π * gate_freq * t)`.
fn gated_noise(
    num_samples: usize,
    sample_rate: f64,
    rng: &mut Pcg32,
    std_dev: f64,
    gate_freq: f64,
) -> Vec<f64> {
    let mut noise = GaussianNoise::new(0.0, std_dev);
    let mut output = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        output.push(noise.sample(rng) * (TWO_PI * gate_freq * t).sin());
    }
    output
}

/// Adds `amplitude * n(0, std_dev)` to every sample in place.
fn add_noise(samples: &mut [f64], rng: &mut Pcg32, amplitude: f64, std_dev: f64) {
    let mut noise = GaussianNoise::new(0.0, std_dev);
    for sample in samples.iter_mut() {
        *sample += amplitude * noise.sample(rng);
    }
}

/// Crackle: noise bursts gated by a rectified 6 Hz sine over a 1.5 Hz bed.
fn fire(num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let mut noise = GaussianNoise::new(0.0, 0.15);
    let mut output = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        let crackle = 0.12 * noise.sample(rng) * (TWO_PI * 6.0 * t).sin().abs();
        let bed = 0.05 * (TWO_PI * 1.5 * t).sin();
        output.push(crackle + bed);
    }
    output
}

/// Chirps: two carriers with slow rectified-sine amplitude gates.
fn birds(num_samples: usize, sample_rate: f64) -> Vec<f64> {
    let mut output = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        let chirp = 0.9 * (TWO_PI * 8.0 * t).sin() * (TWO_PI * 0.3 * t).sin().abs();
        let trill = 0.06 * (TWO_PI * 12.0 * t).sin() * (TWO_PI * 0.5 * t).sin().abs();
        output.push(chirp + trill);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn render(category: Category, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        let mut rng = create_rng(42);
        AmbientSynth::new(category).synthesize(num_samples, sample_rate, &mut rng)
    }

    #[test]
    fn test_every_category_renders_requested_length() {
        for &category in Category::all() {
            let samples = render(category, 4410, 44100.0);
            assert_eq!(samples.len(), 4410, "category {}", category);
        }
    }

    #[test]
    fn test_ocean_starts_at_zero() {
        // sin(0) = 0 for both partials.
        let samples = render(Category::Ocean, 44100, 44100.0);
        assert!(samples[0].abs() < 1e-12);
    }

    #[test]
    fn test_tone_is_a_440hz_sine() {
        let samples = render(Category::Tone, 441, 44100.0);
        for (i, &sample) in samples.iter().enumerate() {
            let t = i as f64 / 44100.0;
            let expected = 0.1 * (TWO_PI * 440.0 * t).sin();
            assert!((sample - expected).abs() < 1e-12, "sample {}", i);
        }
    }

    #[test]
    fn test_fan_is_a_deterministic_two_partial_mix() {
        let samples = render(Category::Fan, 1000, 44100.0);
        let t = 250.0 / 44100.0;
        let expected = 0.1 * (TWO_PI * 2.0 * t).sin() + 0.05 * (TWO_PI * 4.0 * t).sin();
        assert!((samples[250] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pure_sine_categories_ignore_rng_state() {
        let mut rng1 = create_rng(1);
        let mut rng2 = create_rng(2);
        let a = AmbientSynth::new(Category::Forest).synthesize(1000, 44100.0, &mut rng1);
        let b = AmbientSynth::new(Category::Forest).synthesize(1000, 44100.0, &mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_categories_vary_with_seed() {
        for category in [Category::Rain, Category::Thunder, Category::Fire] {
            let mut rng1 = create_rng(1);
            let mut rng2 = create_rng(2);
            let a = AmbientSynth::new(category).synthesize(1000, 44100.0, &mut rng1);
            let b = AmbientSynth::new(category).synthesize(1000, 44100.0, &mut rng2);
            assert_ne!(a, b, "category {}", category);
        }
    }

    #[test]
    fn test_amplitudes_stay_in_range_for_sine_categories() {
        // The noise-free mixes have a worst-case amplitude well below 1.0.
        for category in [
            Category::Ocean,
            Category::Forest,
            Category::Fan,
            Category::Birds,
            Category::Tone,
        ] {
            let samples = render(category, 44100, 44100.0);
            for &sample in &samples {
                assert!(sample.abs() <= 1.0, "category {}", category);
            }
        }
    }

    #[test]
    fn test_rain_is_gated_by_an_8hz_sine() {
        // At t where sin(2π·8·t) = 0 the output must be exactly zero,
        // regardless of the noise value drawn.
        let samples = render(Category::Rain, 44100, 44100.0);
        assert_eq!(samples[0], 0.0);
    }
}
