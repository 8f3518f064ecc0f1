//! soundbed synthesis library
//!
//! Generates placeholder ambient-sound waveforms (rain, ocean, wind,
//! thunder, forest, cafe, city, fire, birds, fan) as mono 16-bit PCM WAV
//! data. The category is inferred from the requested output name, and every
//! category maps to a small closed-form mix of sine partials and gaussian
//! noise.
//!
//! # Determinism
//!
//! All synthesis is deterministic. Given the same name, parameters, and
//! seed, the output is byte-identical across runs. Randomness flows through
//! PCG32 generators seeded via BLAKE3 derivation, so each sound name gets an
//! independent noise stream.
//!
//! # Example
//!
//! ```
//! use soundbed_synth::{generate, GenerateParams};
//!
//! let result = generate("rain.mp3", &GenerateParams::default()).unwrap();
//! assert_eq!(result.wav.num_samples, 441_000);
//! // std::fs::write("rain.wav", &result.wav.wav_data)?;
//! ```
//!
//! # Crate structure
//!
//! - [`generate()`] - main entry point, name in, WAV out
//! - [`category`] - ordered name-to-category dispatch
//! - [`synthesis`] - per-category waveform formulas and gaussian noise
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`wav`] - deterministic mono WAV writer

pub mod category;
pub mod error;
pub mod generate;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use category::Category;
pub use error::{AudioError, AudioResult};
pub use generate::{generate, GenerateParams, GenerateResult};
pub use wav::WavResult;
