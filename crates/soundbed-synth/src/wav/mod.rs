//! Deterministic mono WAV writer.
//!
//! Writes 16-bit PCM WAV files with no timestamps or variable metadata, so
//! the same samples always serialize to the same bytes. The BLAKE3 hash of
//! the PCM payload is exposed for output validation.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
