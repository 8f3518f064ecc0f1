//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the library flows through this module so that output is
//! reproducible. Each generated sound gets an independent random stream
//! derived from the base seed and the sound's name.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named stream from the base seed.
///
/// Hashes the base seed (little-endian bytes) concatenated with the key's
/// UTF-8 bytes using BLAKE3, then truncates to the first four bytes. Two
/// sounds with different names never share a noise stream.
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named stream.
///
/// Convenience wrapper over [`derive_stream_seed`] and [`create_rng`].
pub fn create_stream_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_stream_seed(base_seed, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f64> = (0..100).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..100).map(|_| rng2.gen()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);

        let values1: Vec<f64> = (0..10).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..10).map(|_| rng2.gen()).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_stream_seed_derivation_consistency() {
        let base = 42u32;

        let seed_a = derive_stream_seed(base, "rain.mp3");
        let seed_b = derive_stream_seed(base, "rain.mp3");
        assert_eq!(seed_a, seed_b);

        let seed_other = derive_stream_seed(base, "wind.mp3");
        assert_ne!(seed_a, seed_other);
    }

    #[test]
    fn test_stream_rng_independence() {
        let base = 42u32;

        let mut rng_rain = create_stream_rng(base, "rain.mp3");
        let mut rng_wind = create_stream_rng(base, "wind.mp3");

        let rain: Vec<f64> = (0..10).map(|_| rng_rain.gen()).collect();
        let wind: Vec<f64> = (0..10).map(|_| rng_wind.gen()).collect();

        assert_ne!(rain, wind);
    }
}
