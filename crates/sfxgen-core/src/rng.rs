//! Seeded RNG helpers using PCG32 with BLAKE3 seed derivation.
//!
//! The engine itself only asks for `rand::Rng`; callers that want repeatable
//! output build their source here. Independent streams (noise, arpeggiator)
//! are split off the base seed by hashing so that changing one consumer never
//! shifts the values the other one sees.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is duplicated into both halves of the 64-bit state seed.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named component from the base seed.
///
/// # Arguments
/// * `base_seed` - The caller's seed
/// * `key` - Component identifier (e.g. "noise", "arpeggio")
///
/// # Returns
/// The first four bytes (little-endian) of BLAKE3(base_seed || key)
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

/// Draws a uniform value in [-1, 1).
pub(crate) fn signed_unit<R: rand::Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}
