//! Deterministic RNG wrapper using PCG32.
//!
//! All grid generation MUST draw from this module so that output depends on
//! the seed alone.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use bitmapnft_model::Seed;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate a random u32.
    #[inline]
    pub fn gen_u32(&mut self) -> u32 {
        self.inner.gen::<u32>()
    }

    /// Generate a palette index in `0..palette_size`.
    ///
    /// `palette_size` is clamped to `1..=256`, so the result always fits a
    /// grid cell.
    #[inline]
    pub fn gen_index(&mut self, palette_size: usize) -> u8 {
        let bound = palette_size.clamp(1, 256) as u32;
        // bound <= 256, so the sample fits in u8.
        self.inner.gen_range(0..bound) as u8
    }
}
