//! Deterministic seed derivation for mock series.
//!
//! A master seed is expanded into per-(symbol, window) sub-seeds via BLAKE3.
//! Derivation is hash-based rather than sequential, so a ticker's series does
//! not change when other tickers are added, removed or drawn in another order.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::selection::TimeWindow;

#[derive(Debug, Clone, Copy)]
pub struct SeedSource {
    master_seed: u64,
}

impl SeedSource {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the sub-seed for `(symbol, window)`.
    pub fn sub_seed(&self, symbol: &str, window: TimeWindow) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(symbol.as_bytes());
        hasher.update(window.label().as_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Seeded RNG for `(symbol, window)`.
    pub fn rng_for(&self, symbol: &str, window: TimeWindow) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(symbol, window))
    }
}
