//! Deterministic seed derivation.
//!
//! A master seed generates independent sub-seeds per purpose label via
//! BLAKE3 hashing, so the optional fairness simulation and the actual
//! draw consume separate random streams: running the simulation first
//! cannot change the draw outcome under a fixed master seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-purpose seed derivation from one master seed.
#[derive(Debug, Clone)]
pub struct SeedTree {
    master_seed: u64,
}

impl SeedTree {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a purpose label such as
    /// `"draw"` or `"simulation"`. Derivation is hash-based, so the
    /// result does not depend on how many other labels were derived
    /// before it.
    pub fn sub_seed(&self, label: &str) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(label.as_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Create a seeded StdRng for the given purpose label.
    pub fn rng_for(&self, label: &str) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(label))
    }
}
