//! Deterministic random source shared by generation and simulation.
//! Every random draw in the crate goes through `GameRng` so a run is fully
//! reproducible from its seed.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

#[derive(Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform sample in `[0, 1)` with 53 bits of precision.
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    /// Uniform sample in the inclusive range `[min_value, max_value]`.
    pub fn range_usize(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        let range_size = (max_value - min_value) as u64 + 1;
        min_value + (self.next_u64() % range_size) as usize
    }

    pub fn range_i32(&mut self, min_value: i32, max_value: i32) -> i32 {
        debug_assert!(min_value <= max_value);
        let range_size = (i64::from(max_value) - i64::from(min_value)) as u64 + 1;
        (i64::from(min_value) + (self.next_u64() % range_size) as i64) as i32
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    pub fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range_usize(0, items.len() - 1);
        items.get(index)
    }
}

/// Derives an independent seed for one floor so tools can regenerate a floor
/// without replaying the whole run.
pub fn derive_floor_seed(run_seed: u64, floor: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(floor).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
