//! Deterministic utilities for reproducible training.
//!
//! A hand-rolled 64-bit LCG keeps shuffles and bootstrap draws
//! bit-identical across platforms and toolchains, which a general-purpose
//! RNG crate does not guarantee across versions.

/// Linear Congruential Generator with the MMIX constants.
#[derive(Clone, Debug)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // xorshift the state so low bits are usable
        let mut x = self.state;
        x ^= x >> 33;
        x = x.wrapping_mul(0xff51afd7ed558ccd);
        x ^= x >> 33;
        x
    }

    /// Uniform value in `[0, max)`; returns 0 when `max == 0`.
    pub fn next_range(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        self.next_u64() % max
    }

    /// Derive an independent seed, e.g. one per tree.
    pub fn fork_seed(&mut self) -> u64 {
        self.next_u64()
    }
}

/// Deterministic Fisher–Yates permutation of `0..n`.
pub fn shuffled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = LcgRng::new(seed);
    let mut indices: Vec<usize> = (0..n).collect();

    for i in (1..n).rev() {
        let j = rng.next_range(i as u64 + 1) as usize;
        indices.swap(i, j);
    }

    indices
}
