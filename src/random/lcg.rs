//! # Linear congruential bit-pattern generator
//!
//! The classic `214013 * seed + 2531011` generator used by dtoa benchmark
//! suites. Two successive 32-bit states are glued together (high word first)
//! and the resulting 64-bit pattern is reinterpreted as an IEEE-754 double.
//! No scaling is applied, so a draw can be NaN, infinite, subnormal or normal
//! with roughly the distribution of a uniformly random bit pattern.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

/// Seed used by both the corpus generator and the verifier.
pub const DEFAULT_SEED: u32 = 0;

const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;

/// Deterministic 32-bit LCG producing raw double bit patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Advance once and return the new state.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Two draws, high word first, low word second.
    #[inline]
    pub fn next_bits(&mut self) -> u64 {
        let hi = self.next_raw();
        let lo = self.next_raw();
        (u64::from(hi) << 32) | u64::from(lo)
    }

    /// Next draw reinterpreted as a double. May be NaN or infinite.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from_bits(self.next_bits())
    }

    /// Next finite draw; NaN and infinite patterns are discarded.
    pub fn next_finite(&mut self) -> f64 {
        loop {
            let d = self.next_f64();
            if d.is_finite() {
                return d;
            }
        }
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        self.next_bits()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
