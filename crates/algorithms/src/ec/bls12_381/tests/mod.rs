//! BLS12-381 field tower test suite
//!
//! Tests are organized into focused modules for better maintainability.

use core::num::NonZeroU32;

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;




#[cfg(test)]
mod wide;

/// Iterations for randomized checks
pub(crate) const FUZZ: usize = 100;

/// Deterministic RNG so failures reproduce
pub(crate) fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// RNG that serves `budget` successful fills and then fails every call
pub(crate) struct FlakyRng {
    inner: ChaCha20Rng,
    budget: usize,
}

impl FlakyRng {
    pub(crate) fn new(budget: usize) -> Self {
        FlakyRng {
            inner: test_rng(0xf1a_c0de),
            budget,
        }
    }
}

impl RngCore for FlakyRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if self.budget == 0 {
            let code = NonZeroU32::new(rand::Error::CUSTOM_START + 1).unwrap();
            return Err(rand::Error::from(code));
        }
        self.budget -= 1;
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for FlakyRng {}
