//! # `XorShift64*` Source
//!
//! 64-bit xorshift generator from Vigna,
//! "An experimental exploration of Marsaglia's xorshift generators, scrambled"
//! <http://vigna.di.unimi.it/ftp/papers/xorshift.pdf>.
//!
//! Seeding is a single store, which matters for the "seed once per generator,
//! generate many" access pattern.

use rand::{RngCore, SeedableRng};

use crate::rng::RandomSource;

/// Output scrambling multiplier.
const MULTIPLIER: u64 = 2685821657736338717;

/// Fast, single-variable pseudorandom source.
///
/// Not synchronized; wrap in a [`LockedSource`](crate::rng::LockedSource)
/// to share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl XorShift64 {
    /// Create a source from `seed`.
    ///
    /// A zero state only ever produces zeros, so a zero seed is replaced by 1.
    pub fn new(seed: u64) -> Self {
        Self {
            state: nonzero_seed(seed),
        }
    }

    /// Create a source seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Advance the state, returning the scrambled 64-bit output.
    fn step(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;

        x.wrapping_mul(MULTIPLIER)
    }
}

fn nonzero_seed(seed: u64) -> u64 {
    if seed == 0 { 1 } else { seed }
}

impl RandomSource for XorShift64 {
    fn seed(
        &mut self,
        seed: u64,
    ) {
        self.state = nonzero_seed(seed);
    }

    fn next_int63(&mut self) -> u64 {
        self.step() >> 1
    }
}

impl RngCore for XorShift64 {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(
        &mut self,
        dst: &mut [u8],
    ) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for XorShift64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SAMPLE_SIZE;

    #[test]
    fn test_known_sequence() {
        let mut rng = XorShift64::new(1);
        assert_eq!(rng.next_int63(), 2590246147603197582);
        assert_eq!(rng.next_int63(), 6190148572457775758);
        assert_eq!(rng.next_int63(), 6694749039465435051);
    }

    #[test]
    fn test_int63_is_nonnegative() {
        let mut rng = XorShift64::new(1);
        for _ in 0..SAMPLE_SIZE {
            let v = rng.next_int63();
            assert!(v < 1 << 63, "source returned {v} >= 2^63");
        }
    }

    #[test]
    fn test_zero_seed() {
        let mut rng = XorShift64::new(0);
        let nonzero = (0..SAMPLE_SIZE).filter(|_| rng.next_int63() != 0).count();
        assert!(nonzero > 0, "source generated only zeros");

        let mut reseeded = XorShift64::new(99);
        reseeded.seed(0);
        assert_eq!(reseeded, XorShift64::new(1));
    }

    #[test]
    fn test_reseed_replays() {
        let mut rng = XorShift64::new(42);
        let first: Vec<u64> = (0..16).map(|_| rng.next_int63()).collect();

        rng.seed(42);
        let second: Vec<u64> = (0..16).map(|_| rng.next_int63()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_rng_core() {
        let mut a = XorShift64::from_seed(7u64.to_le_bytes());
        let mut b = XorShift64::new(7);

        let wide = a.next_u64();
        assert_eq!(wide >> 1, b.next_int63());

        let mut buf = [0u8; 11];
        a.fill_bytes(&mut buf);
        let expected = b.step().to_le_bytes();
        assert_eq!(&buf[..8], &expected);
        assert_eq!(&buf[8..], &b.step().to_le_bytes()[..3]);

        let mut zero = XorShift64::seed_from_u64(0);
        assert_ne!(zero.next_u64(), 0);
    }
}
