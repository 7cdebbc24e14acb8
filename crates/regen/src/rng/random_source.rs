//! # Random Source Trait

/// A source of nonnegative 63-bit pseudorandom values.
///
/// ## Style Hints
///
/// Instance names should prefer `rng`.
pub trait RandomSource {
    /// Reset the source's state from `seed`.
    fn seed(
        &mut self,
        seed: u64,
    );

    /// Next value in `[0, 2^63)`.
    fn next_int63(&mut self) -> u64;

    /// Uniform value in `[0, n)`.
    ///
    /// Rejection-samples the 63-bit stream so that every value is equally likely.
    ///
    /// ## Panics
    /// If `n == 0`.
    fn uniform(
        &mut self,
        n: u64,
    ) -> u64 {
        assert!(n > 0, "uniform bound must be positive");

        if n.is_power_of_two() {
            return self.next_int63() & (n - 1);
        }

        // Largest value which keeps `v % n` unbiased.
        let max = (1u64 << 63) - 1 - (1u64 << 63) % n;
        let mut v = self.next_int63();
        while v > max {
            v = self.next_int63();
        }
        v % n
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn seed(
        &mut self,
        seed: u64,
    ) {
        (**self).seed(seed)
    }

    fn next_int63(&mut self) -> u64 {
        (**self).next_int63()
    }

    fn uniform(
        &mut self,
        n: u64,
    ) -> u64 {
        (**self).uniform(n)
    }
}
