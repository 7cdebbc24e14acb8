//! # Runtime Arguments

use crate::{
    executors::ExecutionStrategy,
    rng::{LockedSource, RandomSource, XorShift64},
};

/// The random source a generation pass draws from.
#[derive(Debug)]
pub enum DrawSource<'a> {
    /// Borrowed exclusively for the pass; no synchronization.
    Exclusive(&'a mut XorShift64),

    /// Shared between concurrently running generators; every draw locks.
    Shared(&'a LockedSource<XorShift64>),
}

impl RandomSource for DrawSource<'_> {
    fn seed(
        &mut self,
        seed: u64,
    ) {
        match self {
            Self::Exclusive(rng) => rng.seed(seed),
            Self::Shared(locked_rng) => locked_rng.seed(seed),
        }
    }

    fn next_int63(&mut self) -> u64 {
        match self {
            Self::Exclusive(rng) => rng.next_int63(),
            Self::Shared(locked_rng) => locked_rng.next_int63(),
        }
    }

    fn uniform(
        &mut self,
        n: u64,
    ) -> u64 {
        match self {
            Self::Exclusive(rng) => rng.uniform(n),
            Self::Shared(locked_rng) => locked_rng.uniform(n),
        }
    }
}

/// Per-pass generation state, threaded through every generator.
///
/// ## Style Hints
///
/// Instance names should prefer `args`.
#[derive(Debug)]
pub struct RuntimeArgs<'a> {
    rng: DrawSource<'a>,
    strategy: ExecutionStrategy,
}

impl<'a> RuntimeArgs<'a> {
    /// Arguments drawing from an exclusively borrowed source.
    pub fn exclusive(
        rng: &'a mut XorShift64,
        strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            rng: DrawSource::Exclusive(rng),
            strategy,
        }
    }

    /// Arguments drawing from a shared, locked source.
    pub fn shared(
        locked_rng: &'a LockedSource<XorShift64>,
        strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            rng: DrawSource::Shared(locked_rng),
            strategy,
        }
    }

    /// The strategy for running child generators.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// The source to draw from.
    pub fn rng(&mut self) -> &mut DrawSource<'a> {
        &mut self.rng
    }

    /// The shared source, if this pass has one.
    pub fn shared_source(&self) -> Option<&'a LockedSource<XorShift64>> {
        match &self.rng {
            DrawSource::Shared(locked_rng) => Some(*locked_rng),
            DrawSource::Exclusive(_) => None,
        }
    }
}
