//! # Generator Options

use rand::RngCore;

use crate::{
    ExecutionStrategy,
    Generator,
    ParseFlags,
    errors::RegenResult,
};

/// Options for compiling a [`Generator`].
///
/// ## Style Hints
///
/// Instance names should prefer `generator_args`, or `args` when there is
/// no ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorArgs {
    /// Random source seed; drawn from entropy when unset.
    seed: Option<u64>,

    /// Pattern dialect flags.
    flags: ParseFlags,

    /// How composite generators run their children.
    strategy: ExecutionStrategy,
}

impl GeneratorArgs {
    /// Gets the configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the seed.
    ///
    /// Serial generators compiled with the same seed produce the same samples.
    pub fn set_seed(
        &mut self,
        seed: Option<u64>,
    ) {
        self.seed = seed;
    }

    /// Sets the seed.
    ///
    /// Serial generators compiled with the same seed produce the same samples.
    pub fn with_seed(
        mut self,
        seed: u64,
    ) -> Self {
        self.set_seed(Some(seed));
        self
    }

    /// Sets the seed by drawing one from `seed_source`.
    ///
    /// ## Arguments
    /// * `seed_source` - Any `rand` generator.
    pub fn with_seed_source<R: RngCore + ?Sized>(
        self,
        seed_source: &mut R,
    ) -> Self {
        self.with_seed(seed_source.next_u64())
    }

    /// Gets the configured flags.
    pub fn flags(&self) -> ParseFlags {
        self.flags
    }

    /// Sets the flags.
    pub fn set_flags(
        &mut self,
        flags: ParseFlags,
    ) {
        self.flags = flags;
    }

    /// Sets the flags.
    pub fn with_flags(
        mut self,
        flags: ParseFlags,
    ) -> Self {
        self.set_flags(flags);
        self
    }

    /// Gets the configured execution strategy.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Sets the execution strategy.
    ///
    /// Concurrent strategies draw from a locked random source,
    /// and their output is not reproducible from a seed.
    pub fn set_strategy(
        &mut self,
        strategy: ExecutionStrategy,
    ) {
        self.strategy = strategy;
    }

    /// Sets the execution strategy.
    ///
    /// Concurrent strategies draw from a locked random source,
    /// and their output is not reproducible from a seed.
    pub fn with_strategy(
        mut self,
        strategy: ExecutionStrategy,
    ) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Resolve the seed, drawing one from entropy if unset.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Compile `pattern` with these options.
    ///
    /// See [`compile`](crate::compile).
    pub fn compile(
        &self,
        pattern: &str,
    ) -> RegenResult<Generator> {
        Generator::compile(pattern, *self)
    }
}
