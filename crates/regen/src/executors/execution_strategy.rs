//! # Execution Strategies

use crate::executors::{Generate, RuntimeArgs};

/// How a composite generator runs its children.
///
/// Both strategies concatenate child output in child order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionStrategy {
    /// Run children one after another, on the current thread.
    #[default]
    Serial,

    /// Run each child as its own task on the ``rayon`` pool, then join.
    ///
    /// Children draw from one locked source in whatever order they run,
    /// so output is not reproducible from a seed.
    #[cfg(feature = "rayon")]
    ForkJoin,
}

impl ExecutionStrategy {
    /// Does this strategy run children concurrently?
    pub fn is_concurrent(&self) -> bool {
        match self {
            Self::Serial => false,
            #[cfg(feature = "rayon")]
            Self::ForkJoin => true,
        }
    }

    /// Run each generator once, appending their output to `out` in order.
    ///
    /// ## Arguments
    /// * `args` - The runtime args; concurrent execution needs a shared source.
    /// * `generators` - The generators to run.
    /// * `out` - The output buffer.
    pub fn execute<G: Generate>(
        &self,
        args: &mut RuntimeArgs<'_>,
        generators: &[G],
        out: &mut String,
    ) {
        match self {
            Self::Serial => serial::execute(args, generators, out),
            #[cfg(feature = "rayon")]
            Self::ForkJoin => fork_join::execute(args, generators, out),
        }
    }

    /// Run one generator `n` times, appending its output to `out` in order.
    ///
    /// ## Arguments
    /// * `args` - The runtime args; concurrent execution needs a shared source.
    /// * `generator` - The generator to repeat.
    /// * `n` - The repeat count.
    /// * `out` - The output buffer.
    pub fn execute_repeated<G: Generate + ?Sized>(
        &self,
        args: &mut RuntimeArgs<'_>,
        generator: &G,
        n: usize,
        out: &mut String,
    ) {
        match self {
            Self::Serial => serial::execute_repeated(args, generator, n, out),
            #[cfg(feature = "rayon")]
            Self::ForkJoin => fork_join::execute_repeated(args, generator, n, out),
        }
    }
}

mod serial {
    use super::*;

    pub fn execute<G: Generate>(
        args: &mut RuntimeArgs<'_>,
        generators: &[G],
        out: &mut String,
    ) {
        for generator in generators {
            generator.generate_into(args, out);
        }
    }

    pub fn execute_repeated<G: Generate + ?Sized>(
        args: &mut RuntimeArgs<'_>,
        generator: &G,
        n: usize,
        out: &mut String,
    ) {
        for _ in 0..n {
            generator.generate_into(args, out);
        }
    }
}

#[cfg(feature = "rayon")]
mod fork_join {
    use rayon::prelude::*;

    use super::*;

    /// Slots are indexed by child position, so completion order cannot
    /// affect output order.
    fn join_slots(
        slots: Vec<String>,
        out: &mut String,
    ) {
        out.reserve(slots.iter().map(String::len).sum());
        for slot in slots {
            out.push_str(&slot);
        }
    }

    pub fn execute<G: Generate>(
        args: &mut RuntimeArgs<'_>,
        generators: &[G],
        out: &mut String,
    ) {
        let Some(locked_rng) = args.shared_source() else {
            return serial::execute(args, generators, out);
        };
        let strategy = args.strategy();

        let mut slots = vec![String::new(); generators.len()];
        slots
            .par_iter_mut()
            .zip(generators.par_iter())
            .for_each(|(slot, generator)| {
                let mut task_args = RuntimeArgs::shared(locked_rng, strategy);
                generator.generate_into(&mut task_args, slot);
            });

        join_slots(slots, out);
    }

    pub fn execute_repeated<G: Generate + ?Sized>(
        args: &mut RuntimeArgs<'_>,
        generator: &G,
        n: usize,
        out: &mut String,
    ) {
        let Some(locked_rng) = args.shared_source() else {
            return serial::execute_repeated(args, generator, n, out);
        };
        let strategy = args.strategy();

        let mut slots = vec![String::new(); n];
        slots.par_iter_mut().for_each(|slot| {
            let mut task_args = RuntimeArgs::shared(locked_rng, strategy);
            generator.generate_into(&mut task_args, slot);
        });

        join_slots(slots, out);
    }
}
