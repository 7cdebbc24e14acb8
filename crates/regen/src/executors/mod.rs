//! # Generator Execution
//!
//! Composite generators (concatenations and repeats) run their children
//! through an [`ExecutionStrategy`]; every generator receives the
//! per-pass [`RuntimeArgs`].

pub mod execution_strategy;
pub mod runtime_args;

#[doc(inline)]
pub use execution_strategy::ExecutionStrategy;
#[doc(inline)]
pub use runtime_args::{DrawSource, RuntimeArgs};

/// A compiled string generator.
///
/// Generators are immutable once built; all randomness comes from `args`,
/// so one generator may be shared by any number of threads.
pub trait Generate: Send + Sync {
    /// Generate one sample, appending it to `out`.
    ///
    /// ## Arguments
    /// * `args` - The per-pass runtime args.
    /// * `out` - The output buffer.
    fn generate_into(
        &self,
        args: &mut RuntimeArgs<'_>,
        out: &mut String,
    );
}
