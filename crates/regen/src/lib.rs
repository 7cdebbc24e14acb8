//! # `regen` Regex String Generator
//!
//! Generates random strings which match a regular expression;
//! for test data and fuzzing inputs.
//!
//! Patterns are parsed by `regex-syntax`, then compiled once into a tree
//! of generator nodes. Every sample is built by walking that tree.
//! Matching is a property of construction; samples are not re-checked.
//!
//! See:
//! * [`generate`] for one-off samples.
//! * [`compile`] / [`Generator`] to sample one pattern many times.
//! * [`GeneratorArgs`] and [`ParseFlags`] for the compile options.
//! * [`executors`] for serial and fork-join execution.
//!
//! ## Dialect
//!
//! The default is the POSIX dialect. [`ParseFlags::perl()`] enables
//! Perl classes (`\d \s \w`), `\A \z \b \B` assertions, non-greedy
//! repeats, non-capturing / named groups, inline flags, and Unicode
//! groups (`\pL`).
//!
//! Assertions and anchors generate nothing, and unbounded repeats
//! (`*`, `+`, `{m,}`) are capped at [`nodes::UNBOUNDED_REPEAT_LIMIT`].
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``rayon``
//!
//! #### feature: ``rayon``
//!
//! This enables [`ExecutionStrategy::ForkJoin`], which runs the children
//! of each concatenation and repeat as tasks on the ``rayon`` pool.
//!
//! ## Example
//!
//! ```rust
//! use regen::{ExecutionStrategy, GeneratorArgs, ParseFlags};
//!
//! let sample = regen::generate("[ab]{5}")?;
//! assert_eq!(sample.len(), 5);
//!
//! let generator = GeneratorArgs::default()
//!     .with_seed(42)
//!     .with_flags(ParseFlags::perl())
//!     .with_strategy(ExecutionStrategy::Serial)
//!     .compile(r"\d{3}-\d{4}")?;
//!
//! for sample in generator.iter().take(3) {
//!     assert_eq!(sample.chars().count(), 8);
//! }
//! # Ok::<(), regen::RegenError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(test)]
pub(crate) mod testing;

pub mod errors;
pub mod executors;
pub mod flags;
pub mod generator;
pub mod generator_args;
pub mod nodes;
pub mod rng;
pub mod syntax;
pub mod util;

#[doc(inline)]
pub use errors::{RegenError, RegenResult};
#[doc(inline)]
pub use executors::ExecutionStrategy;
#[doc(inline)]
pub use flags::ParseFlags;
#[doc(inline)]
pub use generator::{Generator, compile, generate};
#[doc(inline)]
pub use generator_args::GeneratorArgs;
