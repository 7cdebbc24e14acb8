//! # Random Sources
//!
//! Generation draws from a [`XorShift64`] stream, which is cheap to seed
//! and cheap to step. It mutates through `&mut self`, so sharing one
//! between concurrently running generators requires the mutex-guarded
//! [`LockedSource`] adapter; the fork-join strategy installs it
//! automatically.

pub mod locked_source;
pub mod random_source;
pub mod xorshift;

pub use locked_source::LockedSource;
pub use random_source::RandomSource;
pub use xorshift::XorShift64;
