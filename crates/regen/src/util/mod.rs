//! # Utilities

pub mod char_class;

pub use char_class::{CharClass, CharClassRange};
