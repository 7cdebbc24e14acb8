//! # Generator Nodes
//!
//! The compiled form of a pattern: a tree of [`GeneratorNode`]s built
//! by [`compile_hir`], each drawing from the pass's random source.

pub mod compiler;
pub mod generator_node;
pub mod repeat_bounds;

#[doc(inline)]
pub use compiler::compile_hir;
#[doc(inline)]
pub use generator_node::GeneratorNode;
#[doc(inline)]
pub use repeat_bounds::{RepeatBounds, UNBOUNDED_REPEAT_LIMIT};
