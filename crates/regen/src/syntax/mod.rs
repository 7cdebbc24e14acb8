//! # Pattern Syntax
//!
//! Patterns are parsed by `regex-syntax`; this module selects the
//! dialect and hands back the HIR the generator compiler consumes.

pub mod dialect;
pub mod parser;

pub use parser::parse_pattern;
