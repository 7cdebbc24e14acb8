//! # Error Types

/// Errors from regen operations.
///
/// Every variant is produced while compiling a pattern;
/// a compiled [`Generator`](crate::Generator) cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum RegenError {
    /// The pattern failed to parse; the parser's error, verbatim.
    #[error(transparent)]
    Parse(#[from] Box<regex_syntax::Error>),

    /// The requested flag combination is not supported.
    #[error("unsupported flag: {0}")]
    UnsupportedFlag(String),

    /// The pattern uses syntax outside of the configured dialect.
    #[error("{construct} at offset {offset} requires the `{flag}` flag")]
    UnsupportedSyntax {
        /// The rejected construct.
        construct: &'static str,

        /// The flag which would allow it.
        flag: &'static str,

        /// Byte offset of the construct in the pattern.
        offset: usize,
    },

    /// The parsed expression contains an operation with no generator.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A flat char class range list had an odd length.
    #[error("malformed char class: {len} runes is not a list of pairs")]
    MalformedCharClass {
        /// The length of the rune list.
        len: usize,
    },

    /// A char class contains no generatable characters.
    #[error("char class contains no generatable characters")]
    EmptyCharClass,
}

impl From<regex_syntax::Error> for RegenError {
    fn from(err: regex_syntax::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl From<regex_syntax::ast::Error> for RegenError {
    fn from(err: regex_syntax::ast::Error) -> Self {
        regex_syntax::Error::from(err).into()
    }
}

impl From<regex_syntax::hir::Error> for RegenError {
    fn from(err: regex_syntax::hir::Error) -> Self {
        regex_syntax::Error::from(err).into()
    }
}

/// Result type for regen operations.
pub type RegenResult<T> = core::result::Result<T, RegenError>;
