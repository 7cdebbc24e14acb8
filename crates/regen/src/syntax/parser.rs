//! # Pattern Parsing

use regex_syntax::{
    ast::parse::ParserBuilder,
    hir::{Hir, translate::TranslatorBuilder},
};

use crate::{errors::RegenResult, flags::ParseFlags, syntax::dialect::check_dialect};

/// Parse `pattern` under `flags`.
///
/// Validates the flags, parses the AST, enforces the dialect,
/// and translates the AST into the HIR which generators are compiled from.
///
/// ## Arguments
/// * `pattern` - The regular expression.
/// * `flags` - The dialect flags.
///
/// ## Returns
/// The translated HIR; or the first flag, parse, or dialect error.
pub fn parse_pattern(
    pattern: &str,
    flags: ParseFlags,
) -> RegenResult<Hir> {
    flags.validate()?;

    let ast = ParserBuilder::new().build().parse(pattern)?;

    check_dialect(&ast, flags)?;

    let hir = TranslatorBuilder::new()
        .dot_matches_new_line(flags.match_newline())
        .case_insensitive(flags.fold_case())
        .build()
        .translate(pattern, &ast)?;

    Ok(hir)
}
