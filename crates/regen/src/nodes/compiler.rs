//! # Generator Compiler
//!
//! Walks a translated HIR once, producing the [`GeneratorNode`] tree.

use regex_syntax::hir::{self, Dot, Hir, HirKind};

use crate::{
    errors::{RegenError, RegenResult},
    nodes::{GeneratorNode, RepeatBounds},
    util::CharClass,
};

/// Compile `hir` into a generator tree.
///
/// ## Arguments
/// * `hir` - The translated pattern.
///
/// ## Returns
/// The root node; or `UnsupportedOperation` / `EmptyCharClass` if some
/// part of the pattern cannot be generated.
pub fn compile_hir(hir: &Hir) -> RegenResult<GeneratorNode> {
    match hir.kind() {
        HirKind::Empty => Ok(GeneratorNode::EmptyMatch),
        HirKind::Look(_) => Ok(GeneratorNode::Noop),
        HirKind::Literal(literal) => compile_literal(literal),
        HirKind::Class(class) => compile_class(hir, class),
        HirKind::Capture(capture) => compile_hir(&capture.sub),
        HirKind::Concat(children) => Ok(GeneratorNode::Concat(compile_all(children)?)),
        HirKind::Alternation(branches) => compile_alternation(branches),
        HirKind::Repetition(repetition) => compile_repetition(repetition),
        #[allow(unreachable_patterns)]
        kind => Err(RegenError::UnsupportedOperation(format!("{kind:?}"))),
    }
}

fn compile_all(hirs: &[Hir]) -> RegenResult<Vec<GeneratorNode>> {
    hirs.iter().map(compile_hir).collect()
}

/// Branches which can never generate are dropped; the alternation is
/// only empty if every branch is.
fn compile_alternation(branches: &[Hir]) -> RegenResult<GeneratorNode> {
    if branches.is_empty() {
        return Err(RegenError::UnsupportedOperation(
            "alternation with no branches".to_string(),
        ));
    }

    let mut nodes = Vec::with_capacity(branches.len());
    for branch in branches {
        match compile_hir(branch) {
            Ok(node) => nodes.push(node),
            Err(RegenError::EmptyCharClass) => {}
            Err(err) => return Err(err),
        }
    }

    match nodes.len() {
        0 => Err(RegenError::EmptyCharClass),
        1 => Ok(nodes.remove(0)),
        _ => Ok(GeneratorNode::Alternate(nodes)),
    }
}

fn compile_literal(literal: &hir::Literal) -> RegenResult<GeneratorNode> {
    match core::str::from_utf8(&literal.0) {
        Ok(text) => Ok(GeneratorNode::Literal(text.to_string())),
        Err(_) => Err(RegenError::UnsupportedOperation(format!(
            "non-UTF-8 literal {:?}",
            literal.0
        ))),
    }
}

fn compile_class(
    hir: &Hir,
    class: &hir::Class,
) -> RegenResult<GeneratorNode> {
    let class = match class {
        hir::Class::Unicode(class) => {
            CharClass::from_ranges(class.ranges().iter().map(|r| (r.start(), r.end())))?
        }
        hir::Class::Bytes(class) => {
            if !class.is_ascii() {
                return Err(RegenError::UnsupportedOperation(format!(
                    "non-ASCII byte class {class:?}"
                )));
            }
            CharClass::from_ranges(
                class
                    .ranges()
                    .iter()
                    .map(|r| (char::from(r.start()), char::from(r.end()))),
            )?
        }
    };

    if *hir == Hir::dot(Dot::AnyChar) {
        Ok(GeneratorNode::AnyChar(class))
    } else if *hir == Hir::dot(Dot::AnyCharExceptLF) {
        Ok(GeneratorNode::AnyCharNoNewline(class))
    } else {
        Ok(GeneratorNode::CharClass(class))
    }
}

fn compile_repetition(repetition: &hir::Repetition) -> RegenResult<GeneratorNode> {
    let child = compile_hir(&repetition.sub)?;
    let bounds = RepeatBounds::new(repetition.min, repetition.max);
    Ok(GeneratorNode::Repeat {
        child: Box::new(child),
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flags::ParseFlags, nodes::UNBOUNDED_REPEAT_LIMIT, syntax::parse_pattern};

    fn compile(
        pattern: &str,
        flags: ParseFlags,
    ) -> RegenResult<GeneratorNode> {
        compile_hir(&parse_pattern(pattern, flags)?)
    }

    fn compile_posix(pattern: &str) -> GeneratorNode {
        compile(pattern, ParseFlags::POSIX).unwrap()
    }

    #[test]
    fn test_leaves() {
        assert_eq!(compile_posix(""), GeneratorNode::EmptyMatch);
        assert_eq!(compile_posix("^"), GeneratorNode::Noop);
        assert_eq!(compile_posix("abc"), GeneratorNode::Literal("abc".to_string()));
        assert_eq!(compile_posix("[a-c]").to_string(), "class[a-c]");
    }

    #[test]
    fn test_capture_is_transparent() {
        assert_eq!(compile_posix("(abc)"), compile_posix("abc"));
        assert_eq!(compile_posix("()"), GeneratorNode::EmptyMatch);
        assert_eq!(compile_posix("((a)(b))").to_string(), r#"concat(literal("a"), literal("b"))"#);
    }

    #[test]
    fn test_any_char() {
        assert!(matches!(compile_posix("."), GeneratorNode::AnyCharNoNewline(_)));

        let flags = ParseFlags::POSIX.with_match_newline(true);
        assert!(matches!(compile(".", flags).unwrap(), GeneratorNode::AnyChar(_)));

        // The parser's range set already excludes the newline.
        match compile_posix(".") {
            GeneratorNode::AnyCharNoNewline(class) => {
                assert!(class.ranges().iter().all(|r| !(r.start()..=r.end()).contains(&'\n')));
                assert_eq!(class.rune_at(0), '\u{1}');
            }
            other => panic!("unexpected node {other}"),
        }
    }

    #[test]
    fn test_repetition() {
        assert_eq!(compile_posix("a?").to_string(), r#"repeat{0,1}(literal("a"))"#);
        assert_eq!(compile_posix("a{3}").to_string(), r#"repeat{3}(literal("a"))"#);

        match compile_posix("(ab)*") {
            GeneratorNode::Repeat { child, bounds } => {
                assert_eq!(*child, GeneratorNode::Literal("ab".to_string()));
                assert_eq!(bounds.min(), 0);
                assert_eq!(bounds.max(), UNBOUNDED_REPEAT_LIMIT);
            }
            other => panic!("unexpected node {other}"),
        }
    }

    #[test]
    fn test_alternation() {
        assert_eq!(
            compile_posix("ab|cd|").to_string(),
            r#"alternate(literal("ab"), literal("cd"), empty)"#
        );
    }

    #[test]
    fn test_perl_assertions_are_noops() {
        let node = compile(r"\A\bx\B\z", ParseFlags::perl()).unwrap();
        assert_eq!(
            node.to_string(),
            r#"concat(noop, noop, literal("x"), noop, noop)"#
        );
    }

    #[test]
    fn test_byte_classes() {
        let flags = ParseFlags::perl();
        assert_eq!(
            compile("(?-u)[a-c]", flags).unwrap().to_string(),
            "class[a-c]"
        );
    }

    #[test]
    fn test_empty_class() {
        assert!(matches!(
            compile(r"[a&&b]", ParseFlags::POSIX),
            Err(RegenError::EmptyCharClass)
        ));
        assert!(matches!(
            compile(r"[a&&b]|x[c&&d]", ParseFlags::POSIX),
            Err(RegenError::EmptyCharClass)
        ));
    }

    #[test]
    fn test_alternation_drops_empty_branches() {
        assert_eq!(
            compile_posix("abc|x[a&&b]|de").to_string(),
            r#"alternate(literal("abc"), literal("de"))"#
        );
        assert_eq!(
            compile_posix("abc|x[a&&b]"),
            GeneratorNode::Literal("abc".to_string())
        );
    }
}
