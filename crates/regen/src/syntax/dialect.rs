//! # Dialect Gate
//!
//! `regex-syntax` always accepts its full (Perl-like) syntax. The POSIX
//! dialect is enforced here, on the parsed AST, before translation.

use regex_syntax::ast::{self, Ast, AssertionKind, ClassSetItem, GroupKind, Span, Visitor};

use crate::{errors::RegenError, flags::ParseFlags};

/// Check that `ast` only uses syntax allowed by `flags`.
pub fn check_dialect(
    ast: &Ast,
    flags: ParseFlags,
) -> Result<(), RegenError> {
    ast::visit(ast, DialectCheck { flags })
}

struct DialectCheck {
    flags: ParseFlags,
}

impl DialectCheck {
    fn require_perl(
        &self,
        construct: &'static str,
        span: &Span,
    ) -> Result<(), RegenError> {
        if self.flags.perl_enabled() {
            return Ok(());
        }
        Err(RegenError::UnsupportedSyntax {
            construct,
            flag: "perl",
            offset: span.start.offset,
        })
    }

    fn require_unicode_groups(
        &self,
        span: &Span,
    ) -> Result<(), RegenError> {
        if self.flags.unicode_groups() {
            return Ok(());
        }
        Err(RegenError::UnsupportedSyntax {
            construct: "Unicode class",
            flag: "unicode_groups",
            offset: span.start.offset,
        })
    }
}

impl Visitor for DialectCheck {
    type Output = ();
    type Err = RegenError;

    fn finish(self) -> Result<(), RegenError> {
        Ok(())
    }

    fn visit_pre(
        &mut self,
        ast: &Ast,
    ) -> Result<(), RegenError> {
        match ast {
            Ast::ClassPerl(class) => self.require_perl("Perl character class", &class.span),
            Ast::ClassUnicode(class) => self.require_unicode_groups(&class.span),
            Ast::Flags(set) => self.require_perl("inline flags", &set.span),
            Ast::Repetition(rep) if !rep.greedy => {
                self.require_perl("non-greedy repetition", &rep.span)
            }
            Ast::Group(group) => {
                if matches!(group.kind, GroupKind::CaptureIndex(_)) {
                    Ok(())
                } else if matches!(group.kind, GroupKind::CaptureName { .. }) {
                    self.require_perl("named capture group", &group.span)
                } else {
                    self.require_perl("non-capturing group", &group.span)
                }
            }
            Ast::Assertion(assertion) => {
                if matches!(
                    assertion.kind,
                    AssertionKind::StartLine | AssertionKind::EndLine
                ) {
                    Ok(())
                } else {
                    self.require_perl("Perl assertion", &assertion.span)
                }
            }
            _ => Ok(()),
        }
    }

    fn visit_class_set_item_pre(
        &mut self,
        item: &ClassSetItem,
    ) -> Result<(), RegenError> {
        match item {
            ClassSetItem::Perl(class) => self.require_perl("Perl character class", &class.span),
            ClassSetItem::Unicode(class) => self.require_unicode_groups(&class.span),
            _ => Ok(()),
        }
    }
}
