//! # Parser Flags

use crate::errors::{RegenError, RegenResult};

/// Pattern dialect flags.
///
/// The default is the POSIX dialect: Perl extensions and Unicode
/// groups are rejected, and `.` does not generate newlines.
///
/// ## Style Hints
///
/// Instance names should prefer `flags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseFlags {
    perl: bool,
    unicode_groups: bool,
    match_newline: bool,
    fold_case: bool,
}

impl ParseFlags {
    /// The POSIX dialect; the same as `ParseFlags::default()`.
    pub const POSIX: ParseFlags = ParseFlags {
        perl: false,
        unicode_groups: false,
        match_newline: false,
        fold_case: false,
    };

    /// The Perl dialect: Perl extensions and Unicode groups.
    pub fn perl() -> Self {
        Self::POSIX.with_perl(true).with_unicode_groups(true)
    }

    /// Are Perl extensions enabled?
    ///
    /// These are `\d \s \w` classes, `\A \z \b \B` assertions,
    /// non-greedy repeats, non-capturing and named groups, and inline flags.
    pub fn perl_enabled(&self) -> bool {
        self.perl
    }

    /// Sets whether Perl extensions are enabled.
    pub fn set_perl(
        &mut self,
        perl: bool,
    ) {
        self.perl = perl;
    }

    /// Sets whether Perl extensions are enabled.
    pub fn with_perl(
        mut self,
        perl: bool,
    ) -> Self {
        self.set_perl(perl);
        self
    }

    /// Are Unicode groups (`\pL`, `\p{Greek}`) enabled?
    ///
    /// Only supported together with [`perl_enabled`](Self::perl_enabled).
    pub fn unicode_groups(&self) -> bool {
        self.unicode_groups
    }

    /// Sets whether Unicode groups are enabled.
    pub fn set_unicode_groups(
        &mut self,
        unicode_groups: bool,
    ) {
        self.unicode_groups = unicode_groups;
    }

    /// Sets whether Unicode groups are enabled.
    pub fn with_unicode_groups(
        mut self,
        unicode_groups: bool,
    ) -> Self {
        self.set_unicode_groups(unicode_groups);
        self
    }

    /// May `.` generate `\n`?
    pub fn match_newline(&self) -> bool {
        self.match_newline
    }

    /// Sets whether `.` may generate `\n`.
    pub fn set_match_newline(
        &mut self,
        match_newline: bool,
    ) {
        self.match_newline = match_newline;
    }

    /// Sets whether `.` may generate `\n`.
    pub fn with_match_newline(
        mut self,
        match_newline: bool,
    ) -> Self {
        self.set_match_newline(match_newline);
        self
    }

    /// Do literals and classes match case-insensitively?
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// Sets case-insensitive matching.
    pub fn set_fold_case(
        &mut self,
        fold_case: bool,
    ) {
        self.fold_case = fold_case;
    }

    /// Sets case-insensitive matching.
    pub fn with_fold_case(
        mut self,
        fold_case: bool,
    ) -> Self {
        self.set_fold_case(fold_case);
        self
    }

    /// Check that this flag combination is supported.
    ///
    /// ## Returns
    /// `UnsupportedFlag` if Unicode groups are enabled without Perl extensions.
    pub fn validate(&self) -> RegenResult<()> {
        if self.unicode_groups && !self.perl {
            return Err(RegenError::UnsupportedFlag(
                "UnicodeGroups requires the Perl flag".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_posix() {
        let flags = ParseFlags::default();
        assert_eq!(flags, ParseFlags::POSIX);
        assert!(!flags.perl_enabled());
        assert!(!flags.unicode_groups());
        assert!(!flags.match_newline());
        assert!(!flags.fold_case());
        assert!(flags.validate().is_ok());
    }

    #[test]
    fn test_perl() {
        let flags = ParseFlags::perl();
        assert!(flags.perl_enabled());
        assert!(flags.unicode_groups());
        assert!(flags.validate().is_ok());

        let mut flags = flags.with_match_newline(true);
        flags.set_fold_case(true);
        assert!(flags.match_newline());
        assert!(flags.fold_case());
    }

    #[test]
    fn test_unicode_groups_require_perl() {
        let flags = ParseFlags::POSIX.with_unicode_groups(true);
        assert!(matches!(
            flags.validate(),
            Err(RegenError::UnsupportedFlag(_))
        ));

        let mut flags = ParseFlags::perl();
        flags.set_perl(false);
        assert!(flags.validate().is_err());
    }
}
