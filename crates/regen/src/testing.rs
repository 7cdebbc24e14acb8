//! # Test Helpers

use regex::{Regex, RegexBuilder};

use crate::{GeneratorArgs, ParseFlags};

/// Each pattern is generated and checked this many times.
pub const SAMPLE_SIZE: usize = 999;

/// The fixed seed round-trip tests compile with.
pub const TEST_SEED: u64 = 1;

/// Build an anchored reference matcher for `pattern` under `flags`.
pub fn reference_matcher(
    pattern: &str,
    flags: ParseFlags,
) -> Regex {
    RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
        .dot_matches_new_line(flags.match_newline())
        .case_insensitive(flags.fold_case())
        .build()
        .unwrap()
}

/// Assert that every sample generated from `pattern` matches `expected`.
pub fn assert_generates(
    args: GeneratorArgs,
    expected: &str,
    pattern: &str,
) {
    let matcher = reference_matcher(expected, args.flags());
    let generator = args.compile(pattern).unwrap();

    for sample in generator.iter().take(SAMPLE_SIZE) {
        assert!(
            matcher.is_match(&sample),
            "/{pattern}/ generated {sample:?}, which does not match /{expected}/"
        );
    }
}

/// Assert that every sample generated from each pattern matches that pattern.
pub fn assert_generates_matching(
    args: GeneratorArgs,
    patterns: &[&str],
) {
    for pattern in patterns {
        assert_generates(args, pattern, pattern);
    }
}
