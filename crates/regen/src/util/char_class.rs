//! # Indexed Char Classes
//!
//! A char class is stored as a list of ranges, and its characters are
//! addressed by a flat index across all of them. Uniform sampling over the
//! class is then a single bounded draw plus an O(ranges) scan, no matter how
//! wide the ranges are; negated classes arrive pre-complemented by the
//! parser as a handful of very large ranges.

use core::fmt;

use crate::{
    errors::{RegenError, RegenResult},
    rng::RandomSource,
};

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// A run of `size` consecutive characters starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClassRange {
    start: u32,
    size: u32,
}

impl CharClassRange {
    /// Build the inclusive range `start..=end`.
    ///
    /// ## Panics
    /// * If `start` is NUL; NUL is never generated.
    /// * If `end < start`.
    /// * If the range contains a surrogate codepoint.
    pub fn new(
        start: char,
        end: char,
    ) -> Self {
        let (start, end) = (start as u32, end as u32);

        assert!(start >= 1, "char class range cannot contain NUL");
        assert!(
            end >= start,
            "char class range size must be at least 1: {start:#x}..={end:#x}"
        );
        assert!(
            end < SURROGATE_START || start > SURROGATE_END,
            "char class range cannot span surrogates: {start:#x}..={end:#x}"
        );

        Self {
            start,
            size: end - start + 1,
        }
    }

    /// First character of the range.
    pub fn start(&self) -> char {
        self.char_at(0)
    }

    /// Last character of the range.
    pub fn end(&self) -> char {
        self.char_at(self.size - 1)
    }

    /// Number of characters in the range.
    pub fn size(&self) -> u32 {
        self.size
    }

    fn char_at(
        &self,
        offset: u32,
    ) -> char {
        match char::from_u32(self.start + offset) {
            Some(c) => c,
            None => panic!("range construction admitted a non-scalar codepoint"),
        }
    }
}

impl fmt::Display for CharClassRange {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.size == 1 {
            write!(f, "{}", self.start().escape_debug())
        } else {
            write!(
                f,
                "{}-{}",
                self.start().escape_debug(),
                self.end().escape_debug()
            )
        }
    }
}

/// An immutable set of characters, addressable by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharClass {
    ranges: Vec<CharClassRange>,
    total_size: u32,
}

impl CharClass {
    /// Build a class from a flat list of range bounds.
    ///
    /// The list is read as inclusive `(start, end)` pairs:
    /// `[a0-9]` is `['a', 'a', '0', '9']`.
    ///
    /// ## Returns
    /// `MalformedCharClass` if the list has odd length.
    pub fn parse(runes: &[char]) -> RegenResult<Self> {
        if runes.len() % 2 != 0 {
            return Err(RegenError::MalformedCharClass { len: runes.len() });
        }
        Self::from_ranges(runes.chunks_exact(2).map(|pair| (pair[0], pair[1])))
    }

    /// Build a class from inclusive `(start, end)` ranges, kept in the given order.
    ///
    /// A range starting at NUL starts at `'\u{1}'` instead, and a range of only NUL
    /// is dropped. A range crossing the surrogate block is split around it.
    ///
    /// ## Returns
    /// `EmptyCharClass` if no characters remain.
    ///
    /// ## Panics
    /// If any range has `end < start`.
    pub fn from_ranges<I>(ranges: I) -> RegenResult<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut class = Self {
            ranges: Vec::new(),
            total_size: 0,
        };

        for (start, end) in ranges {
            let start = if start == '\0' {
                if end == '\0' {
                    continue;
                }
                '\u{1}'
            } else {
                start
            };

            if (start as u32) < SURROGATE_START && (end as u32) > SURROGATE_END {
                class.push(CharClassRange::new(start, '\u{D7FF}'));
                class.push(CharClassRange::new('\u{E000}', end));
            } else {
                class.push(CharClassRange::new(start, end));
            }
        }

        if class.ranges.is_empty() {
            return Err(RegenError::EmptyCharClass);
        }
        Ok(class)
    }

    fn push(
        &mut self,
        range: CharClassRange,
    ) {
        self.total_size += range.size;
        self.ranges.push(range);
    }

    /// The ranges, in construction order.
    pub fn ranges(&self) -> &[CharClassRange] {
        &self.ranges
    }

    /// Total number of characters in the class.
    pub fn size(&self) -> u32 {
        self.total_size
    }

    /// Get the character at `index`, treating the ranges as one contiguous sequence.
    ///
    /// ## Panics
    /// If `index >= self.size()`.
    pub fn rune_at(
        &self,
        index: u32,
    ) -> char {
        let mut i = index;
        for range in &self.ranges {
            if i < range.size {
                return range.char_at(i);
            }
            i -= range.size;
        }
        panic!(
            "index {index} out of bounds for char class of size {}",
            self.total_size
        );
    }

    /// Draw a character uniformly from the class.
    pub fn sample<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> char {
        self.rune_at(rng.uniform(self.total_size as u64) as u32)
    }
}

impl fmt::Display for CharClass {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("[")?;
        for range in &self.ranges {
            write!(f, "{range}")?;
        }
        f.write_str("]")
    }
}
