//! # Repeat Bounds

use core::fmt;

use crate::rng::RandomSource;

/// The count an unbounded repeat (`*`, `+`, `{m,}`) is capped at.
pub const UNBOUNDED_REPEAT_LIMIT: u32 = 4096;

/// The closed interval of repeat counts a repeat generator draws from.
///
/// The upper bound is always finite; unbounded repeats are resolved
/// once, when the bounds are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatBounds {
    min: u32,
    max: u32,
}

impl RepeatBounds {
    /// Build bounds from a parsed repeat.
    ///
    /// ## Arguments
    /// * `min` - The minimum count.
    /// * `max` - The maximum count; `None` for an unbounded repeat.
    ///
    /// ## Returns
    /// Bounds where an unbounded max is [`UNBOUNDED_REPEAT_LIMIT`],
    /// or `min` when `min` is already past the limit.
    ///
    /// ## Panics
    /// If `max < min`.
    pub fn new(
        min: u32,
        max: Option<u32>,
    ) -> Self {
        let max = max.unwrap_or(UNBOUNDED_REPEAT_LIMIT.max(min));
        assert!(min <= max, "inverted repeat bounds {{{min},{max}}}");
        Self { min, max }
    }

    /// The minimum count.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// The maximum count.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Draw a count uniformly from `[min, max]`.
    pub fn draw<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> usize {
        if self.min == self.max {
            return self.min as usize;
        }
        let span = u64::from(self.max - self.min) + 1;
        self.min as usize + rng.uniform(span) as usize
    }
}

impl fmt::Display for RepeatBounds {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{{{}}}", self.min)
        } else {
            write!(f, "{{{},{}}}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rng::XorShift64, testing::SAMPLE_SIZE};

    #[test]
    fn test_unbounded_resolution() {
        let bounds = RepeatBounds::new(0, None);
        assert_eq!(bounds.min(), 0);
        assert_eq!(bounds.max(), UNBOUNDED_REPEAT_LIMIT);

        let bounds = RepeatBounds::new(1, None);
        assert_eq!(bounds.max(), UNBOUNDED_REPEAT_LIMIT);

        let bounds = RepeatBounds::new(5000, None);
        assert_eq!(bounds.min(), 5000);
        assert_eq!(bounds.max(), 5000);
    }

    #[test]
    #[should_panic(expected = "inverted repeat bounds")]
    fn test_inverted() {
        let _ = RepeatBounds::new(3, Some(2));
    }

    #[test]
    fn test_fixed_count_draws_nothing() {
        let mut rng = XorShift64::new(1);
        let before = rng.clone();

        let bounds = RepeatBounds::new(3, Some(3));
        assert_eq!(bounds.draw(&mut rng), 3);
        assert_eq!(rng, before);
    }

    #[test]
    fn test_draw_reaches_both_ends() {
        let mut rng = XorShift64::new(1);
        let bounds = RepeatBounds::new(2, Some(5));

        let mut seen = [false; 6];
        for _ in 0..SAMPLE_SIZE {
            let n = bounds.draw(&mut rng);
            assert!((2..=5).contains(&n), "{n}");
            seen[n] = true;
        }
        assert_eq!(seen, [false, false, true, true, true, true]);
    }

    #[test]
    fn test_display() {
        assert_eq!(RepeatBounds::new(3, Some(3)).to_string(), "{3}");
        assert_eq!(RepeatBounds::new(0, Some(1)).to_string(), "{0,1}");
        assert_eq!(RepeatBounds::new(1, None).to_string(), "{1,4096}");
    }
}
