use std::ops::RangeInclusive;

use thiserror::Error;

/// Spans wider than this trigger a large-range warning.
pub const LARGE_RANGE_SPAN: i64 = 20;

/// Errors that can occur when validating a series range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesRangeError {
    /// The first series count exceeds the last.
    #[error("series range start {start} exceeds end {end}")]
    StartAfterEnd {
        /// First series count.
        start: i32,
        /// Last series count.
        end: i32,
    },
}

/// A validated inclusive range of series counts (`start ≤ end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesRange {
    start: i32,
    end: i32,
}

impl SeriesRange {
    /// Creates a range from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesRangeError::StartAfterEnd`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, SeriesRangeError> {
        if start > end {
            return Err(SeriesRangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first series count.
    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Returns the last series count.
    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn span(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Returns the number of series counts in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.span().unsigned_abs() + 1
    }

    /// Always `false`; a valid range holds at least one series count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the range is wide enough to warrant a warning.
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.span() > LARGE_RANGE_SPAN
    }

    /// Returns the series counts in ascending order.
    #[must_use]
    pub fn counts(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}
