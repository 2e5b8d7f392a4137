//! Shuffle configuration options.

use core::ops::RangeInclusive;

/// Configuration for [`CardStack::shuffle_with`](crate::CardStack::shuffle_with).
///
/// Each shuffle runs a random number of full Fisher-Yates passes, drawn
/// uniformly from `min_passes..=max_passes`.
///
/// ```
/// use cardstack::ShuffleOptions;
///
/// let options = ShuffleOptions::default().with_passes(2, 3);
/// assert_eq!(options.passes_range(), 2..=3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleOptions {
    /// Minimum number of passes per shuffle.
    pub min_passes: u8,
    /// Maximum number of passes per shuffle.
    pub max_passes: u8,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            min_passes: 1,
            max_passes: 5,
        }
    }
}

impl ShuffleOptions {
    /// Sets the range of passes per shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::ShuffleOptions;
    ///
    /// let options = ShuffleOptions::default().with_passes(1, 1);
    /// assert_eq!(options.min_passes, 1);
    /// assert_eq!(options.max_passes, 1);
    /// ```
    #[must_use]
    pub const fn with_passes(mut self, min: u8, max: u8) -> Self {
        self.min_passes = min;
        self.max_passes = max;
        self
    }

    /// Returns the normalized range of passes.
    ///
    /// The lower bound is at least 1 and the upper bound is never below the
    /// lower bound, so the range is never empty.
    #[must_use]
    pub fn passes_range(&self) -> RangeInclusive<u8> {
        let min = self.min_passes.max(1);
        let max = self.max_passes.max(min);
        min..=max
    }
}
