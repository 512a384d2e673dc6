//! Selectable index range
//!
//! A sub-range of the items the user may land on. Unset bounds span the
//! whole `i32` range, so the item list is the only limit until the host
//! narrows it.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range of selectable indices
///
/// `min <= max` always holds: a setter that would cross the other bound
/// collapses onto it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableRange {
    min: i32,
    max: i32,
}

impl Default for SelectableRange {
    fn default() -> Self {
        Self {
            min: i32::MIN,
            max: i32::MAX,
        }
    }
}

impl SelectableRange {
    /// Lowest selectable index
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Highest selectable index
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set the lower bound; values above `max` collapse to `max`
    pub fn set_min(&mut self, index: i32) {
        self.min = index.min(self.max);
    }

    /// Set the upper bound; values below `min` collapse to `min`
    pub fn set_max(&mut self, index: i32) {
        self.max = index.max(self.min);
    }

    /// Clamp `index` into the range
    pub fn clamp(&self, index: i32) -> i32 {
        index.clamp(self.min, self.max)
    }

    pub fn contains(&self, index: i32) -> bool {
        (self.min..=self.max).contains(&index)
    }

    /// Intersect with the indices of `mark_count` items
    ///
    /// Bounds lying completely outside the items are pulled onto the nearest
    /// item. Returns true if anything changed. No-op for an empty list.
    pub fn fit_to_items(&mut self, mark_count: usize) -> bool {
        let Some(last) = last_index(mark_count) else {
            return false;
        };
        let before = *self;
        self.min = self.min.clamp(0, last);
        self.max = self.max.clamp(self.min, last);
        *self != before
    }
}

/// Index of the last of `mark_count` items
pub(crate) fn last_index(mark_count: usize) -> Option<i32> {
    match mark_count {
        0 => None,
        n => Some(i32::try_from(n - 1).unwrap_or(i32::MAX)),
    }
}
