//! Scroll position model
//!
//! Maps the continuous horizontal offset to discrete mark indices. The
//! offset is the viewport's left edge in content coordinates, so mark `i`
//! sits under the center cursor when `offset == i * interval - half_width`.

use std::ops::Range;

use crate::bounds::SelectableRange;

/// Smallest interval ever divided by
pub const MIN_INTERVAL: f32 = 1.0;

/// Offset, interval and viewport geometry of one wheel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollModel {
    /// Current scroll offset in pixels
    offset: f32,
    /// Distance between marks as computed (may be 0)
    interval: f32,
    viewport_width: f32,
    viewport_height: f32,
    mark_count: usize,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Interval used for all mapping (never below [`MIN_INTERVAL`])
    pub fn interval(&self) -> f32 {
        self.interval.max(MIN_INTERVAL)
    }

    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    pub fn mark_count(&self) -> usize {
        self.mark_count
    }

    pub fn set_mark_count(&mut self, mark_count: usize) {
        self.mark_count = mark_count;
    }

    pub fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Update the viewport; returns true if the width or height changed
    pub fn set_viewport_size(&mut self, width: f32, height: f32) -> bool {
        let width = width.max(0.0);
        let height = height.max(0.0);
        if width == self.viewport_width && height == self.viewport_height {
            return false;
        }
        self.viewport_width = width;
        self.viewport_height = height;
        true
    }

    /// Distance from the viewport's left edge to the center cursor
    pub fn half_width(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// How far past the legal range a drag may go before it stops dead
    pub fn overscroll_slack(&self) -> f32 {
        self.half_width()
    }

    /// Content span `[0, (mark_count - 1) * interval]`
    pub fn content_extent(&self) -> (f32, f32) {
        let marks = self.mark_count.saturating_sub(1) as f32;
        (0.0, marks * self.interval())
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Offset that centers mark `index`
    pub fn offset_for_index(&self, index: i32) -> f32 {
        index as f32 * self.interval() - self.half_width()
    }

    /// Nearest mark to the cursor at `offset`, before any bounds clamping
    pub fn index_from_offset(&self, offset: f32) -> i32 {
        let index = ((offset + self.half_width()) / self.interval()).round();
        // float -> int casts saturate
        index as i32
    }

    /// Offsets at which the first and last selectable marks are centered
    pub fn legal_range(&self, bounds: &SelectableRange) -> (f32, f32) {
        (
            self.offset_for_index(bounds.min()),
            self.offset_for_index(bounds.max()),
        )
    }

    /// Distance of `offset` outside the legal range (0 inside it)
    pub fn overshoot(&self, offset: f32, bounds: &SelectableRange) -> f32 {
        let (low, high) = self.legal_range(bounds);
        if offset < low {
            low - offset
        } else if offset > high {
            offset - high
        } else {
            0.0
        }
    }

    /// Marks a renderer has to draw around `selected`
    ///
    /// Covers half a viewport on both sides of the cursor, limited to two
    /// such scopes past the ends of the item list. When the selection sits
    /// on a bound the window grows by one more scope past that bound so
    /// overscrolled content stays filled.
    pub fn visible_range(&self, selected: i32, bounds: &SelectableRange) -> Range<i32> {
        let scope = (self.half_width() / self.interval()).ceil() as i32;
        let count = i32::try_from(self.mark_count).unwrap_or(i32::MAX);

        let mut start = selected.saturating_sub(scope).max(scope.saturating_mul(-2));
        let mut end = selected
            .saturating_add(scope)
            .saturating_add(1)
            .min(count.saturating_add(scope.saturating_mul(2)));

        if selected == bounds.max() {
            end = end.saturating_add(scope);
        } else if selected == bounds.min() {
            start = start.saturating_sub(scope);
        }
        start..end.max(start)
    }
}
