//! Wheel picker engine
//!
//! [`WheelView`] reconciles a continuous scroll offset with a discrete,
//! bounds-limited selection. Three drivers move the offset:
//!
//! - **Drag**: pointer moves applied directly, with edge resistance
//! - **Fling**: inertial motion after a fast release
//! - **Programmatic**: [`WheelView::select_index`] (jump on the next tick)
//!   and [`WheelView::smooth_select_index`] (animated)
//!
//! Whatever moved it, the offset always comes to rest exactly on a mark,
//! `changed` fires for every index the cursor crosses and `selected` fires
//! once per new resting index.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wheel_platform::{MonospaceTextMeasurer, NoopHost};
//! use wheel_view::{WheelConfig, WheelView};
//!
//! let mut wheel = WheelView::new(
//!     WheelConfig::default(),
//!     Arc::new(MonospaceTextMeasurer::new(10.0)),
//!     Arc::new(NoopHost),
//! );
//! wheel.set_items((0..=100).map(|cm| cm.to_string()));
//! wheel.set_viewport_size(320.0, 80.0);
//! wheel.select_index(42);
//!
//! while wheel.tick(1.0 / 60.0) {}
//! assert_eq!(wheel.selected_index(), 42);
//! ```

use std::ops::Range;
use std::sync::Arc;

use wheel_animation::{MotionKind, ScrollStep, Scroller};
use wheel_platform::{EstimatedTextMeasurer, NoopHost, PointerEvent, TextMeasurer, WheelHost};

use crate::bounds::{last_index, SelectableRange};
use crate::config::WheelConfig;
use crate::gesture::{Gesture, GestureDetector};
use crate::notifier::SelectionNotifier;
use crate::position::ScrollModel;
use crate::snapshot::WheelSnapshot;
use crate::spacing::{Spacing, SpacingCalculator};
use crate::stateful::{wheel_events, StateTransitions, WheelState};

// ============================================================================
// Render Info
// ============================================================================

/// Everything a renderer needs to draw one frame of the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct WheelRenderInfo {
    /// Scroll offset (content x at the viewport's left edge)
    pub offset: f32,
    /// Distance between marks
    pub interval: f32,
    /// X of the center cursor within the viewport
    pub half_width: f32,
    /// Index under the cursor
    pub selected: i32,
    /// Marks to draw
    pub visible: Range<i32>,
    /// Width of the center annotation, drawn after the selected label
    pub annotation_width: f32,
    /// Interaction phase
    pub state: WheelState,
    /// Whether more ticks are needed
    pub is_animating: bool,
}

impl WheelRenderInfo {
    /// Viewport x of mark `index`
    pub fn mark_x(&self, index: i32) -> f32 {
        index as f32 * self.interval - self.offset
    }
}

// ============================================================================
// Wheel View
// ============================================================================

/// Horizontal wheel/ruler picker engine
pub struct WheelView {
    config: WheelConfig,
    items: Vec<String>,
    additional_center_mark: Option<String>,
    spacing: Spacing,
    bounds: SelectableRange,
    model: ScrollModel,
    scroller: Scroller,
    gesture: GestureDetector,
    notifier: SelectionNotifier,
    state: WheelState,
    /// Index under the cursor, always inside `bounds`
    selected: i32,
    /// `select_index` waiting for the next tick
    pending_jump: bool,
    measurer: Arc<dyn TextMeasurer>,
    host: Arc<dyn WheelHost>,
}

impl Default for WheelView {
    fn default() -> Self {
        Self::new(
            WheelConfig::default(),
            Arc::new(EstimatedTextMeasurer),
            Arc::new(NoopHost),
        )
    }
}

impl std::fmt::Debug for WheelView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelView")
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .field("bounds", &self.bounds)
            .field("offset", &self.model.offset())
            .field("state", &self.state)
            .finish()
    }
}

impl WheelView {
    /// Create an empty wheel
    ///
    /// The config is sanitized first. Index 0 is selected.
    pub fn new(
        config: WheelConfig,
        measurer: Arc<dyn TextMeasurer>,
        host: Arc<dyn WheelHost>,
    ) -> Self {
        let config = config.sanitized();
        let mut view = Self {
            additional_center_mark: config.additional_center_mark.clone(),
            items: Vec::new(),
            spacing: Spacing::default(),
            bounds: SelectableRange::default(),
            model: ScrollModel::new(),
            scroller: Scroller::new(config.motion),
            gesture: GestureDetector::new(config.gesture),
            notifier: SelectionNotifier::new(),
            state: WheelState::Idle,
            selected: -1,
            pending_jump: false,
            measurer,
            host,
            config,
        };
        view.recompute_spacing();
        view.select_index(0);
        view
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn mark_count(&self) -> usize {
        self.items.len()
    }

    /// Index under the cursor
    pub fn selected_index(&self) -> i32 {
        self.selected
    }

    pub fn min_selectable_index(&self) -> i32 {
        self.bounds.min()
    }

    pub fn max_selectable_index(&self) -> i32 {
        self.bounds.max()
    }

    pub fn additional_center_mark(&self) -> Option<&str> {
        self.additional_center_mark.as_deref()
    }

    /// Current scroll offset
    pub fn offset(&self) -> f32 {
        self.model.offset()
    }

    /// Effective distance between marks
    pub fn interval(&self) -> f32 {
        self.model.interval()
    }

    pub fn state(&self) -> WheelState {
        self.state
    }

    /// Check if the wheel still needs ticks
    pub fn is_animating(&self) -> bool {
        self.pending_jump || !self.scroller.is_finished()
    }

    /// Offset that centers mark `index`
    pub fn offset_for_index(&self, index: i32) -> f32 {
        self.model.offset_for_index(index)
    }

    /// Selectable index nearest to the cursor at `offset`
    pub fn index_from_offset(&self, offset: f32) -> i32 {
        self.bounds.clamp(self.model.index_from_offset(offset))
    }

    /// Snapshot of the current frame for a renderer
    pub fn render_info(&self) -> WheelRenderInfo {
        WheelRenderInfo {
            offset: self.model.offset(),
            interval: self.model.interval(),
            half_width: self.model.half_width(),
            selected: self.selected,
            visible: self.model.visible_range(self.selected, &self.bounds),
            annotation_width: self.spacing.annotation_width,
            state: self.state,
            is_animating: self.is_animating(),
        }
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Called whenever the index under the cursor changes
    pub fn on_changed<F>(&mut self, callback: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.notifier.set_on_changed(Some(Arc::new(callback)));
    }

    /// Called when the wheel comes to rest on a new index
    pub fn on_selected<F>(&mut self, callback: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.notifier.set_on_selected(Some(Arc::new(callback)));
    }

    /// Remove both listeners
    pub fn clear_listeners(&mut self) {
        self.notifier.set_on_changed(None);
        self.notifier.set_on_selected(None);
    }

    // =========================================================================
    // Content and Layout
    // =========================================================================

    /// Replace the labels
    ///
    /// Bounds are pulled into the new item range, the interval is recomputed
    /// and the wheel re-centers on the (re-clamped) selection on the next tick.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        tracing::debug!("WheelView: {} items", self.items.len());

        if self.bounds.fit_to_items(self.items.len()) {
            tracing::debug!(
                "WheelView: bounds fitted to items ({}, {})",
                self.bounds.min(),
                self.bounds.max()
            );
        }
        self.recompute_spacing();
        self.select_index(self.selected);
    }

    /// Set or clear the annotation drawn after the centered label
    pub fn set_additional_center_mark(&mut self, mark: Option<String>) {
        if self.additional_center_mark == mark {
            return;
        }
        self.additional_center_mark = mark;
        self.recompute_spacing();
        // spacing changed under a resting wheel
        if !self.state.is_dragging() {
            self.select_index(self.selected);
        }
    }

    /// Update the viewport size
    ///
    /// A wheel that is not being dragged re-centers on its selection.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if !self.model.set_viewport_size(width, height) {
            return;
        }
        tracing::debug!("WheelView: viewport {}x{}", width, height);
        if !self.state.is_dragging() {
            self.select_index(self.selected);
        }
    }

    pub fn set_min_selectable_index(&mut self, index: i32) {
        let index = self.clamp_to_items(index);
        self.bounds.set_min(index);
        tracing::debug!(
            "WheelView: selectable range ({}, {})",
            self.bounds.min(),
            self.bounds.max()
        );
        self.reclamp_selection();
    }

    pub fn set_max_selectable_index(&mut self, index: i32) {
        let index = self.clamp_to_items(index);
        self.bounds.set_max(index);
        tracing::debug!(
            "WheelView: selectable range ({}, {})",
            self.bounds.min(),
            self.bounds.max()
        );
        self.reclamp_selection();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Jump to `index` (clamped) on the next tick
    ///
    /// Cancels any running animation. The selection is updated immediately;
    /// the offset moves and `selected` fires when the jump is applied.
    pub fn select_index(&mut self, index: i32) {
        let index = self.bounds.clamp(index);
        self.cancel_motion();
        self.selected = index;
        self.pending_jump = true;
        self.host.request_redraw();
    }

    /// Animate to `index` (clamped)
    ///
    /// A pointer held on the wheel is released first: its later moves and
    /// lift are ignored until the next down.
    pub fn smooth_select_index(&mut self, index: i32) {
        let index = self.bounds.clamp(index);
        self.cancel_motion();
        if self.gesture.is_active() {
            tracing::debug!("WheelView: gesture ended by smooth select");
            self.gesture.reset();
        }
        // superseded by the animation
        self.pending_jump = false;
        self.settle_to(index);
    }

    /// Capture the selection for later [`restore`](Self::restore)
    pub fn snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            index: self.selected,
            min: self.bounds.min(),
            max: self.bounds.max(),
        }
    }

    /// Restore a snapshot: bounds first, then the selection
    pub fn restore(&mut self, snapshot: WheelSnapshot) {
        self.set_min_selectable_index(snapshot.min);
        self.set_max_selectable_index(snapshot.max);
        self.select_index(snapshot.index);
    }

    // =========================================================================
    // Input and Frames
    // =========================================================================

    /// Handle a pointer event
    ///
    /// Returns true if the event belongs to the wheel's gesture. Everything
    /// is ignored while there are no items.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let Some(gesture) = self.gesture.on_event(event) else {
            return self.gesture.is_active();
        };

        match gesture {
            Gesture::Down { .. } => {
                self.apply_pending_jump();
                self.scroller.force_finished();
                self.transition(wheel_events::POINTER_DOWN);
                self.host.disallow_intercept();
            }
            Gesture::Scroll { distance } => self.drag_by(distance),
            Gesture::Fling { velocity } => self.fling(velocity),
            Gesture::Tap { x } => {
                self.host.play_click();
                let offset = self.model.offset() + x - self.model.half_width();
                self.refresh_center(offset);
                self.settle_to(self.selected);
            }
            Gesture::Release => self.settle_to(self.selected),
        }
        true
    }

    /// Advance by `dt` seconds
    ///
    /// Returns true while further ticks are needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.apply_pending_jump();

        match self.scroller.tick(dt) {
            ScrollStep::Idle => {}
            ScrollStep::Moved(offset) => {
                tracing::trace!("WheelView: offset {:.2}", offset);
                self.scroll_to(offset);
            }
            ScrollStep::Finished { offset, kind } => {
                self.scroll_to(offset);
                match kind {
                    MotionKind::Fling => {
                        tracing::debug!("WheelView: fling ended at {:.1}", offset);
                        self.settle_to(self.selected);
                    }
                    MotionKind::Settle => {
                        self.transition(wheel_events::SETTLED);
                        self.commit_selection();
                    }
                }
            }
        }
        self.is_animating()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn transition(&mut self, event: u32) {
        if let Some(next) = self.state.on_event(event) {
            tracing::debug!("WheelView: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn cancel_motion(&mut self) {
        self.scroller.force_finished();
        self.transition(wheel_events::CANCEL);
    }

    fn recompute_spacing(&mut self) {
        let theme = &self.config.theme;
        let calculator =
            SpacingCalculator::new(self.measurer.as_ref(), theme.center_text_size, theme.text_size);
        self.spacing = calculator.compute(
            self.items.as_slice(),
            self.additional_center_mark.as_deref(),
            self.config.spacing_factor,
            self.config.use_fixed_spacing,
        );
        self.model.set_interval(self.spacing.interval);
        self.model.set_mark_count(self.items.len());
        tracing::debug!("WheelView: interval {:.2}", self.model.interval());
    }

    fn clamp_to_items(&self, index: i32) -> i32 {
        match last_index(self.items.len()) {
            Some(last) => index.clamp(0, last),
            None => index,
        }
    }

    /// Re-center on the nearest selectable index after a bounds change
    fn reclamp_selection(&mut self) {
        let safe = self.bounds.clamp(self.selected);
        if safe != self.selected {
            self.select_index(safe);
        }
    }

    fn apply_pending_jump(&mut self) {
        if !self.pending_jump {
            return;
        }
        self.pending_jump = false;
        let offset = self.model.offset_for_index(self.selected);
        tracing::debug!("WheelView: jump to {} at {:.1}", self.selected, offset);
        self.scroll_to(offset);
        self.commit_selection();
    }

    /// Move the offset, follow the cursor with the selection and redraw
    fn scroll_to(&mut self, offset: f32) {
        self.model.set_offset(offset);
        self.refresh_center(offset);
        self.host.request_redraw();
    }

    /// Make the selectable index nearest to `offset` current
    fn refresh_center(&mut self, offset: f32) {
        if self.items.is_empty() {
            return;
        }
        let index = self.index_from_offset(offset);
        if index != self.selected {
            self.selected = index;
            self.notifier.changed(index);
        }
    }

    fn commit_selection(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.notifier.commit(self.selected) {
            tracing::debug!("WheelView: selected {}", self.selected);
        }
    }

    fn drag_by(&mut self, distance: f32) {
        let offset = self.model.offset();
        let overshoot = self.model.overshoot(offset, &self.bounds);
        let applied = if overshoot > self.model.overscroll_slack() {
            0.0
        } else if overshoot > 0.0 {
            distance / 4.0
        } else {
            distance
        };
        tracing::trace!(
            "WheelView: drag {:.1} (applied {:.1}, overshoot {:.1})",
            distance,
            applied,
            overshoot
        );
        if applied != 0.0 {
            self.scroll_to(offset + applied);
        }
    }

    fn fling(&mut self, velocity: f32) {
        let (low, high) = self.model.legal_range(&self.bounds);
        let offset = self.model.offset();
        if offset < low || offset > high {
            tracing::debug!(
                "WheelView: fling rejected at {:.1} outside ({:.1}, {:.1})",
                offset,
                low,
                high
            );
            self.settle_to(self.selected);
            return;
        }
        // finger right means content moves toward lower offsets
        self.scroller.fling(offset, -velocity, low, high);
        self.transition(wheel_events::FLING);
        self.host.request_redraw();
    }

    /// Animate onto mark `index`, or commit right away if already there
    fn settle_to(&mut self, index: i32) {
        let offset = self.model.offset();
        let target = self.model.offset_for_index(index);
        if offset == target {
            self.scroller.force_finished();
            self.refresh_center(offset);
            self.transition(wheel_events::SETTLED);
            self.commit_selection();
            return;
        }
        self.scroller.start_scroll(offset, target);
        self.transition(wheel_events::SETTLE);
        self.host.request_redraw();
    }
}
