//! Selection notifications
//!
//! Two callback slots: `changed` follows the index under the cursor while the
//! wheel moves, `selected` reports the index the wheel came to rest on.

use std::fmt;
use std::sync::Arc;

/// Callback receiving a selection index
pub type SelectionCallback = Arc<dyn Fn(i32) + Send + Sync>;

/// Holds the listeners and the last committed selection
#[derive(Default)]
pub struct SelectionNotifier {
    on_changed: Option<SelectionCallback>,
    on_selected: Option<SelectionCallback>,
    /// Last index reported through `on_selected`
    last_selected: Option<i32>,
}

impl fmt::Debug for SelectionNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionNotifier")
            .field("on_changed", &self.on_changed.is_some())
            .field("on_selected", &self.on_selected.is_some())
            .field("last_selected", &self.last_selected)
            .finish()
    }
}

impl SelectionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_changed(&mut self, callback: Option<SelectionCallback>) {
        self.on_changed = callback;
    }

    pub fn set_on_selected(&mut self, callback: Option<SelectionCallback>) {
        self.on_selected = callback;
    }

    /// Last committed selection, if any
    pub fn last_selected(&self) -> Option<i32> {
        self.last_selected
    }

    /// Report a live index change
    pub fn changed(&self, index: i32) {
        if let Some(callback) = &self.on_changed {
            callback(index);
        }
    }

    /// Report that the wheel rests on `index`
    ///
    /// Fires only if `index` differs from the previous commit. Returns true
    /// if this was a new selection.
    pub fn commit(&mut self, index: i32) -> bool {
        if self.last_selected == Some(index) {
            return false;
        }
        self.last_selected = Some(index);
        if let Some(callback) = &self.on_selected {
            callback(index);
        }
        true
    }
}
