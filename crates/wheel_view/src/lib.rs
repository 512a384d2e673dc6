//! Wheel View
//!
//! Selection engine for a horizontal wheel/ruler value picker: a strip of
//! labelled marks the user drags, flings or taps until one mark rests under
//! a center cursor.
//!
//! # Features
//!
//! - **Spacing**: Mark interval derived from the widest measured label
//! - **Bounds**: Selectable sub-range with automatic re-clamping
//! - **Gestures**: Drag with edge resistance, velocity-tracked fling, tap to select
//! - **Settling**: Every motion ends exactly on a mark
//! - **Notifications**: `changed` while moving, deduplicated `selected` at rest
//! - **Snapshots**: Binary and JSON save/restore of the selection
//!
//! # Architecture
//!
//! ```text
//! PointerEvent ──► GestureDetector ──► WheelView ──► Scroller (fling / settle)
//!                                          │
//!                                          ▼
//!                              ScrollModel + SelectableRange
//!                                          │
//!                                          ▼
//!                   SelectionNotifier + WheelHost::request_redraw
//! ```
//!
//! The engine is single-threaded and frame-driven: the host forwards pointer
//! events, calls [`WheelView::tick`] every frame while it returns true and
//! draws from [`WheelView::render_info`].

pub mod bounds;
pub mod config;
pub mod error;
pub mod gesture;
pub mod notifier;
pub mod position;
pub mod snapshot;
pub mod spacing;
pub mod stateful;
pub mod wheel;

pub use bounds::SelectableRange;
pub use config::{WheelConfig, WheelTheme};
pub use error::{Result, WheelError};
pub use gesture::{Gesture, GestureConfig, GestureDetector, VelocityTracker};
pub use notifier::{SelectionCallback, SelectionNotifier};
pub use position::{ScrollModel, MIN_INTERVAL};
pub use snapshot::WheelSnapshot;
pub use spacing::{Spacing, SpacingCalculator, SPACING_PROBE};
pub use stateful::{wheel_events, StateTransitions, WheelState};
pub use wheel::{WheelRenderInfo, WheelView};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{WheelConfig, WheelTheme};
    pub use crate::error::{Result, WheelError};
    pub use crate::snapshot::WheelSnapshot;
    pub use crate::stateful::WheelState;
    pub use crate::wheel::{WheelRenderInfo, WheelView};
    pub use wheel_animation::{Easing, ScrollerConfig};
    pub use wheel_platform::prelude::*;
}
