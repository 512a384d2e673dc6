//! Interaction state machine
//!
//! The wheel's interaction phase is an explicit FSM: events are plain `u32`
//! constants and a transition either yields a new state or `None` (stay).

use std::hash::Hash;

/// A state type that reacts to `u32` events
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Events driving [`WheelState`]
pub mod wheel_events {
    /// Pointer went down on the wheel
    pub const POINTER_DOWN: u32 = 1;
    /// Released with fling velocity and the fling was accepted
    pub const FLING: u32 = 2;
    /// A settle animation was started
    pub const SETTLE: u32 = 3;
    /// Motion ended with the offset on a mark
    pub const SETTLED: u32 = 4;
    /// Running motion was cancelled programmatically
    pub const CANCEL: u32 = 5;
}

/// Wheel interaction phase
///
/// ```text
///   Idle ──down──► Dragging ──fling──► Flinging
///    ▲                │                   │
///    │                │ release / tap     │ fling ends
///    │                ▼                   ▼
///    └──settled─── Settling ◄─────────────┘
/// ```
///
/// A pointer down moves any state to `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WheelState {
    /// At rest on a mark
    #[default]
    Idle,
    /// Pointer is down and following the finger
    Dragging,
    /// Inertial fling after release
    Flinging,
    /// Animating onto a mark
    Settling,
}

impl WheelState {
    /// Returns true if the wheel is moving on its own
    pub fn is_animating(&self) -> bool {
        matches!(self, WheelState::Flinging | WheelState::Settling)
    }

    /// Returns true while the user holds the wheel
    pub fn is_dragging(&self) -> bool {
        matches!(self, WheelState::Dragging)
    }
}

impl StateTransitions for WheelState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use wheel_events::*;

        match (self, event) {
            // Any -> Dragging: touch interrupts everything
            (WheelState::Dragging, POINTER_DOWN) => None,
            (_, POINTER_DOWN) => Some(WheelState::Dragging),

            // Dragging -> Flinging: released fast enough
            (WheelState::Dragging, FLING) => Some(WheelState::Flinging),

            // Settle from release, tap, fling end or a programmatic select
            (WheelState::Settling, SETTLE) => None,
            (_, SETTLE) => Some(WheelState::Settling),

            // Motion came to rest on a mark
            (WheelState::Idle, SETTLED) => None,
            (_, SETTLED) => Some(WheelState::Idle),

            // Cancelled animations stop where they are
            (WheelState::Flinging | WheelState::Settling, CANCEL) => Some(WheelState::Idle),

            _ => None,
        }
    }
}
