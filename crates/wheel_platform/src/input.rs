//! Pointer input events for touch and mouse drags
//!
//! The wheel only reacts to a single horizontal drag pointer, so mouse and
//! touch input are folded into one event type. Coordinates are local to the
//! wheel viewport (0.0 = left edge).

/// Single-pointer input events
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer went down
    Down {
        /// Pointer identifier (touch id, or 0 for the mouse)
        id: u64,
        /// X position in viewport coordinates
        x: f32,
        /// Y position in viewport coordinates
        y: f32,
        /// Event time in milliseconds (monotonic)
        time_ms: u64,
    },
    /// A pointer moved while down
    Moved {
        /// Pointer identifier
        id: u64,
        /// X position in viewport coordinates
        x: f32,
        /// Y position in viewport coordinates
        y: f32,
        /// Event time in milliseconds (monotonic)
        time_ms: u64,
    },
    /// A pointer was released
    Up {
        /// Pointer identifier
        id: u64,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
        /// Event time in milliseconds (monotonic)
        time_ms: u64,
    },
    /// The gesture was cancelled (e.g., taken over by the system)
    Cancelled {
        /// Pointer identifier
        id: u64,
    },
}

impl PointerEvent {
    /// Convenience constructor for a pointer down with id 0
    pub fn down(x: f32, time_ms: u64) -> Self {
        PointerEvent::Down {
            id: 0,
            x,
            y: 0.0,
            time_ms,
        }
    }

    /// Convenience constructor for a pointer move with id 0
    pub fn moved(x: f32, time_ms: u64) -> Self {
        PointerEvent::Moved {
            id: 0,
            x,
            y: 0.0,
            time_ms,
        }
    }

    /// Convenience constructor for a pointer up with id 0
    pub fn up(x: f32, time_ms: u64) -> Self {
        PointerEvent::Up {
            id: 0,
            x,
            y: 0.0,
            time_ms,
        }
    }

    /// Get the pointer ID
    pub fn id(&self) -> u64 {
        match self {
            PointerEvent::Down { id, .. } => *id,
            PointerEvent::Moved { id, .. } => *id,
            PointerEvent::Up { id, .. } => *id,
            PointerEvent::Cancelled { id } => *id,
        }
    }

    /// Get the position (returns None for Cancelled)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            PointerEvent::Down { x, y, .. } => Some((*x, *y)),
            PointerEvent::Moved { x, y, .. } => Some((*x, *y)),
            PointerEvent::Up { x, y, .. } => Some((*x, *y)),
            PointerEvent::Cancelled { .. } => None,
        }
    }

    /// Get the event time (returns None for Cancelled)
    pub fn time_ms(&self) -> Option<u64> {
        match self {
            PointerEvent::Down { time_ms, .. } => Some(*time_ms),
            PointerEvent::Moved { time_ms, .. } => Some(*time_ms),
            PointerEvent::Up { time_ms, .. } => Some(*time_ms),
            PointerEvent::Cancelled { .. } => None,
        }
    }
}
