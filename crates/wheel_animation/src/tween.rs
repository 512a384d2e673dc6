//! Fixed-duration transition between two offsets
//!
//! A tween always lands exactly on its end value: once progress reaches 1.0
//! the eased interpolation is bypassed so no floating point residue is left
//! behind.

use crate::easing::Easing;

/// A timed transition from one value to another
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Duration in milliseconds
    duration_ms: u32,
    /// Elapsed time in milliseconds
    elapsed_ms: f32,
    easing: Easing,
}

impl Tween {
    /// Create a new tween, started at time zero
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Start value
    pub fn from(&self) -> f32 {
        self.from
    }

    /// End value
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if the tween has reached its end value
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0 || self.from == self.to
    }

    /// Get current interpolated value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms as f32);
    }
}
