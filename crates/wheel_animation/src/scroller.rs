//! Scroller: one offset, at most one motion
//!
//! Drives a single horizontal offset with either a fling or a settle tween.
//! The two never run concurrently - starting either one replaces whatever
//! was running. The host polls [`Scroller::tick`] once per frame.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::fling::{Fling, FlingConfig};
use crate::tween::Tween;

// ============================================================================
// Scroller Configuration
// ============================================================================

/// Configuration for scroller motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Fling deceleration
    pub fling: FlingConfig,
    /// Duration of a settle animation in milliseconds
    pub settle_duration_ms: u32,
    /// Easing curve for settle animations
    pub settle_easing: Easing,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            fling: FlingConfig::default(),
            settle_duration_ms: 250,
            settle_easing: Easing::ViscousFluid,
        }
    }
}

// ============================================================================
// Motion State
// ============================================================================

/// Which kind of motion is (or was) running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Inertial fling
    Fling,
    /// Timed settle to a target offset
    Settle,
}

#[derive(Debug, Clone)]
enum Motion {
    Idle,
    Fling(Fling),
    Settle(Tween),
}

/// Result of advancing the scroller by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStep {
    /// Nothing is running
    Idle,
    /// Motion advanced to a new offset and is still running
    Moved(f32),
    /// Motion reached its natural end at this offset
    Finished {
        /// Final offset
        offset: f32,
        /// The motion that finished
        kind: MotionKind,
    },
}

// ============================================================================
// Scroller
// ============================================================================

/// Frame-driven fling / settle simulator for one offset
#[derive(Debug, Clone)]
pub struct Scroller {
    offset: f32,
    motion: Motion,
    config: ScrollerConfig,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(ScrollerConfig::default())
    }
}

impl Scroller {
    /// Create an idle scroller with given config
    pub fn new(config: ScrollerConfig) -> Self {
        Self {
            offset: 0.0,
            motion: Motion::Idle,
            config,
        }
    }

    /// Configuration
    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// Offset computed by the last tick (or the start of the current motion)
    pub fn current_offset(&self) -> f32 {
        self.offset
    }

    /// Check if nothing is running
    pub fn is_finished(&self) -> bool {
        matches!(self.motion, Motion::Idle)
    }

    /// The running motion, if any
    pub fn kind(&self) -> Option<MotionKind> {
        match self.motion {
            Motion::Idle => None,
            Motion::Fling(_) => Some(MotionKind::Fling),
            Motion::Settle(_) => Some(MotionKind::Settle),
        }
    }

    /// Target offset of a running settle
    pub fn settle_target(&self) -> Option<f32> {
        match &self.motion {
            Motion::Settle(tween) => Some(tween.to()),
            _ => None,
        }
    }

    /// Start a fling from `start` with `velocity` (pixels/second), confined to `[min, max]`
    pub fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32) {
        self.force_finished();
        tracing::debug!(
            "Scroller: fling start={:.1} velocity={:.1} bounds=({:.1}, {:.1})",
            start,
            velocity,
            min,
            max
        );
        self.offset = start;
        self.motion = Motion::Fling(Fling::new(start, velocity, min, max, self.config.fling));
    }

    /// Start a settle from `start` to `target` using the configured duration
    pub fn start_scroll(&mut self, start: f32, target: f32) {
        self.start_scroll_with_duration(start, target, self.config.settle_duration_ms);
    }

    /// Start a settle from `start` to `target` over `duration_ms`
    pub fn start_scroll_with_duration(&mut self, start: f32, target: f32, duration_ms: u32) {
        self.force_finished();
        tracing::debug!(
            "Scroller: settle {:.1} -> {:.1} over {}ms",
            start,
            target,
            duration_ms
        );
        self.offset = start;
        self.motion = Motion::Settle(Tween::new(
            start,
            target,
            duration_ms,
            self.config.settle_easing,
        ));
    }

    /// Stop whatever is running, leaving the offset where it is
    ///
    /// Returns the kind of motion that was interrupted.
    pub fn force_finished(&mut self) -> Option<MotionKind> {
        let interrupted = self.kind();
        if let Some(kind) = interrupted {
            tracing::trace!("Scroller: {:?} interrupted at {:.1}", kind, self.offset);
        }
        self.motion = Motion::Idle;
        interrupted
    }

    /// Tick animation by `dt` seconds (called every frame)
    pub fn tick(&mut self, dt: f32) -> ScrollStep {
        let step = match &mut self.motion {
            Motion::Idle => return ScrollStep::Idle,

            Motion::Fling(fling) => {
                let moving = fling.step(dt);
                self.offset = fling.position();
                if moving {
                    ScrollStep::Moved(self.offset)
                } else {
                    ScrollStep::Finished {
                        offset: self.offset,
                        kind: MotionKind::Fling,
                    }
                }
            }

            Motion::Settle(tween) => {
                tween.tick(dt * 1000.0);
                self.offset = tween.value();
                if tween.is_finished() {
                    ScrollStep::Finished {
                        offset: self.offset,
                        kind: MotionKind::Settle,
                    }
                } else {
                    ScrollStep::Moved(self.offset)
                }
            }
        };

        if matches!(step, ScrollStep::Finished { .. }) {
            tracing::debug!("Scroller: finished at {:.1}", self.offset);
            self.motion = Motion::Idle;
        }
        step
    }
}
