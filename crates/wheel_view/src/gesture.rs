//! Pointer gesture detection
//!
//! Turns raw single-pointer events into the gestures the wheel reacts to:
//! drag deltas, flings, taps and plain releases.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use wheel_platform::PointerEvent;

/// Samples older than this are ignored by the velocity estimate (ms)
const VELOCITY_SAMPLE_WINDOW_MS: u64 = 90;

/// Without new samples for this long the estimate decays to zero (ms)
const VELOCITY_IDLE_CUTOFF_MS: u64 = 65;

// ============================================================================
// Gesture Configuration
// ============================================================================

/// Thresholds for gesture classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Movement (pixels) before a press turns into a drag
    pub touch_slop: f32,
    /// Release velocity (pixels/second) needed to fling
    pub min_fling_velocity: f32,
    /// Fling velocities are capped at this (pixels/second)
    pub max_fling_velocity: f32,
    /// A press held this long without moving is no longer a tap
    pub long_press_timeout_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8000.0,
            long_press_timeout_ms: 500,
        }
    }
}

impl GestureConfig {
    /// Fix negative or inverted thresholds
    pub fn sanitized(mut self) -> Self {
        if !(self.touch_slop >= 0.0) {
            tracing::warn!("GestureConfig: touch_slop {} raised to 0.0", self.touch_slop);
            self.touch_slop = 0.0;
        }
        if !(self.min_fling_velocity >= 0.0) {
            tracing::warn!(
                "GestureConfig: min_fling_velocity {} raised to 0.0",
                self.min_fling_velocity
            );
            self.min_fling_velocity = 0.0;
        }
        if !(self.max_fling_velocity >= self.min_fling_velocity) {
            tracing::warn!(
                "GestureConfig: max_fling_velocity {} raised to {}",
                self.max_fling_velocity,
                self.min_fling_velocity
            );
            self.max_fling_velocity = self.min_fling_velocity;
        }
        self
    }
}

// ============================================================================
// Velocity Tracking
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct VelocitySample {
    time_ms: u64,
    /// Pixels per second
    velocity: f32,
}

/// Horizontal pointer velocity estimator
///
/// Keeps per-move velocities from the last 90 ms, averages them with newer
/// samples weighted more, and fades the result out when the pointer has been
/// still before release.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[VelocitySample; 16]>,
    last: Option<(f32, u64)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer at `x` at `time_ms`
    pub fn add(&mut self, x: f32, time_ms: u64) {
        let Some((last_x, last_time)) = self.last else {
            self.last = Some((x, time_ms));
            return;
        };
        // Same-timestamp moves are folded into the next sample
        if time_ms <= last_time {
            return;
        }

        let dt = (time_ms - last_time) as f32 / 1000.0;
        let velocity = (x - last_x) / dt;
        if velocity.is_finite() {
            self.samples.push(VelocitySample { time_ms, velocity });
        }
        self.last = Some((x, time_ms));
        self.prune(time_ms);
    }

    /// Estimated velocity in pixels/second at `now_ms`
    pub fn velocity(&mut self, now_ms: u64) -> f32 {
        self.prune(now_ms);

        let window = VELOCITY_SAMPLE_WINDOW_MS as f32;
        let mut weighted_sum = 0.0f32;
        let mut total_weight = 0.0f32;
        for sample in &self.samples {
            let age = now_ms.saturating_sub(sample.time_ms) as f32;
            let weight = (window - age.min(window)).max(0.0);
            weighted_sum += sample.velocity * weight;
            total_weight += weight;
        }
        if total_weight <= f32::EPSILON {
            return 0.0;
        }

        let idle_ms = self
            .last
            .map(|(_, time)| now_ms.saturating_sub(time))
            .unwrap_or(0);
        let damping = (1.0 - idle_ms as f32 / VELOCITY_IDLE_CUTOFF_MS as f32).clamp(0.0, 1.0);
        weighted_sum / total_weight * damping
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.last = None;
    }

    fn prune(&mut self, now_ms: u64) {
        self.samples
            .retain(|sample| now_ms.saturating_sub(sample.time_ms) <= VELOCITY_SAMPLE_WINDOW_MS);
    }
}

// ============================================================================
// Gesture Detection
// ============================================================================

/// A recognized gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The pointer went down
    Down {
        /// Viewport x of the press
        x: f32,
    },
    /// Drag movement since the last one, positive when the finger moves left
    Scroll {
        distance: f32,
    },
    /// Released while moving fast; finger velocity in pixels/second
    Fling {
        velocity: f32,
    },
    /// Short press without movement
    Tap {
        /// Viewport x of the tap
        x: f32,
    },
    /// Any other release or a cancel
    Release,
}

#[derive(Debug, Clone, Copy)]
struct ActivePointer {
    id: u64,
    down_x: f32,
    down_time_ms: u64,
    last_x: f32,
    dragging: bool,
}

/// Single-pointer gesture detector
#[derive(Debug, Clone, Default)]
pub struct GestureDetector {
    config: GestureConfig,
    active: Option<ActivePointer>,
    tracker: VelocityTracker,
}

impl GestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            active: None,
            tracker: VelocityTracker::new(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Check if a pointer is down
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Check if the active pointer has moved past the touch slop
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|pointer| pointer.dragging)
    }

    /// Forget the active pointer without emitting anything
    pub fn reset(&mut self) {
        self.active = None;
        self.tracker.reset();
    }

    /// Feed one pointer event
    ///
    /// Events from a pointer other than the active one are dropped.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<Gesture> {
        match *event {
            PointerEvent::Down { id, x, time_ms, .. } => {
                if self.active.is_some_and(|pointer| pointer.id != id) {
                    tracing::trace!("GestureDetector: ignoring second pointer {}", id);
                    return None;
                }
                self.tracker.reset();
                self.tracker.add(x, time_ms);
                self.active = Some(ActivePointer {
                    id,
                    down_x: x,
                    down_time_ms: time_ms,
                    last_x: x,
                    dragging: false,
                });
                Some(Gesture::Down { x })
            }

            PointerEvent::Moved { id, x, time_ms, .. } => {
                let slop = self.config.touch_slop;
                let pointer = self.active.as_mut().filter(|pointer| pointer.id == id)?;
                self.tracker.add(x, time_ms);

                if !pointer.dragging {
                    if (x - pointer.down_x).abs() <= slop {
                        return None;
                    }
                    pointer.dragging = true;
                    tracing::trace!("GestureDetector: drag started at x={:.1}", x);
                }

                let distance = pointer.last_x - x;
                pointer.last_x = x;
                Some(Gesture::Scroll { distance })
            }

            PointerEvent::Up { id, x, time_ms, .. } => {
                let pointer = self.active.filter(|pointer| pointer.id == id)?;
                self.active = None;
                self.tracker.add(x, time_ms);

                if pointer.dragging {
                    let velocity = self.tracker.velocity(time_ms);
                    if velocity.abs() >= self.config.min_fling_velocity && velocity.abs() > 0.0 {
                        let max = self.config.max_fling_velocity;
                        return Some(Gesture::Fling {
                            velocity: velocity.clamp(-max, max),
                        });
                    }
                    return Some(Gesture::Release);
                }

                let held_ms = time_ms.saturating_sub(pointer.down_time_ms);
                if held_ms < self.config.long_press_timeout_ms {
                    Some(Gesture::Tap { x })
                } else {
                    tracing::trace!("GestureDetector: long press ({}ms) released", held_ms);
                    Some(Gesture::Release)
                }
            }

            PointerEvent::Cancelled { id } => {
                self.active.filter(|pointer| pointer.id == id)?;
                self.active = None;
                Some(Gesture::Release)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drag from `from` to `to` in `steps` moves, 10ms apart, then lift
    /// together with the last move
    fn drag(detector: &mut GestureDetector, from: f32, to: f32, steps: u32) -> Vec<Gesture> {
        let mut gestures = Vec::new();
        gestures.extend(detector.on_event(&PointerEvent::down(from, 0)));
        for i in 1..=steps {
            let x = from + (to - from) * i as f32 / steps as f32;
            gestures.extend(detector.on_event(&PointerEvent::moved(x, i as u64 * 10)));
        }
        gestures.extend(detector.on_event(&PointerEvent::up(to, steps as u64 * 10)));
        gestures
    }

    #[test]
    fn test_velocity_constant_motion() {
        let mut tracker = VelocityTracker::new();
        for i in 0..6 {
            tracker.add(i as f32 * 10.0, i * 10);
        }
        // 10px every 10ms
        assert!((tracker.velocity(50) - 1000.0).abs() < 1e-2);
    }

    #[test]
    fn test_velocity_decays_when_idle() {
        let mut tracker = VelocityTracker::new();
        for i in 0..4 {
            tracker.add(i as f32 * -5.0, i * 10);
        }
        let moving = tracker.velocity(30);
        assert!(moving < 0.0);
        // half the idle cutoff later the estimate is damped
        let later = tracker.velocity(60);
        assert!(later > moving && later < 0.0);
        // nothing left after the cutoff
        assert_eq!(tracker.velocity(200), 0.0);
    }

    #[test]
    fn test_velocity_same_timestamp_folded() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0.0, 0);
        tracker.add(5.0, 10);
        tracker.add(8.0, 10);
        tracker.add(10.0, 20);
        assert!((tracker.velocity(20) - 500.0).abs() < 1e-2);
    }

    #[test]
    fn test_small_movement_is_a_tap() {
        let mut detector = GestureDetector::default();
        assert_eq!(
            detector.on_event(&PointerEvent::down(100.0, 0)),
            Some(Gesture::Down { x: 100.0 })
        );
        assert_eq!(detector.on_event(&PointerEvent::moved(105.0, 20)), None);
        assert_eq!(
            detector.on_event(&PointerEvent::up(105.0, 80)),
            Some(Gesture::Tap { x: 105.0 })
        );
        assert!(!detector.is_active());
    }

    #[test]
    fn test_long_press_is_not_a_tap() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(100.0, 0));
        assert_eq!(
            detector.on_event(&PointerEvent::up(100.0, 600)),
            Some(Gesture::Release)
        );
    }

    #[test]
    fn test_drag_distances_follow_finger() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(200.0, 0));
        // inside slop
        assert_eq!(detector.on_event(&PointerEvent::moved(195.0, 10)), None);
        // finger moves left -> positive distance
        assert_eq!(
            detector.on_event(&PointerEvent::moved(180.0, 20)),
            Some(Gesture::Scroll { distance: 20.0 })
        );
        assert!(detector.is_dragging());
        assert_eq!(
            detector.on_event(&PointerEvent::moved(190.0, 30)),
            Some(Gesture::Scroll { distance: -10.0 })
        );
    }

    #[test]
    fn test_fast_release_flings() {
        let mut detector = GestureDetector::default();
        let gestures = drag(&mut detector, 300.0, 100.0, 10);
        match gestures.last() {
            Some(Gesture::Fling { velocity }) => {
                // 20px per 10ms to the left
                assert!((*velocity + 2000.0).abs() < 1.0, "velocity {velocity}");
            }
            other => panic!("expected fling, got {other:?}"),
        }
    }

    #[test]
    fn test_fling_velocity_capped() {
        let mut detector = GestureDetector::default();
        let gestures = drag(&mut detector, 0.0, 2000.0, 10);
        assert_eq!(gestures.last(), Some(&Gesture::Fling { velocity: 8000.0 }));
    }

    #[test]
    fn test_slow_release_does_not_fling() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(100.0, 0));
        detector.on_event(&PointerEvent::moved(120.0, 100));
        detector.on_event(&PointerEvent::moved(121.0, 400));
        assert_eq!(
            detector.on_event(&PointerEvent::up(121.0, 600)),
            Some(Gesture::Release)
        );
    }

    #[test]
    fn test_second_pointer_ignored() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::Down {
            id: 1,
            x: 100.0,
            y: 0.0,
            time_ms: 0,
        });
        let second = PointerEvent::Down {
            id: 2,
            x: 300.0,
            y: 0.0,
            time_ms: 5,
        };
        assert_eq!(detector.on_event(&second), None);
        assert_eq!(
            detector.on_event(&PointerEvent::Up {
                id: 2,
                x: 300.0,
                y: 0.0,
                time_ms: 10
            }),
            None
        );
        assert!(detector.is_active());
        assert_eq!(
            detector.on_event(&PointerEvent::Cancelled { id: 1 }),
            Some(Gesture::Release)
        );
        assert!(!detector.is_active());
    }

    #[test]
    fn test_sanitized_config() {
        let config = GestureConfig {
            touch_slop: -1.0,
            min_fling_velocity: 100.0,
            max_fling_velocity: 10.0,
            long_press_timeout_ms: 500,
        }
        .sanitized();
        assert_eq!(config.touch_slop, 0.0);
        assert_eq!(config.max_fling_velocity, 100.0);
    }
}
