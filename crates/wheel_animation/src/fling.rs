//! Inertial fling with exponential velocity decay
//!
//! Velocity decays as `v(t) = v0 * e^(-k t)`. Position is integrated in
//! closed form per step, so the travelled distance does not depend on the
//! frame rate. The fling ends when the velocity falls under a threshold or
//! when the position reaches one of its bounds.

use serde::{Deserialize, Serialize};

/// Configuration for fling deceleration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlingConfig {
    /// Decay constant `k` in 1/s (higher = stops sooner)
    pub decay: f32,
    /// Velocity under which the fling is considered stopped (pixels/second)
    pub min_velocity: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay: 5.0,
            min_velocity: 10.0,
        }
    }
}

/// A running fling
#[derive(Debug, Clone)]
pub struct Fling {
    position: f32,
    /// Current velocity (pixels per second)
    velocity: f32,
    min: f32,
    max: f32,
    config: FlingConfig,
    finished: bool,
}

impl Fling {
    /// Launch a fling from `start` with `velocity`, confined to `[min, max]`
    pub fn new(start: f32, velocity: f32, min: f32, max: f32, config: FlingConfig) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let finished = !velocity.is_finite() || velocity.abs() < config.min_velocity;
        Self {
            position: start,
            velocity: if velocity.is_finite() { velocity } else { 0.0 },
            min,
            max,
            config,
            finished,
        }
    }

    /// Current position
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity (pixels per second)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether the fling has come to rest
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Where the fling would come to rest if left alone
    pub fn final_position(&self) -> f32 {
        if self.finished || self.config.decay <= 0.0 {
            return self.position;
        }
        (self.position + self.velocity / self.config.decay).clamp(self.min, self.max)
    }

    /// Advance by `dt` seconds
    ///
    /// Returns true while the fling is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        if dt <= 0.0 {
            return true;
        }

        let k = self.config.decay.max(f32::EPSILON);
        let factor = (-k * dt).exp();
        self.position += self.velocity / k * (1.0 - factor);
        self.velocity *= factor;

        if self.position >= self.max && self.velocity >= 0.0 {
            self.position = self.max;
            self.stop();
        } else if self.position <= self.min && self.velocity <= 0.0 {
            self.position = self.min;
            self.stop();
        } else if self.velocity.abs() < self.config.min_velocity {
            self.stop();
        }

        !self.finished
    }

    fn stop(&mut self) {
        self.velocity = 0.0;
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fling_decelerates_and_stops() {
        let mut fling = Fling::new(0.0, 1000.0, -10_000.0, 10_000.0, FlingConfig::default());
        let v0 = fling.velocity();
        fling.step(1.0 / 60.0);
        assert!(fling.velocity() < v0);
        assert!(fling.position() > 0.0);

        for _ in 0..600 {
            if !fling.step(1.0 / 60.0) {
                break;
            }
        }
        assert!(fling.is_finished());
        // v0 / k = 200 px total travel; cut off slightly early by min_velocity
        assert!(fling.position() > 195.0 && fling.position() <= 200.0);
    }

    #[test]
    fn test_fling_distance_independent_of_frame_rate() {
        let mut coarse = Fling::new(0.0, 800.0, -1e6, 1e6, FlingConfig::default());
        let mut fine = coarse.clone();
        coarse.step(0.1);
        for _ in 0..10 {
            fine.step(0.01);
        }
        assert!((coarse.position() - fine.position()).abs() < 1e-2);
    }

    #[test]
    fn test_fling_stops_at_bound() {
        let mut fling = Fling::new(0.0, -5000.0, -50.0, 500.0, FlingConfig::default());
        for _ in 0..600 {
            if !fling.step(1.0 / 60.0) {
                break;
            }
        }
        assert!(fling.is_finished());
        assert_eq!(fling.position(), -50.0);
        assert_eq!(fling.velocity(), 0.0);
    }

    #[test]
    fn test_slow_fling_is_finished_immediately() {
        let fling = Fling::new(3.0, 5.0, 0.0, 100.0, FlingConfig::default());
        assert!(fling.is_finished());
        assert_eq!(fling.final_position(), 3.0);
    }

    #[test]
    fn test_final_position_prediction() {
        let fling = Fling::new(0.0, 1000.0, -1e6, 1e6, FlingConfig::default());
        assert!((fling.final_position() - 200.0).abs() < 1e-3);

        let clamped = Fling::new(0.0, 1000.0, -1e6, 120.0, FlingConfig::default());
        assert_eq!(clamped.final_position(), 120.0);
    }
}
