//! Wheel Animation System
//!
//! Frame-driven scroll motion for a single horizontal offset.
//!
//! # Features
//!
//! - **Fling**: Exponential velocity decay, integrated exactly per tick
//! - **Settle**: Fixed-duration tween to a target offset with easing
//! - **Scroller**: Runs at most one of the two; starting one cancels the other
//! - **Cooperative**: No threads, no timers - the host polls `tick(dt)` once per frame

pub mod easing;
pub mod fling;
pub mod scroller;
pub mod tween;

pub use easing::Easing;
pub use fling::{Fling, FlingConfig};
pub use scroller::{MotionKind, ScrollStep, Scroller, ScrollerConfig};
pub use tween::Tween;
