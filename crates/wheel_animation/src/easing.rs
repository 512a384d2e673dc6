//! Easing curves for timed scroll animations

use serde::{Deserialize, Serialize};

/// Scale applied to the input of the viscous-fluid curve
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// Easing functions mapping linear progress (0.0 to 1.0) to eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseInOut,
    /// Fast start with a long, fluid tail (platform scroller default)
    #[default]
    ViscousFluid,
}

impl Easing {
    /// Apply easing to a value
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseOutCubic => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::ViscousFluid => viscous_fluid(t) / viscous_fluid(1.0),
        }
    }
}

fn viscous_fluid(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e, the value of the first segment at x == 1
        let start = 0.367_879_44;
        let x = 1.0 - (1.0 - x).exp();
        start + x * (1.0 - start)
    }
}
