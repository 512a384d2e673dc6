//! Wheel configuration
//!
//! Immutable settings handed to [`WheelView::new`](crate::WheelView::new).
//! Every section has `#[serde(default)]` so a config file only needs the keys
//! it overrides:
//!
//! ```toml
//! spacing_factor = 1.5
//! additional_center_mark = "kg"
//!
//! [theme]
//! highlight_color = 0xFF2196F3
//!
//! [motion]
//! settle_duration_ms = 300
//!
//! [gesture]
//! touch_slop = 12.0
//! ```

use serde::{Deserialize, Serialize};
use wheel_animation::ScrollerConfig;

use crate::error::{Result, WheelError};
use crate::gesture::GestureConfig;

// ============================================================================
// Theme
// ============================================================================

/// Colors (ARGB) and sizes used by a renderer
///
/// The engine only reads `center_text_size` and `text_size` (for spacing);
/// the rest is carried for whatever draws the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelTheme {
    /// Cursor and selected label color
    pub highlight_color: u32,
    /// Color of unselected labels
    pub mark_text_color: u32,
    /// Color of the mark ticks
    pub mark_color: u32,
    /// Font size of the selected label (and of spacing measurement)
    pub center_text_size: f32,
    /// Font size of other labels and of the center annotation
    pub text_size: f32,
    /// Size of the center cursor
    pub cursor_size: f32,
}

impl Default for WheelTheme {
    fn default() -> Self {
        Self {
            highlight_color: 0xFFF7_4C39,
            mark_text_color: 0xFF66_6666,
            mark_color: 0xFFEE_EEEE,
            center_text_size: 22.0,
            text_size: 18.0,
            cursor_size: 18.0,
        }
    }
}

impl WheelTheme {
    /// Highlight color with its alpha reduced, used for marks next to the cursor
    pub fn fade_mark_color(&self) -> u32 {
        self.highlight_color & 0xAAFF_FFFF
    }
}

// ============================================================================
// Wheel Configuration
// ============================================================================

/// Configuration for a [`WheelView`](crate::WheelView)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Interval = widest label * spacing_factor (at least 1.0)
    pub spacing_factor: f32,
    /// Height of a mark relative to the view height (at most 1.0)
    pub mark_ratio: f32,
    /// Measure the fixed probe text instead of the real labels
    pub use_fixed_spacing: bool,
    /// Annotation drawn after the centered label, e.g. a unit
    pub additional_center_mark: Option<String>,
    /// Colors and sizes
    pub theme: WheelTheme,
    /// Fling and settle motion
    pub motion: ScrollerConfig,
    /// Pointer gesture thresholds
    pub gesture: GestureConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spacing_factor: 1.2,
            mark_ratio: 0.7,
            use_fixed_spacing: false,
            additional_center_mark: None,
            theme: WheelTheme::default(),
            motion: ScrollerConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

impl WheelConfig {
    /// Preset that spaces marks by the probe text, so the interval does not
    /// change with the item list
    pub fn fixed_spacing() -> Self {
        Self {
            use_fixed_spacing: true,
            ..Default::default()
        }
    }

    /// Set the center annotation
    pub fn with_additional_center_mark(mut self, mark: impl Into<String>) -> Self {
        self.additional_center_mark = Some(mark.into());
        self
    }

    /// Parse from TOML and sanitize
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: WheelConfig = toml::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Parse from JSON and sanitize
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: WheelConfig =
            serde_json::from_str(text).map_err(|e| WheelError::ConfigParse(e.to_string()))?;
        Ok(config.sanitized())
    }

    /// Pull out-of-range values back into range
    ///
    /// Nothing is rejected; every adjustment is logged.
    pub fn sanitized(mut self) -> Self {
        if !(self.spacing_factor >= 1.0) {
            tracing::warn!(
                "WheelConfig: spacing_factor {} raised to 1.0",
                self.spacing_factor
            );
            self.spacing_factor = 1.0;
        }
        if !(self.mark_ratio <= 1.0) {
            tracing::warn!("WheelConfig: mark_ratio {} lowered to 1.0", self.mark_ratio);
            self.mark_ratio = 1.0;
        }
        if self.mark_ratio < 0.0 {
            tracing::warn!("WheelConfig: mark_ratio {} raised to 0.0", self.mark_ratio);
            self.mark_ratio = 0.0;
        }

        let theme = &mut self.theme;
        for (name, size) in [
            ("center_text_size", &mut theme.center_text_size),
            ("text_size", &mut theme.text_size),
            ("cursor_size", &mut theme.cursor_size),
        ] {
            if !(*size >= 0.0) {
                tracing::warn!("WheelConfig: {} {} raised to 0.0", name, size);
                *size = 0.0;
            }
        }

        let fling = &mut self.motion.fling;
        if !(fling.decay > 0.0) {
            let default = wheel_animation::FlingConfig::default().decay;
            tracing::warn!("WheelConfig: fling decay {} reset to {}", fling.decay, default);
            fling.decay = default;
        }
        if !(fling.min_velocity >= 0.0) {
            tracing::warn!(
                "WheelConfig: fling min_velocity {} raised to 0.0",
                fling.min_velocity
            );
            fling.min_velocity = 0.0;
        }

        self.gesture = self.gesture.sanitized();
        self
    }
}
