//! Text measurement for mark spacing
//!
//! Provides a trait for measuring label widths so the engine can derive the
//! interval between marks without knowing anything about fonts.

/// Text measurement result
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

/// Trait for measuring text dimensions
///
/// Implementations must return finite, non-negative sizes. The engine only
/// consumes the width.
pub trait TextMeasurer: Send + Sync {
    /// Measure a single-line string at the given font size
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;

    /// Measure only the width (convenience method)
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        self.measure(text, font_size).width
    }
}

/// A text measurer that uses estimates
///
/// This is used when no real text measurer is available. Proportional fonts
/// average roughly 0.55 em per glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let char_count = text.chars().count() as f32;

        TextMetrics {
            width: char_count * font_size * 0.55,
            height: font_size * 1.2,
        }
    }
}

/// A measurer with a fixed advance per character, independent of font size
///
/// Gives exact, predictable widths for headless hosts and tests.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceTextMeasurer {
    /// Advance width of every character in pixels
    pub advance: f32,
}

impl MonospaceTextMeasurer {
    /// Create a measurer with the given per-character advance
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for MonospaceTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.advance,
            height: font_size,
        }
    }
}
