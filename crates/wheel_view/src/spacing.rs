//! Mark spacing
//!
//! The distance between two neighbouring marks is derived from the widest
//! label so that labels never overlap.

use wheel_platform::TextMeasurer;

/// Text measured when the labels themselves are not used
pub const SPACING_PROBE: &str = "888888";

/// Result of a spacing computation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    /// Pixel distance between neighbouring marks (may be 0)
    pub interval: f32,
    /// Width of the center annotation at the normal text size
    pub annotation_width: f32,
}

/// Measures labels and produces the mark interval
pub struct SpacingCalculator<'a> {
    measurer: &'a dyn TextMeasurer,
    /// Font size for labels and the probe
    center_text_size: f32,
    /// Font size for the annotation
    text_size: f32,
}

impl<'a> SpacingCalculator<'a> {
    pub fn new(measurer: &'a dyn TextMeasurer, center_text_size: f32, text_size: f32) -> Self {
        Self {
            measurer,
            center_text_size,
            text_size,
        }
    }

    /// Compute the interval for `labels`
    ///
    /// With `use_fixed_probe` set, or no labels at all, [`SPACING_PROBE`]
    /// stands in for the labels. The annotation width is added to the widest
    /// label before scaling by `spacing_factor`.
    pub fn compute<S: AsRef<str>>(
        &self,
        labels: &[S],
        annotation: Option<&str>,
        spacing_factor: f32,
        use_fixed_probe: bool,
    ) -> Spacing {
        let label_width = if use_fixed_probe || labels.is_empty() {
            self.width(SPACING_PROBE, self.center_text_size)
        } else {
            labels
                .iter()
                .map(|label| self.width(label.as_ref(), self.center_text_size))
                .fold(0.0, f32::max)
        };

        let annotation_width = annotation
            .filter(|text| !text.is_empty())
            .map(|text| self.width(text, self.text_size))
            .unwrap_or(0.0);

        let interval = (label_width + annotation_width) * spacing_factor;
        if interval <= 0.0 {
            tracing::warn!(
                "SpacingCalculator: zero interval for {} labels, marks will overlap",
                labels.len()
            );
        }
        Spacing {
            interval: interval.max(0.0),
            annotation_width,
        }
    }

    fn width(&self, text: &str, font_size: f32) -> f32 {
        let width = self.measurer.measure_width(text, font_size);
        if width.is_finite() && width >= 0.0 {
            width
        } else {
            tracing::warn!(
                "SpacingCalculator: measured width {} for {:?} treated as 0",
                width,
                text
            );
            0.0
        }
    }
}
