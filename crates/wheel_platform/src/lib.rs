//! Wheel Platform Abstraction Layer
//!
//! This crate provides the host-facing traits and types the wheel picker
//! engine consumes: single-pointer input events, the host callbacks for
//! redraw / gesture capture / click feedback, and text measurement.
//!
//! # Architecture
//!
//! The engine never talks to a window system directly. Hosts adapt their
//! native events and services through:
//!
//! - [`PointerEvent`] - Down / Moved / Up / Cancelled with timestamps
//! - [`WheelHost`] - Redraw requests and interaction side effects
//! - [`TextMeasurer`] - Pixel width of label text at a given font size
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wheel_platform::prelude::*;
//!
//! struct MyHost { window: winit::window::Window }
//!
//! impl WheelHost for MyHost {
//!     fn request_redraw(&self) {
//!         self.window.request_redraw();
//!     }
//! }
//!
//! let host: Arc<dyn WheelHost> = Arc::new(MyHost { window });
//! let measurer: Arc<dyn TextMeasurer> = Arc::new(EstimatedTextMeasurer);
//! ```

mod host;
mod input;
mod text;

// Re-export all public types
pub use host::{NoopHost, RecordingHost, WheelHost};
pub use input::PointerEvent;
pub use text::{EstimatedTextMeasurer, MonospaceTextMeasurer, TextMeasurer, TextMetrics};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::host::{NoopHost, RecordingHost, WheelHost};
    pub use crate::input::PointerEvent;
    pub use crate::text::{
        EstimatedTextMeasurer, MonospaceTextMeasurer, TextMeasurer, TextMetrics,
    };
}
