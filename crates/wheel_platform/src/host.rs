//! Host abstraction for the side effects a wheel needs from its container

use std::sync::atomic::{AtomicUsize, Ordering};

/// Host abstraction trait
///
/// Implemented by whatever embeds the wheel (a window, a view, a test
/// harness). Only `request_redraw` is required; the interaction hooks
/// default to no-ops for hosts without nested gesture handling or audio.
pub trait WheelHost: Send + Sync {
    /// Request a repaint on the next frame
    fn request_redraw(&self);

    /// Ask ancestors not to steal the current pointer gesture
    ///
    /// Called on every pointer down so a parent scroll container does not
    /// intercept the horizontal drag.
    fn disallow_intercept(&self) {}

    /// Play click feedback (sound or haptic) for a tap selection
    fn play_click(&self) {}
}

/// A host that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl WheelHost for NoopHost {
    fn request_redraw(&self) {}
}

/// A host that counts the requests it receives
///
/// Useful for headless hosts and tests that need to observe how often the
/// engine asked for a repaint or fired feedback.
#[derive(Debug, Default)]
pub struct RecordingHost {
    redraws: AtomicUsize,
    intercept_requests: AtomicUsize,
    clicks: AtomicUsize,
}

impl RecordingHost {
    /// Create a host with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of redraw requests received
    pub fn redraws(&self) -> usize {
        self.redraws.load(Ordering::Relaxed)
    }

    /// Number of disallow-intercept requests received
    pub fn intercept_requests(&self) -> usize {
        self.intercept_requests.load(Ordering::Relaxed)
    }

    /// Number of click feedback requests received
    pub fn clicks(&self) -> usize {
        self.clicks.load(Ordering::Relaxed)
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.redraws.store(0, Ordering::Relaxed);
        self.intercept_requests.store(0, Ordering::Relaxed);
        self.clicks.store(0, Ordering::Relaxed);
    }
}

impl WheelHost for RecordingHost {
    fn request_redraw(&self) {
        self.redraws.fetch_add(1, Ordering::Relaxed);
    }

    fn disallow_intercept(&self) {
        self.intercept_requests.fetch_add(1, Ordering::Relaxed);
    }

    fn play_click(&self) {
        self.clicks.fetch_add(1, Ordering::Relaxed);
    }
}
