//! Shared fixtures for the native telemetry tests.
//!
//! Every integration test drives the real core through a simulated signal
//! source and viewport, so the helpers here just bundle the three pieces
//! and keep the driving handles accessible.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]

use scrollspot::{SimulatedSource, SimulatedViewport, ViewportTelemetry};

/// Tolerance for floating-point progress comparisons.
pub const EPSILON: f64 = 1e-9;

/// A telemetry core wired to a simulated source and viewport, with the
/// driving handles still in hand.
pub struct Harness {
    pub source: SimulatedSource,
    pub viewport: SimulatedViewport,
    pub telemetry: ViewportTelemetry<SimulatedSource, SimulatedViewport>,
}

impl Harness {
    /// Move the simulated scroll position and emit one scroll signal.
    pub fn scroll_to(&self, offset: f64) {
        self.viewport.set_scroll_offset(offset);
        self.source.emit_scroll();
    }
}

/// Build an unmounted core over a simulated viewport of the given heights.
pub fn harness(document_height: f64, viewport_height: f64) -> Harness {
    let source = SimulatedSource::new();
    let viewport = SimulatedViewport::new(document_height, viewport_height);
    let telemetry = ViewportTelemetry::new(source.clone(), viewport.clone());
    Harness {
        source,
        viewport,
        telemetry,
    }
}

/// Build a core that is already mounted on both channels.
pub fn mounted(document_height: f64, viewport_height: f64) -> Harness {
    let mut h = harness(document_height, viewport_height);
    let availability = h.telemetry.mount().expect("mount failed");
    assert!(
        availability.is_complete(),
        "simulated source should accept both channels"
    );
    h
}

/// Assert two floats match within [`EPSILON`], with a readable message.
pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{context}: expected {expected}, got {actual}"
    );
}
