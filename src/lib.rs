//! scrollspot - viewport telemetry and visual feedback for the web
//!
//! Tracks two ambient viewport signals in the browser via WebAssembly and
//! derives a value from each:
//! - scroll position -> scroll progress percentage, painted as a top-edge
//!   progress bar
//! - pointer position -> a spotlight gradient that follows the cursor
//!
//! The derivation core ([`telemetry`]) is target-independent and runs
//! against injected signal sources, so the lifecycle and math are testable
//! without a browser. The DOM wiring lives in [`viewer`].
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { ScrollSpot } from 'scrollspot';
//! await init();
//! const spot = new ScrollSpot();
//! const available = spot.mount(); // { scroll: true, pointer: true }
//! // ... later ...
//! spot.unmount();
//! ```

pub mod error;
pub mod telemetry;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{Result, ScrollSpotError};
pub use telemetry::{
    MetricsReader, PointerPosition, PointerTracker, SignalAvailability, SignalKind, SignalSource,
    SimulatedSource, SimulatedViewport, Subscription, TelemetrySnapshot, ViewportMetrics,
    ViewportTelemetry,
};
#[cfg(target_arch = "wasm32")]
pub use viewer::ScrollSpot;

/// Compute a scroll progress percentage from raw pixel dimensions, without
/// constructing a widget.
///
/// Returns `0.0` when the document is not taller than the viewport, and
/// clamps the result to `[0, 100]` otherwise.
#[must_use]
#[wasm_bindgen(js_name = "computeScrollProgress")]
pub fn compute_scroll_progress(
    scroll_offset: f64,
    document_height: f64,
    viewport_height: f64,
) -> f64 {
    ViewportMetrics::new(scroll_offset, document_height, viewport_height).progress()
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
