//! Viewport telemetry core: signal subscriptions and the state derived
//! from them.
//!
//! Everything here is target-independent. The browser-specific pieces (the
//! DOM signal source, the DOM metrics reader, the feedback layer) live in
//! [`crate::viewer`] and are injected into this module as capabilities:
//!
//! - [`ViewportMetrics`] / [`MetricsReader`] — on-demand geometry reads and
//!   the scroll-progress math
//! - [`PointerTracker`] — last observed pointer position
//! - [`SignalSource`] / [`Subscription`] — signal registration and
//!   identity-preserving teardown handles
//! - [`ViewportTelemetry`] — the mount/unmount lifecycle over both
//! - [`SimulatedSource`] / [`SimulatedViewport`] — in-memory stand-ins for
//!   tests, benches, and the trace CLI

mod manager;
mod metrics;
mod pointer;
mod signal;
mod simulated;

pub use manager::{SignalAvailability, TelemetrySnapshot, ViewportTelemetry};
pub use metrics::{MetricsReader, ViewportMetrics};
pub use pointer::{PointerPosition, PointerTracker};
pub use signal::{SignalKind, SignalSource, Subscription};
pub use simulated::{SimulatedSource, SimulatedViewport};
