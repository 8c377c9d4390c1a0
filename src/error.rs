//! Structured error types for scrollspot.
//!
//! The telemetry core has exactly two failure modes: lifecycle misuse
//! (programmer error, loud) and a missing signal capability (environmental,
//! absorbed by the subscription manager as a degraded channel). Numeric edge
//! cases in the progress math are defined behavior, not errors.

use crate::telemetry::SignalKind;

/// All errors that can occur in scrollspot.
#[derive(Debug, thiserror::Error)]
pub enum ScrollSpotError {
    /// `mount()` was called on an instance that is already mounted.
    /// Indicates a double-initialization or a leaked mount in the caller.
    #[error("telemetry is already mounted")]
    InvalidLifecycleState,

    /// The signal source cannot deliver the given channel. Non-fatal: the
    /// subscription manager reports the channel as unavailable and its
    /// derived value keeps its initial default.
    #[error("signal source does not support {0} events")]
    CapabilityAbsent(SignalKind),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrollSpotError>;

#[cfg(target_arch = "wasm32")]
impl From<ScrollSpotError> for wasm_bindgen::JsValue {
    fn from(e: ScrollSpotError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
