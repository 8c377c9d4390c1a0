//! Window-backed signal source and metrics reader (wasm32 only).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, MouseEvent, Window};

#[cfg(target_arch = "wasm32")]
use crate::error::{Result, ScrollSpotError};
#[cfg(target_arch = "wasm32")]
use crate::telemetry::{
    MetricsReader, SignalKind, SignalSource, Subscription, ViewportMetrics,
};

/// Signal source backed by the window's `scroll` and `mousemove` events.
///
/// Each subscription retains the [`Closure`] it registered, and its detach
/// thunk presents that same closure on removal. The browser matches
/// listeners by function identity, so a removal built around a freshly
/// constructed closure would silently leave the original attached.
#[cfg(target_arch = "wasm32")]
pub struct DomSignalSource {
    window: Option<Window>,
}

#[cfg(target_arch = "wasm32")]
impl DomSignalSource {
    /// Bind to the ambient window, if the environment has one.
    ///
    /// Without a window (worker contexts, detached documents) the source
    /// still constructs; every subscribe call then reports the channel as
    /// absent.
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for DomSignalSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl SignalSource for DomSignalSource {
    fn subscribe_scroll(&self, mut handler: Box<dyn FnMut()>) -> Result<Subscription> {
        let Some(window) = self.window.clone() else {
            return Err(ScrollSpotError::CapabilityAbsent(SignalKind::Scroll));
        };
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            handler();
        }) as Box<dyn FnMut(Event)>);
        if window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return Err(ScrollSpotError::CapabilityAbsent(SignalKind::Scroll));
        }
        // The detach thunk owns the registered closure and removes exactly
        // that function object; the closure's memory is released when the
        // thunk drops it.
        Ok(Subscription::new(SignalKind::Scroll, move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }))
    }

    fn subscribe_pointer_move(
        &self,
        mut handler: Box<dyn FnMut(i32, i32)>,
    ) -> Result<Subscription> {
        let Some(window) = self.window.clone() else {
            return Err(ScrollSpotError::CapabilityAbsent(SignalKind::PointerMove));
        };
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            handler(event.client_x(), event.client_y());
        }) as Box<dyn FnMut(MouseEvent)>);
        if window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return Err(ScrollSpotError::CapabilityAbsent(SignalKind::PointerMove));
        }
        Ok(Subscription::new(SignalKind::PointerMove, move || {
            let _ = window.remove_event_listener_with_callback(
                "mousemove",
                closure.as_ref().unchecked_ref(),
            );
        }))
    }
}

/// Metrics reader that queries the window and document on every read.
///
/// Reads are tolerant: a dimension the environment cannot report comes back
/// as `0.0`, and the progress math treats the resulting non-positive
/// scrollable distance as the page-fits case rather than failing.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DomMetricsReader;

#[cfg(target_arch = "wasm32")]
impl MetricsReader for DomMetricsReader {
    fn read(&self) -> ViewportMetrics {
        let Some(window) = web_sys::window() else {
            return ViewportMetrics::default();
        };
        let scroll_offset = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        ViewportMetrics::new(scroll_offset, document_height, viewport_height)
    }
}
