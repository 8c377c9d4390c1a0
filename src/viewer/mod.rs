//! Browser entry point: the WASM-exported `ScrollSpot` widget.
//!
//! This module wires the telemetry core to a real page:
//! - window `scroll` / `mousemove` listeners as the signal source
//! - fresh window and document geometry queries as the metrics reader
//! - two fixed-position elements (progress bar, pointer spotlight) as the
//!   render target
//!
//! The feedback elements are created and updated automatically - no manual
//! JavaScript wiring is required beyond constructing the widget and calling
//! `mount()`.

mod dom;
mod feedback;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomMetricsReader, DomSignalSource};
#[cfg(target_arch = "wasm32")]
pub use feedback::FeedbackLayer;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

#[cfg(target_arch = "wasm32")]
use crate::telemetry::{MetricsReader, ViewportTelemetry};

/// The viewport telemetry widget exported to JavaScript.
///
/// A `ScrollSpot` is either mounted (window listeners registered, feedback
/// elements updating) or unmounted. `mount()` on a mounted widget throws;
/// `unmount()` is always safe. Dropping a mounted widget (or letting the JS
/// garbage collector free it) detaches its listeners.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct ScrollSpot {
    telemetry: ViewportTelemetry<DomSignalSource, DomMetricsReader>,
    layer: Rc<FeedbackLayer>,
    render_callback: Rc<RefCell<Option<Function>>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl ScrollSpot {
    /// Create a widget that builds its own feedback elements on `<body>`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ScrollSpot, JsValue> {
        console_error_panic_hook::set_once();

        let layer = FeedbackLayer::create()
            .ok_or_else(|| JsValue::from_str("document has no <body> to attach to"))?;
        Ok(Self::with_layer(layer))
    }

    /// Create a widget that drives two elements the host page already owns:
    /// a progress bar and a spotlight overlay.
    #[wasm_bindgen(js_name = "withElements")]
    pub fn with_elements(progress_bar: HtmlElement, spotlight: HtmlElement) -> ScrollSpot {
        console_error_panic_hook::set_once();

        Self::with_layer(FeedbackLayer::adopt(progress_bar, spotlight))
    }

    fn with_layer(layer: FeedbackLayer) -> ScrollSpot {
        let layer = Rc::new(layer);
        let render_callback: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));

        let telemetry = ViewportTelemetry::new(DomSignalSource::new(), DomMetricsReader);
        {
            let layer = Rc::clone(&layer);
            let render_callback = Rc::clone(&render_callback);
            telemetry.set_on_update(move |snapshot| {
                layer.apply(&snapshot);
                // Clone the callback out of the cell before the call; the
                // callback may reconfigure the widget.
                let callback = render_callback.borrow().clone();
                if let Some(callback) = callback {
                    if let Ok(value) = serde_wasm_bindgen::to_value(&snapshot) {
                        let _ = callback.call1(&JsValue::NULL, &value);
                    }
                }
            });
        }

        ScrollSpot {
            telemetry,
            layer,
            render_callback,
        }
    }

    /// Register the window listeners and paint the initial state.
    ///
    /// Returns `{ scroll, pointer }` booleans describing which channels the
    /// environment delivered; a missing channel leaves its feedback at the
    /// initial value rather than failing. Throws if already mounted.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<JsValue, JsValue> {
        let availability = self.telemetry.mount()?;

        // First paint shows the initial values; the signal handlers take
        // over from here.
        self.layer.apply(&self.telemetry.snapshot());

        serde_wasm_bindgen::to_value(&availability).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove the window listeners registered by `mount()`.
    ///
    /// Safe to call repeatedly or before mounting. The last painted state
    /// stays on screen; it just stops updating.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.telemetry.unmount();
    }

    /// Whether window listeners are currently registered.
    #[wasm_bindgen(js_name = "isMounted")]
    pub fn is_mounted(&self) -> bool {
        self.telemetry.is_mounted()
    }

    /// Current scroll progress percentage in `[0, 100]`.
    #[wasm_bindgen(js_name = "scrollProgress")]
    pub fn scroll_progress(&self) -> f64 {
        self.telemetry.scroll_progress()
    }

    /// Last observed pointer position as `{ x, y }`.
    #[wasm_bindgen(js_name = "pointerPosition")]
    pub fn pointer_position(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.telemetry.pointer_position())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Both derived values as `{ scroll_progress, pointer: { x, y } }`.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.telemetry.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Fresh geometry read as `{ scroll_offset, document_height,
    /// viewport_height }`, handy for debugging why progress sits at zero.
    #[wasm_bindgen(js_name = "viewportMetrics")]
    pub fn viewport_metrics(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&DomMetricsReader.read())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Install a JavaScript callback invoked with each fresh snapshot after
    /// the feedback layer has been updated. Pass `null` to clear it.
    #[wasm_bindgen(js_name = "setRenderCallback")]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        *self.render_callback.borrow_mut() = callback;
    }
}
