//! In-memory signal source and viewport for driving the telemetry core
//! outside a browser: native tests, benches, and the trace CLI.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{Result, ScrollSpotError};

use super::metrics::{MetricsReader, ViewportMetrics};
use super::signal::{SignalKind, SignalSource, Subscription};

/// Listener registry for one simulated source.
#[derive(Default)]
struct Registry {
    next_id: u64,
    scroll: Vec<(u64, Box<dyn FnMut()>)>,
    pointer: Vec<(u64, Box<dyn FnMut(i32, i32)>)>,
    deny_scroll: bool,
    deny_pointer: bool,
}

/// An in-memory [`SignalSource`] with explicit dispatch.
///
/// Cloning yields another handle to the same source, so one handle can be
/// handed to the telemetry core while the original keeps emitting signals.
/// Unrelated listeners may coexist on one source, mirroring the shared
/// ambient source the core must tolerate.
#[derive(Clone, Default)]
pub struct SimulatedSource {
    registry: Rc<RefCell<Registry>>,
}

impl SimulatedSource {
    /// Create a source that accepts both channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse future registrations on `kind`, simulating an environment
    /// without that capability. Existing registrations keep delivering.
    pub fn deny(&self, kind: SignalKind) {
        let mut registry = self.registry.borrow_mut();
        match kind {
            SignalKind::Scroll => registry.deny_scroll = true,
            SignalKind::PointerMove => registry.deny_pointer = true,
        }
    }

    /// Emit one scroll signal to every registered handler, in registration
    /// order.
    ///
    /// Dispatch runs under the registry borrow: handlers must not subscribe
    /// or detach on this source re-entrantly.
    pub fn emit_scroll(&self) {
        for (_, handler) in &mut self.registry.borrow_mut().scroll {
            handler();
        }
    }

    /// Emit one pointer-move signal to every registered handler.
    pub fn emit_pointer_move(&self, x: i32, y: i32) {
        for (_, handler) in &mut self.registry.borrow_mut().pointer {
            handler(x, y);
        }
    }

    /// Number of live registrations on `kind`.
    pub fn listener_count(&self, kind: SignalKind) -> usize {
        let registry = self.registry.borrow();
        match kind {
            SignalKind::Scroll => registry.scroll.len(),
            SignalKind::PointerMove => registry.pointer.len(),
        }
    }
}

impl SignalSource for SimulatedSource {
    fn subscribe_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Subscription> {
        let mut registry = self.registry.borrow_mut();
        if registry.deny_scroll {
            return Err(ScrollSpotError::CapabilityAbsent(SignalKind::Scroll));
        }
        let id = registry.next_id;
        registry.next_id += 1;
        registry.scroll.push((id, handler));

        let registry = Rc::clone(&self.registry);
        Ok(Subscription::new(SignalKind::Scroll, move || {
            registry.borrow_mut().scroll.retain(|(entry, _)| *entry != id);
        }))
    }

    fn subscribe_pointer_move(&self, handler: Box<dyn FnMut(i32, i32)>) -> Result<Subscription> {
        let mut registry = self.registry.borrow_mut();
        if registry.deny_pointer {
            return Err(ScrollSpotError::CapabilityAbsent(SignalKind::PointerMove));
        }
        let id = registry.next_id;
        registry.next_id += 1;
        registry.pointer.push((id, handler));

        let registry = Rc::clone(&self.registry);
        Ok(Subscription::new(SignalKind::PointerMove, move || {
            registry.borrow_mut().pointer.retain(|(entry, _)| *entry != id);
        }))
    }
}

/// Settable viewport geometry implementing [`MetricsReader`].
///
/// Cloning yields another handle to the same geometry, so a test or script
/// can reposition the viewport while the telemetry core reads it.
#[derive(Clone, Default)]
pub struct SimulatedViewport {
    metrics: Rc<Cell<ViewportMetrics>>,
}

impl SimulatedViewport {
    /// Create a viewport at scroll offset `0.0` with the given heights.
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        let viewport = Self::default();
        viewport.set_geometry(document_height, viewport_height);
        viewport
    }

    /// Replace the document and viewport heights, keeping the offset.
    pub fn set_geometry(&self, document_height: f64, viewport_height: f64) {
        let mut metrics = self.metrics.get();
        metrics.document_height = document_height;
        metrics.viewport_height = viewport_height;
        self.metrics.set(metrics);
    }

    /// Move the simulated scroll position.
    pub fn set_scroll_offset(&self, offset: f64) {
        let mut metrics = self.metrics.get();
        metrics.scroll_offset = offset;
        self.metrics.set(metrics);
    }
}

impl MetricsReader for SimulatedViewport {
    fn read(&self) -> ViewportMetrics {
        self.metrics.get()
    }
}
