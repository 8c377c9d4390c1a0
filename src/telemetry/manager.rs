//! Subscription lifecycle and the telemetry state derived from signals.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::error::{Result, ScrollSpotError};

use super::metrics::MetricsReader;
use super::pointer::{PointerPosition, PointerTracker};
use super::signal::{SignalSource, Subscription};

/// Which channels actually registered at mount time.
///
/// Capability absence is non-fatal: a refused channel is reported here and
/// its derived value keeps its initial default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalAvailability {
    /// The scroll channel registered and is delivering.
    pub scroll: bool,
    /// The pointer-move channel registered and is delivering.
    pub pointer: bool,
}

impl SignalAvailability {
    /// True when both channels registered.
    pub fn is_complete(&self) -> bool {
        self.scroll && self.pointer
    }
}

/// The derived value pair, consistent with the most recent signal at the
/// moment it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    /// Scroll progress percentage in `[0, 100]`.
    pub scroll_progress: f64,
    /// Last observed pointer position.
    pub pointer: PointerPosition,
}

/// State shared between the accessors and the registered signal handlers.
struct TelemetryState {
    progress: f64,
    pointer: PointerTracker,
    on_update: Option<Rc<dyn Fn(TelemetrySnapshot)>>,
}

impl TelemetryState {
    fn new() -> Self {
        Self {
            progress: 0.0,
            pointer: PointerTracker::new(),
            on_update: None,
        }
    }

    fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            scroll_progress: self.progress,
            pointer: self.pointer.current(),
        }
    }
}

/// Owns the two viewport signal subscriptions and the state derived from
/// them.
///
/// An instance is either mounted (handlers registered, state updating) or
/// unmounted (no registrations, state frozen at its last values). The
/// derived values start at `0.0` progress and pointer `(0, 0)` and are
/// readable in both phases.
///
/// [`mount`](ViewportTelemetry::mount) on an already-mounted instance is a
/// programming error and fails loudly; [`unmount`](ViewportTelemetry::unmount)
/// is idempotent because teardown paths in host frameworks can run more
/// than once. Dropping a mounted instance detaches its listeners.
pub struct ViewportTelemetry<S, R> {
    source: S,
    reader: Rc<R>,
    state: Rc<RefCell<TelemetryState>>,
    subscriptions: Vec<Subscription>,
    mounted: bool,
}

impl<S, R> ViewportTelemetry<S, R>
where
    S: SignalSource,
    R: MetricsReader + 'static,
{
    /// Create an unmounted instance over an injected signal source and
    /// metrics reader.
    pub fn new(source: S, reader: R) -> Self {
        Self {
            source,
            reader: Rc::new(reader),
            state: Rc::new(RefCell::new(TelemetryState::new())),
            subscriptions: Vec::new(),
            mounted: false,
        }
    }

    /// Install the callback invoked with a fresh snapshot after every state
    /// update. Replaces any previous callback; may be set before or after
    /// mounting.
    pub fn set_on_update(&self, on_update: impl Fn(TelemetrySnapshot) + 'static) {
        self.state.borrow_mut().on_update = Some(Rc::new(on_update));
    }

    /// Remove the update callback. Signals keep updating the derived state.
    pub fn clear_on_update(&self) {
        self.state.borrow_mut().on_update = None;
    }

    /// Register one handler per signal channel and report which channels
    /// the source accepted.
    ///
    /// A channel the source refuses is recorded as absent and skipped; the
    /// other channel still registers. Fails with
    /// [`InvalidLifecycleState`](ScrollSpotError::InvalidLifecycleState)
    /// if the instance is already mounted, before touching the source.
    pub fn mount(&mut self) -> Result<SignalAvailability> {
        if self.mounted {
            return Err(ScrollSpotError::InvalidLifecycleState);
        }

        let scroll_handler: Box<dyn FnMut()> = {
            let state = Rc::clone(&self.state);
            let reader = Rc::clone(&self.reader);
            Box::new(move || {
                // Geometry is re-read on every signal: reflow can change
                // the document height between events.
                let metrics = reader.read();
                let (snapshot, on_update) = {
                    let mut state = state.borrow_mut();
                    state.progress = metrics.progress();
                    (state.snapshot(), state.on_update.clone())
                };
                // Borrow is released before the callback runs; it may
                // re-enter the accessors.
                if let Some(on_update) = on_update {
                    on_update(snapshot);
                }
            })
        };
        let scroll = match self.source.subscribe_scroll(scroll_handler) {
            Ok(subscription) => {
                self.subscriptions.push(subscription);
                true
            }
            Err(_) => false,
        };

        let pointer_handler: Box<dyn FnMut(i32, i32)> = {
            let state = Rc::clone(&self.state);
            Box::new(move |x, y| {
                let (snapshot, on_update) = {
                    let mut state = state.borrow_mut();
                    state.pointer.update(x, y);
                    (state.snapshot(), state.on_update.clone())
                };
                if let Some(on_update) = on_update {
                    on_update(snapshot);
                }
            })
        };
        let pointer = match self.source.subscribe_pointer_move(pointer_handler) {
            Ok(subscription) => {
                self.subscriptions.push(subscription);
                true
            }
            Err(_) => false,
        };

        self.mounted = true;
        Ok(SignalAvailability { scroll, pointer })
    }

    /// Detach every listener registered at mount time, using the handles
    /// retained from registration. Idempotent: a no-op when unmounted.
    pub fn unmount(&mut self) {
        for mut subscription in self.subscriptions.drain(..) {
            subscription.detach();
        }
        self.mounted = false;
    }

    /// Whether the instance currently holds registrations.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current scroll progress percentage in `[0, 100]`; `0.0` until the
    /// first scroll signal.
    pub fn scroll_progress(&self) -> f64 {
        self.state.borrow().progress
    }

    /// Last observed pointer position; `(0, 0)` until the first
    /// pointer-move signal.
    pub fn pointer_position(&self) -> PointerPosition {
        self.state.borrow().pointer.current()
    }

    /// Both derived values as one consistent pair.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.state.borrow().snapshot()
    }
}
