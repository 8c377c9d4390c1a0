//! Signal source abstraction and subscription handles.
//!
//! The ambient signal source (the window, in a browser) is shared,
//! externally-owned state that the telemetry core never touches directly.
//! It is injected as a [`SignalSource`] capability, which keeps the
//! subscription lifecycle testable against an in-memory source.

use std::fmt;

use crate::error::Result;

/// The two signal channels the telemetry core observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// The viewport scrolled. Carries no payload; geometry must be
    /// re-queried.
    Scroll,
    /// The pointer moved. Carries the new `(x, y)` viewport position.
    PointerMove,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Scroll => f.write_str("scroll"),
            SignalKind::PointerMove => f.write_str("pointer-move"),
        }
    }
}

/// Handle to one live listener registration.
///
/// The handle owns the detach thunk produced at registration time, and
/// that thunk captures the exact callback artifact that was registered.
/// Signal sources compare callbacks by identity, so re-declaring an
/// equivalent callback at removal time would silently leave the original
/// registered; teardown must present the same one.
///
/// [`detach`](Subscription::detach) is idempotent, and dropping a handle
/// that is still attached detaches it.
pub struct Subscription {
    kind: SignalKind,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a detach thunk. The thunk owns the registered callback and
    /// removes exactly that callback from the source.
    pub fn new(kind: SignalKind, detach: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            detach: Some(Box::new(detach)),
        }
    }

    /// The channel this handle is bound to.
    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Whether the registration is still live.
    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
    }

    /// Remove the registered listener. Only the first call has an effect.
    pub fn detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A source of viewport signals that handlers can be registered against.
///
/// Registration hands ownership of the handler to the source and returns
/// the [`Subscription`] that removes it again. A source that cannot deliver
/// a channel refuses with [`CapabilityAbsent`] instead of registering;
/// callers treat that channel as absent rather than failing.
///
/// Sources are shared: unrelated listeners may coexist on the same source,
/// and an implementation must remove only the listener a handle registered.
///
/// [`CapabilityAbsent`]: crate::error::ScrollSpotError::CapabilityAbsent
pub trait SignalSource {
    /// Register a handler for scroll signals.
    fn subscribe_scroll(&self, handler: Box<dyn FnMut()>) -> Result<Subscription>;

    /// Register a handler for pointer-move signals. The handler receives
    /// `x` and `y` in viewport pixels.
    fn subscribe_pointer_move(&self, handler: Box<dyn FnMut(i32, i32)>) -> Result<Subscription>;
}
