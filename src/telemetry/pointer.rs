//! Pointer position tracking.

use serde::Serialize;

/// Last observed pointer location, in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointerPosition {
    /// Horizontal offset from the viewport's left edge (`clientX`).
    pub x: i32,
    /// Vertical offset from the viewport's top edge (`clientY`).
    pub y: i32,
}

impl PointerPosition {
    /// Create a position from client coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Holds the most recently observed pointer position.
///
/// Updates replace the stored pair wholesale; there is no merging of
/// partial coordinates and no range validation. Coordinates outside the
/// viewport (negative, or past its far edges) pass through unchanged — the
/// consumer's rendering degrades gracefully there.
#[derive(Debug, Default)]
pub struct PointerTracker {
    current: PointerPosition,
}

impl PointerTracker {
    /// Create a tracker at the initial position `(0, 0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly observed position. Last write wins.
    pub fn update(&mut self, x: i32, y: i32) {
        self.current = PointerPosition { x, y };
    }

    /// The most recently observed position, `(0, 0)` before any signal.
    pub fn current(&self) -> PointerPosition {
        self.current
    }
}
