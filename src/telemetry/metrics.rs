//! Viewport geometry reads and scroll-progress derivation.

use serde::Serialize;

/// One ephemeral read of viewport geometry.
///
/// Always queried fresh when progress is recomputed — content reflow
/// (images loading, fonts swapping) can change the document height
/// independently of scroll events, so reads are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewportMetrics {
    /// Vertical scroll offset in pixels (`window.scrollY`).
    pub scroll_offset: f64,
    /// Full document height in pixels, including the off-screen part
    /// (`document.documentElement.scrollHeight`).
    pub document_height: f64,
    /// Height of the visible viewport in pixels (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ViewportMetrics {
    /// Create a metrics read from raw pixel values.
    pub fn new(scroll_offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            document_height,
            viewport_height,
        }
    }

    /// Total scrollable distance: document height minus viewport height.
    ///
    /// Zero or negative when the page is shorter than the viewport or not
    /// yet laid out.
    pub fn scrollable_distance(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Percentage of the scrollable distance already traversed, in `[0, 100]`.
    ///
    /// A non-positive scrollable distance is a defined case and yields `0.0`
    /// (guards the division). The result is clamped even though the formula
    /// stays in range for consistent inputs: a read taken mid-reflow can
    /// transiently report a scroll offset past the scrollable distance.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable_distance();
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_offset / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

/// On-demand reader of ambient viewport geometry.
///
/// Pure query, no stored state. Implementations never fail: a dimension the
/// environment cannot report defaults to `0.0`, which the progress math
/// handles explicitly.
pub trait MetricsReader {
    /// Read the current viewport geometry.
    fn read(&self) -> ViewportMetrics;
}
