//! DOM feedback layer: the progress bar and pointer spotlight (wasm32 only).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlDivElement, HtmlElement};

#[cfg(target_arch = "wasm32")]
use crate::telemetry::TelemetrySnapshot;

/// Spotlight circle radius in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub(crate) const SPOTLIGHT_RADIUS_PX: u32 = 250;
/// Alpha of the white spotlight centre; fades to transparent at the radius.
#[cfg(target_arch = "wasm32")]
pub(crate) const SPOTLIGHT_ALPHA: f64 = 0.15;
/// Progress bar thickness in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub(crate) const BAR_HEIGHT_PX: u32 = 4;

/// The two fixed-position elements driven by telemetry snapshots.
///
/// The layer owns no listeners and holds no telemetry state: it is a pure
/// writer. [`apply`](FeedbackLayer::apply) maps a snapshot to the bar width
/// and the spotlight gradient, so reapplying the same snapshot is visually
/// a no-op and the last applied snapshot simply stays on screen after the
/// widget unmounts.
#[cfg(target_arch = "wasm32")]
pub struct FeedbackLayer {
    progress_bar: HtmlElement,
    spotlight: HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl FeedbackLayer {
    /// Build both elements and append them to `<body>`.
    ///
    /// The bar hugs the top edge at full width scaled by progress; the
    /// spotlight covers the viewport with `pointer-events: none` so it
    /// never swallows input, and blends with `mix-blend-mode: overlay`.
    /// Returns `None` when there is no document body to attach to.
    pub fn create() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;

        let create_div = || -> Option<HtmlDivElement> {
            document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        };

        let progress_bar = create_div()?;
        let bar_style = progress_bar.style();
        let _ = bar_style.set_property("position", "fixed");
        let _ = bar_style.set_property("top", "0");
        let _ = bar_style.set_property("left", "0");
        let _ = bar_style.set_property("height", &format!("{}px", BAR_HEIGHT_PX));
        let _ = bar_style.set_property("width", "0%");
        let _ = bar_style.set_property(
            "background",
            "linear-gradient(to right, #a855f7, #ec4899, #ef4444)",
        );
        let _ = bar_style.set_property("z-index", "50");

        let spotlight = create_div()?;
        let spot_style = spotlight.style();
        let _ = spot_style.set_property("position", "fixed");
        let _ = spot_style.set_property("inset", "0");
        let _ = spot_style.set_property("pointer-events", "none");
        let _ = spot_style.set_property("z-index", "30");
        let _ = spot_style.set_property("mix-blend-mode", "overlay");

        let _ = body.append_child(&progress_bar);
        let _ = body.append_child(&spotlight);

        Some(Self {
            progress_bar: progress_bar.into(),
            spotlight: spotlight.into(),
        })
    }

    /// Drive two existing elements instead of creating new ones.
    ///
    /// Only the bar's `width` and the spotlight's `background` are written
    /// on apply; positioning and layering stay whatever the host page set.
    pub fn adopt(progress_bar: HtmlElement, spotlight: HtmlElement) -> Self {
        Self {
            progress_bar,
            spotlight,
        }
    }

    /// Write one snapshot into the DOM.
    pub fn apply(&self, snapshot: &TelemetrySnapshot) {
        let _ = self
            .progress_bar
            .style()
            .set_property("width", &format!("{}%", snapshot.scroll_progress));
        let _ = self.spotlight.style().set_property(
            "background",
            &Self::spotlight_gradient(snapshot.pointer.x, snapshot.pointer.y),
        );
    }

    /// CSS radial gradient centred on the pointer.
    fn spotlight_gradient(x: i32, y: i32) -> String {
        format!(
            "radial-gradient(circle {}px at {}px {}px, rgba(255, 255, 255, {}), transparent)",
            SPOTLIGHT_RADIUS_PX, x, y, SPOTLIGHT_ALPHA
        )
    }

    /// The element whose width tracks scroll progress.
    pub fn progress_bar(&self) -> &HtmlElement {
        &self.progress_bar
    }

    /// The element whose background tracks the pointer.
    pub fn spotlight(&self) -> &HtmlElement {
        &self.spotlight
    }
}
