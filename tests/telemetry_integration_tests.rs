//! End-to-end telemetry tests
//!
//! Whole-core scenarios: signal-to-snapshot flow, channel independence,
//! capability absence, fresh geometry reads, and the render callback.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use scrollspot::{PointerPosition, SignalKind, TelemetrySnapshot};

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn scroll_and_pointer_signals_are_independent() {
    // Viewport 800, document 2800: scrollable distance 2000.
    let h = common::mounted(2800.0, 800.0);

    h.scroll_to(500.0);
    common::assert_close(h.telemetry.scroll_progress(), 25.0, "progress at offset 500");

    h.source.emit_pointer_move(400, 300);
    assert_eq!(h.telemetry.pointer_position(), PointerPosition::new(400, 300));
    // The pointer update must not have disturbed the scroll progress.
    common::assert_close(h.telemetry.scroll_progress(), 25.0, "progress after pointer move");

    let snapshot = h.telemetry.snapshot();
    common::assert_close(snapshot.scroll_progress, 25.0, "snapshot progress");
    assert_eq!(snapshot.pointer, PointerPosition::new(400, 300));
}

#[test]
fn every_signal_triggers_a_full_recompute() {
    // No coalescing: three scroll signals mean three recomputes, each from
    // a fresh read.
    let h = common::mounted(2800.0, 800.0);

    h.scroll_to(200.0);
    common::assert_close(h.telemetry.scroll_progress(), 10.0, "first signal");
    h.scroll_to(1000.0);
    common::assert_close(h.telemetry.scroll_progress(), 50.0, "second signal");
    h.scroll_to(400.0);
    common::assert_close(h.telemetry.scroll_progress(), 20.0, "third signal");
}

// ============================================================================
// Fresh-read semantics
// ============================================================================

#[test]
fn geometry_changes_are_picked_up_without_remounting() {
    // Content reflow (images loading) grows the document between signals;
    // the next recompute must see the new geometry.
    let h = common::mounted(2800.0, 800.0);

    h.scroll_to(1000.0);
    common::assert_close(h.telemetry.scroll_progress(), 50.0, "before reflow");

    h.viewport.set_geometry(4800.0, 800.0);
    h.source.emit_scroll();
    common::assert_close(h.telemetry.scroll_progress(), 25.0, "after reflow");
}

#[test]
fn document_shrinking_below_viewport_resets_progress_to_zero() {
    let h = common::mounted(2800.0, 800.0);
    h.scroll_to(2000.0);
    common::assert_close(h.telemetry.scroll_progress(), 100.0, "before shrink");

    h.viewport.set_geometry(600.0, 800.0);
    h.source.emit_scroll();
    assert_eq!(h.telemetry.scroll_progress(), 0.0);
}

// ============================================================================
// Capability absence
// ============================================================================

#[test]
fn refused_scroll_channel_degrades_without_failing() {
    let mut h = common::harness(2800.0, 800.0);
    h.source.deny(SignalKind::Scroll);

    let availability = h.telemetry.mount().expect("mount must not fail on refusal");
    assert!(!availability.scroll);
    assert!(availability.pointer);
    assert!(!availability.is_complete());

    // The live channel still delivers; the absent one keeps its default.
    h.source.emit_pointer_move(50, 60);
    h.scroll_to(1000.0);
    assert_eq!(h.telemetry.pointer_position(), PointerPosition::new(50, 60));
    assert_eq!(h.telemetry.scroll_progress(), 0.0);
}

#[test]
fn refused_pointer_channel_degrades_without_failing() {
    let mut h = common::harness(2800.0, 800.0);
    h.source.deny(SignalKind::PointerMove);

    let availability = h.telemetry.mount().expect("mount must not fail on refusal");
    assert!(availability.scroll);
    assert!(!availability.pointer);

    h.scroll_to(500.0);
    h.source.emit_pointer_move(50, 60);
    common::assert_close(h.telemetry.scroll_progress(), 25.0, "live scroll channel");
    assert_eq!(h.telemetry.pointer_position(), PointerPosition::new(0, 0));
}

#[test]
fn fully_refused_source_still_mounts_and_unmounts() {
    let mut h = common::harness(2800.0, 800.0);
    h.source.deny(SignalKind::Scroll);
    h.source.deny(SignalKind::PointerMove);

    let availability = h.telemetry.mount().expect("mount must not fail");
    assert!(!availability.scroll);
    assert!(!availability.pointer);
    assert!(h.telemetry.is_mounted());

    h.telemetry.unmount();
    assert!(!h.telemetry.is_mounted());
}

// ============================================================================
// Render callback
// ============================================================================

#[test]
fn callback_receives_a_consistent_snapshot_per_signal() {
    let h = common::mounted(2800.0, 800.0);

    let passes: Rc<RefCell<Vec<TelemetrySnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&passes);
    h.telemetry
        .set_on_update(move |snapshot| sink.borrow_mut().push(snapshot));

    h.scroll_to(500.0);
    h.source.emit_pointer_move(400, 300);

    let passes = passes.borrow();
    assert_eq!(passes.len(), 2, "one render pass per signal");
    common::assert_close(passes[0].scroll_progress, 25.0, "first pass progress");
    assert_eq!(passes[0].pointer, PointerPosition::new(0, 0));
    common::assert_close(passes[1].scroll_progress, 25.0, "second pass progress");
    assert_eq!(passes[1].pointer, PointerPosition::new(400, 300));
}

#[test]
fn replacing_the_callback_takes_effect_immediately() {
    let h = common::mounted(2800.0, 800.0);

    let first = Rc::new(RefCell::new(0_u32));
    let second = Rc::new(RefCell::new(0_u32));

    let sink = Rc::clone(&first);
    h.telemetry.set_on_update(move |_| *sink.borrow_mut() += 1);
    h.scroll_to(500.0);

    let sink = Rc::clone(&second);
    h.telemetry.set_on_update(move |_| *sink.borrow_mut() += 1);
    h.scroll_to(1000.0);

    assert_eq!(*first.borrow(), 1, "replaced callback must stop firing");
    assert_eq!(*second.borrow(), 1, "replacement fires from the next signal");
}

#[test]
fn cleared_callback_stops_firing_but_state_keeps_updating() {
    let h = common::mounted(2800.0, 800.0);

    let passes = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&passes);
    h.telemetry.set_on_update(move |_| *sink.borrow_mut() += 1);

    h.scroll_to(500.0);
    h.telemetry.clear_on_update();
    h.scroll_to(1000.0);

    assert_eq!(*passes.borrow(), 1, "callback must not fire after clearing");
    common::assert_close(h.telemetry.scroll_progress(), 50.0, "state updates regardless");
}

// ============================================================================
// Serialized boundary shape
// ============================================================================

#[test]
fn snapshot_serializes_with_stable_field_names() {
    // The wasm boundary and the CLI trace both rely on these names.
    let h = common::mounted(2800.0, 800.0);
    h.scroll_to(500.0);
    h.source.emit_pointer_move(400, 300);

    let json = serde_json::to_value(h.telemetry.snapshot()).expect("serialize failed");
    assert_eq!(json["scroll_progress"], 25.0);
    assert_eq!(json["pointer"]["x"], 400);
    assert_eq!(json["pointer"]["y"], 300);
}
