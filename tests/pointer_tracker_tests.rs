//! Pointer tracker tests
//!
//! Last-write-wins replacement, the `(0, 0)` initial value, and coordinate
//! passthrough without range validation.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use scrollspot::{PointerPosition, PointerTracker};

#[test]
fn initial_position_is_origin() {
    let tracker = PointerTracker::new();
    assert_eq!(tracker.current(), PointerPosition::new(0, 0));
}

#[test]
fn last_write_wins() {
    let mut tracker = PointerTracker::new();
    tracker.update(10, 20);
    tracker.update(30, 5);
    assert_eq!(
        tracker.current(),
        PointerPosition::new(30, 5),
        "latest update must fully replace the stored pair"
    );
}

#[test]
fn update_replaces_both_coordinates() {
    // No axis is carried over from the previous pair, even when one axis
    // repeats.
    let mut tracker = PointerTracker::new();
    tracker.update(100, 200);
    tracker.update(100, 50);
    assert_eq!(tracker.current(), PointerPosition::new(100, 50));
}

#[test]
fn out_of_viewport_coordinates_pass_through() {
    // Negative and past-viewport values are not clamped; the spotlight
    // just renders partly off-screen.
    let mut tracker = PointerTracker::new();
    tracker.update(-15, 10_000);
    assert_eq!(tracker.current(), PointerPosition::new(-15, 10_000));
}

#[test]
fn mounted_core_tracks_pointer_signals() {
    let h = common::mounted(2800.0, 800.0);

    h.source.emit_pointer_move(10, 20);
    h.source.emit_pointer_move(30, 5);

    assert_eq!(
        h.telemetry.pointer_position(),
        PointerPosition::new(30, 5),
        "core must reflect the last pointer-move signal"
    );
}

#[test]
fn pointer_is_origin_before_any_signal() {
    let h = common::mounted(2800.0, 800.0);
    assert_eq!(h.telemetry.pointer_position(), PointerPosition::new(0, 0));
}
