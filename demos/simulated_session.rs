//! Example: Drive the telemetry core through a scripted viewport session
//! and print each render pass.
//!
//! Run with: cargo run --example simulated_session

#![allow(clippy::expect_used, clippy::print_stdout)]

use std::cell::RefCell;
use std::rc::Rc;

use scrollspot::{SimulatedSource, SimulatedViewport, TelemetrySnapshot, ViewportTelemetry};

fn main() {
    // A 2800px document in an 800px viewport: 2000px of scrollable distance.
    let viewport = SimulatedViewport::new(2800.0, 800.0);
    let source = SimulatedSource::new();
    let mut telemetry = ViewportTelemetry::new(source.clone(), viewport.clone());

    let passes: Rc<RefCell<Vec<TelemetrySnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&passes);
    telemetry.set_on_update(move |snapshot| {
        println!(
            "render pass: progress {:>5.1}%  pointer ({}, {})",
            snapshot.scroll_progress, snapshot.pointer.x, snapshot.pointer.y
        );
        sink.borrow_mut().push(snapshot);
    });

    let availability = telemetry.mount().expect("mount failed");
    println!(
        "mounted: scroll={} pointer={}",
        availability.scroll, availability.pointer
    );

    // Scroll down the page in steps while the pointer wanders.
    for (offset, x, y) in [
        (250.0, 120, 80),
        (500.0, 400, 300),
        (1200.0, 640, 410),
        (2000.0, 900, 620),
    ] {
        viewport.set_scroll_offset(offset);
        source.emit_scroll();
        source.emit_pointer_move(x, y);
    }

    // The document grows (an image finished loading); the next scroll
    // signal picks the new geometry up without remounting.
    viewport.set_geometry(4800.0, 800.0);
    source.emit_scroll();

    telemetry.unmount();
    println!(
        "unmounted after {} render passes, final snapshot: progress {:.1}% pointer ({}, {})",
        passes.borrow().len(),
        telemetry.scroll_progress(),
        telemetry.pointer_position().x,
        telemetry.pointer_position().y
    );
}
