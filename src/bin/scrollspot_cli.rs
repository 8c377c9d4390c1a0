//! CLI harness for scrollspot - replays a signal script against a simulated
//! viewport and outputs the resulting snapshot trace as JSON
//!
//! Usage:
//!   scrollspot_cli <document_height> <viewport_height>              # script on stdin, JSON to stdout
//!   scrollspot_cli <document_height> <viewport_height> -o out.json  # JSON to file
//!
//! Script lines:
//!   scroll <offset>       move the viewport and emit a scroll signal
//!   pointer <x> <y>       emit a pointer-move signal
//!   resize <doc> <vp>     change the geometry without emitting a signal
//!   # comment / blank     ignored

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use serde::Serialize;

use scrollspot::{
    SignalAvailability, SimulatedSource, SimulatedViewport, TelemetrySnapshot, ViewportTelemetry,
};

#[derive(Serialize)]
struct TraceEntry {
    event: String,
    snapshot: TelemetrySnapshot,
}

#[derive(Serialize)]
struct SessionTrace {
    document_height: f64,
    viewport_height: f64,
    availability: SignalAvailability,
    entries: Vec<TraceEntry>,
    final_snapshot: TelemetrySnapshot,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: scrollspot_cli <document_height> <viewport_height> [-o output.json]");
        std::process::exit(1);
    }

    let document_height: f64 = match args[1].parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid document height: {}", args[1]);
            std::process::exit(1);
        }
    };
    let viewport_height: f64 = match args[2].parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid viewport height: {}", args[2]);
            std::process::exit(1);
        }
    };
    let output_path = if args.len() > 4 && args[3] == "-o" {
        Some(&args[4])
    } else {
        None
    };

    let viewport = SimulatedViewport::new(document_height, viewport_height);
    let source = SimulatedSource::new();
    let mut telemetry = ViewportTelemetry::new(source.clone(), viewport.clone());
    let availability = match telemetry.mount() {
        Ok(availability) => availability,
        Err(e) => {
            eprintln!("Error mounting telemetry: {}", e);
            std::process::exit(1);
        }
    };

    // Replay the script, taking a snapshot after every signal.
    let mut entries = Vec::new();
    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let parsed = match tokens[0] {
            "scroll" if tokens.len() == 2 => tokens[1].parse::<f64>().ok().map(|offset| {
                viewport.set_scroll_offset(offset);
                source.emit_scroll();
            }),
            "pointer" if tokens.len() == 3 => tokens[1]
                .parse::<i32>()
                .ok()
                .zip(tokens[2].parse::<i32>().ok())
                .map(|(x, y)| source.emit_pointer_move(x, y)),
            "resize" if tokens.len() == 3 => tokens[1]
                .parse::<f64>()
                .ok()
                .zip(tokens[2].parse::<f64>().ok())
                .map(|(doc, vp)| viewport.set_geometry(doc, vp)),
            _ => None,
        };
        if parsed.is_none() {
            eprintln!("Line {}: invalid command: {}", index + 1, trimmed);
            std::process::exit(1);
        }

        entries.push(TraceEntry {
            event: trimmed.to_string(),
            snapshot: telemetry.snapshot(),
        });
    }

    let final_snapshot = telemetry.snapshot();
    telemetry.unmount();

    let trace = SessionTrace {
        document_height,
        viewport_height,
        availability,
        entries,
        final_snapshot,
    };
    let json = match serde_json::to_string_pretty(&trace) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
