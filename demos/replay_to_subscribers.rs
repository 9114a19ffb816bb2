//! # Replay-to-Subscribers Example
//!
//! Parses a small embedded replay log, feeds every frame through the decode
//! pipeline in timestamp order, and prints whatever a wildcard subscriber
//! sees come out the other end — including the single-frame reassembly that
//! a B&G wind reading needs and the Unknown fallback for an unrecognized PGN.
//!
//! ```bash
//! cargo run --example replay_to_subscribers
//! ```

use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use n2k_core::pipeline::Pipeline;
use n2k_core::protocol::replay_log;

// A handful of lines in the documented replay format: " (%f)  %s  %8X   [%d]  %X..."
// Frame 1: PGN 127251 Rate of Turn (priority 2, source 22, broadcast).
// Frame 2: PGN 130824 B&G Wind Data (priority 7, source 35, proprietary single-frame).
// Frame 3: PGN 130310 — a PGN this crate's curated registry has no schema for.
const LOG: &str = "\
 (000.000000)  can0  09F11316   [8]  07 B0 EE FF FF FF FF FF
 (000.050000)  can0  1DFF0823   [8]  7D 81 0A 14 1E 00 00 00
 (000.100000)  can0  15FD0605   [8]  00 11 22 33 44 55 66 77
";

fn main() {
    println!("=== n2k-core Replay-to-Subscribers ===\n");

    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    pipeline.subscriptions().subscribe_all(Box::new(|value| {
        println!("  dispatched: {value:?}");
    }));

    for line in LOG.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = match replay_log::parse_line(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("  skipping unparseable line: {err:?}");
                continue;
            }
        };
        println!(
            "frame at t={:.3}s on {}: id=0x{:08X}",
            parsed.time_delta, parsed.interface, parsed.frame.id
        );
        let timestamp = (parsed.time_delta * 1000.0) as u64;
        pipeline.process_frame(parsed.frame, timestamp);
    }

    println!("\nReplay complete.");
}
