//! # Quickstart Example
//!
//! Minimal walkthrough of `n2k-core`:
//! - Build a CAN identifier
//! - Decode a single-frame PGN from raw bytes
//! - Re-encode it and confirm the round trip
//! - Run a frame through the full decode pipeline and see it reach a subscriber
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use n2k_core::infra::codec::traits::PgnData;
use n2k_core::io::Frame;
use n2k_core::pipeline::Pipeline;
use n2k_core::protocol::messages::{RateOfTurn, Value};
use n2k_core::protocol::transport::can_id::CanId;

fn main() {
    println!("=== n2k-core Quickstart ===\n");

    // ======================================================================
    // 1. Build a CAN identifier
    // ======================================================================
    println!("1. Building a CAN identifier");

    let can_id = CanId::builder(127251, 22) // PGN and source address
        .priority(2)
        .build()
        .expect("valid CAN id");

    println!("   CAN id: 0x{:08X}", can_id.0);
    println!("   PGN: {}", can_id.pgn());
    println!("   Source: {}\n", can_id.source_address());

    // ======================================================================
    // 2. Decode a Rate of Turn message (PGN 127251)
    // ======================================================================
    println!("2. Decoding a Rate of Turn message");

    // SID 7, rate -4400 raw units at resolution 3.125e-8 rad/s.
    let raw: i32 = -4400;
    let mut payload = [0u8; 8];
    payload[0] = 7;
    payload[1..5].copy_from_slice(&raw.to_le_bytes());

    let decoded = RateOfTurn::from_payload(&payload).expect("valid payload");
    println!("   SID: {}", decoded.sid);
    println!("   Rate: {:?} rad/s\n", decoded.rate);

    // ======================================================================
    // 3. Re-encode and confirm the round trip
    // ======================================================================
    println!("3. Re-encoding the decoded message");

    let mut buffer = [0u8; 8];
    let written = decoded.to_payload(&mut buffer).expect("serializable");
    println!("   Wrote {written} bytes, matches original: {}\n", buffer == payload);

    // ======================================================================
    // 4. Run a frame through the decode pipeline
    // ======================================================================
    println!("4. Running a frame through the pipeline");

    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    pipeline.subscriptions().subscribe_all(Box::new(|value| {
        if let Value::RateOfTurn(rate) = value {
            println!("   Subscriber saw RateOfTurn {{ sid: {}, rate: {:?} }}", rate.sid, rate.rate);
        }
    }));

    let frame = Frame {
        id: can_id.0,
        length: 8,
        data: payload,
    };
    pipeline.process_frame(frame, 0);

    println!("\nQuickstart complete.");
}
