//! End-to-end scenarios driving raw CAN frames through the full
//! `Classifier -> Assembler -> Dispatcher -> Subscribers` pipeline, plus the
//! CAN identifier decoding rules the pipeline depends on.
use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use n2k_core::io::Frame;
use n2k_core::pipeline::Pipeline;
use n2k_core::protocol::messages::Value;
use n2k_core::protocol::transport::can_id::CanId;

fn frame(pgn: u32, source: u8, priority: u8, data: [u8; 8]) -> Frame {
    let id = CanId::builder(pgn, source).priority(priority).build().unwrap();
    Frame { id: id.0, length: 8, data }
}

#[test]
fn single_frame_non_proprietary_decodes_the_signed_resolution_field() {
    // PGN 127251 Rate of Turn, id 0x09F11316 (source 0x16, priority 2).
    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let id = CanId::builder(127251, 0x16).priority(2).build().unwrap();
    assert_eq!(id.0, 0x09F11316);

    // Raw rate -4396 at resolution 3.125e-8 rad/s; sid kept non-sentinel (7)
    // since this curated message stores it as a plain u8, not an Option.
    let raw: i32 = -4396;
    let mut data = [0u8; 8];
    data[0] = 7;
    data[1..5].copy_from_slice(&raw.to_le_bytes());

    let value = pipeline.process_frame(Frame { id: id.0, length: 8, data }, 0).unwrap();
    match value {
        Value::RateOfTurn(rate) => {
            assert_eq!(rate.sid, 7);
            let decoded = rate.rate.expect("rate should be present, not sentinel");
            assert!((decoded - (-4396.0 * 3.125e-8)).abs() < 1e-12);
        }
        other => panic!("expected RateOfTurn, got {other:?}"),
    }
}

#[test]
fn proprietary_single_frame_resolves_the_bg_wind_data_variant() {
    // PGN 130824, source 7, priority 1; the manufacturer code peeked from
    // the leading 11 bits (381, B&G) picks the single-frame variant before
    // the frame is ever handed to the Fast Packet assembler — the Maretron
    // variant of this same PGN is Fast Packet, so getting this wrong would
    // feed the payload's first byte to the assembler as a sequence header.
    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let data = [0x7D, 0x81, 3, 4, 5, 0xFF, 0xFF, 0xFF];
    let value = pipeline
        .process_frame(frame(130824, 7, 1, data), 0)
        .unwrap();
    match value {
        Value::BgWindData(wind) => {
            assert_eq!(wind.manufacturer_code, 381);
            assert_eq!(wind.field_a, 3);
            assert_eq!(wind.field_b, 4);
            assert_eq!(wind.field_c, 5);
        }
        other => panic!("expected BgWindData, got {other:?}"),
    }
}

#[test]
fn proprietary_fast_packet_resolves_the_maretron_variant_through_reassembly() {
    // Same PGN, different manufacturer code (137, Maretron): this variant is
    // Fast Packet, 9 declared bytes, so it needs two frames through the
    // assembler before the same manufacturer peek picks it on the decode side.
    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let raw: u16 = 137 | (4 << 13);
    let manufacturer_bytes = raw.to_le_bytes();

    let first = [0x00, 9, manufacturer_bytes[0], manufacturer_bytes[1], 1, 2, 3, 4];
    let second = [0x01, 5, 6, 7, 8, 9, 10, 11];

    assert!(pipeline.process_frame(frame(130824, 9, 7, first), 0).is_none());
    let value = pipeline
        .process_frame(frame(130824, 9, 7, second), 0)
        .unwrap();
    match value {
        Value::MaretronProprietary(maretron) => {
            assert_eq!(maretron.manufacturer_code, 137);
            assert_eq!(maretron.industry_code, 4);
        }
        other => panic!("expected MaretronProprietary, got {other:?}"),
    }
}

/// The five fragments of one 32-byte Engine Parameters Dynamic fast packet,
/// sequence id 3 (the `0x60..0x64` prefixes): `seq_id<<5 | frame_index`. The
/// declared length (32) needs all five frames (`6 + 4*7 == 34 >= 32`), even
/// though the curated descriptor for this PGN only consumes the first 17
/// bytes — the assembler completes on declared length alone, and a decoder
/// is free to read fewer bytes than it was handed.
fn engine_parameters_fragments() -> [[u8; 8]; 5] {
    [
        [0x60, 32, 1, 2, 3, 4, 5, 6],
        [0x61, 7, 8, 9, 10, 11, 12, 13],
        [0x62, 14, 15, 16, 17, 18, 19, 20],
        [0x63, 21, 22, 23, 24, 25, 26, 27],
        [0x64, 28, 29, 30, 31, 32, 33, 34],
    ]
}

#[test]
fn fast_packet_in_arrival_order_dispatches_once_reassembled() {
    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let fragments = engine_parameters_fragments();

    for data in &fragments[..4] {
        assert!(pipeline.process_frame(frame(127489, 9, 3, *data), 0).is_none());
    }
    let value = pipeline
        .process_frame(frame(127489, 9, 3, fragments[4]), 0)
        .unwrap();
    match value {
        Value::EngineParametersDynamic(engine) => assert_eq!(engine.instance, 1),
        other => panic!("expected EngineParametersDynamic, got {other:?}"),
    }
}

#[test]
fn fast_packet_out_of_order_reassembles_to_the_same_result() {
    // Same id and frames as the in-order scenario, with the continuation
    // frames reordered. Frame 0 always carries the declared length and is
    // what starts a sequence, so it stays first; a continuation frame
    // arriving before it is a stray with nothing to attach to yet.
    let fragments = engine_parameters_fragments();

    let mut in_order_pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let mut in_order_value = None;
    for data in &fragments {
        in_order_value = in_order_pipeline
            .process_frame(frame(127489, 9, 3, *data), 0)
            .or(in_order_value);
    }

    let mut out_of_order_pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let mut out_of_order_value = None;
    for &i in &[0, 3, 1, 4, 2] {
        out_of_order_value = out_of_order_pipeline
            .process_frame(frame(127489, 9, 3, fragments[i]), 0)
            .or(out_of_order_value);
    }

    match (in_order_value.unwrap(), out_of_order_value.unwrap()) {
        (Value::EngineParametersDynamic(a), Value::EngineParametersDynamic(b)) => {
            assert_eq!(a, b);
        }
        other => panic!("expected matching EngineParametersDynamic values, got {other:?}"),
    }
}

#[test]
fn duplicate_continuation_frame_resets_the_sequence() {
    let mut pipeline: Pipeline<NoopRawMutex> = Pipeline::new();
    let fragments = engine_parameters_fragments();

    // Frame 3 (frame_index 1), then a duplicate of it: the duplicate resets
    // the sequence, so frames 1 and 2 alone never complete it.
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[0]), 0).is_none());
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[1]), 0).is_none());
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[1]), 0).is_none());

    // A fresh frame-0 starts a new sequence; completing it normally proves
    // the old, duplicate-tainted one never silently finished.
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[0]), 0).is_none());
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[1]), 0).is_none());
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[2]), 0).is_none());
    assert!(pipeline.process_frame(frame(127489, 9, 3, fragments[3]), 0).is_none());
    let value = pipeline
        .process_frame(frame(127489, 9, 3, fragments[4]), 0)
        .unwrap();
    assert!(matches!(value, Value::EngineParametersDynamic(_)));
}

#[test]
fn broadcast_proprietary_addressed_pgn_folds_the_destination_out_of_the_effective_pgn() {
    // Raw id with PF = 0xEF (< 240, addressed/PDU1) and PS = 0xFF: the
    // effective PGN drops PS (it is the destination, not part of the PGN),
    // while the destination accessor reports it as address 255.
    let id = CanId(0x05EFFF07);
    assert_eq!(id.pgn(), 0x1EF00);
    assert_eq!(id.destination(), Some(255));
    assert_eq!(id.source_address(), 7);
    assert_eq!(id.priority(), 1);
}
