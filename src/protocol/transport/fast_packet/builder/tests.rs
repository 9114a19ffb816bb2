//! Tests for the Fast Packet frame generator (`FrameIterator`) and sequence id allocation.
use super::*;
use crate::{error::CanIdBuildError, protocol::transport::fast_packet::MAX_FAST_PACKET_PAYLOAD};

#[test]
/// Short payload: remains a single classic CAN frame (no Fast Packet).
fn test_builder_single_frame() {
    let payload = [1, 2, 3, 4, 5];
    let builder = FastPacketBuilder::new(129025, 42, None, &payload, 0);
    let mut iter = builder.build();

    let frame = iter.next().unwrap().unwrap();
    assert_eq!(frame.len, 5);
    assert_eq!(&frame.data[..5], &payload);

    // Should be the only frame
    assert!(iter.next().is_none());
}

#[test]
/// Ten-byte payload split across two Fast Packet frames.
fn test_builder_two_frames() {
    // 10 bytes → 2 frames (6+4)
    let payload = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let builder = FastPacketBuilder::new(129040, 50, None, &payload, 0);
    let mut iter = builder.build();

    // Frame 0
    let frame0 = iter.next().unwrap().unwrap();
    assert_eq!(frame0.data[0], 0); // seq_id
    assert_eq!(frame0.data[1], 10); // length
    assert_eq!(&frame0.data[2..8], &[1, 2, 3, 4, 5, 6]);
    assert_eq!(frame0.len, 8);

    // Frame 1
    let frame1 = iter.next().unwrap().unwrap();
    assert_eq!(frame1.data[0], 1); // seq_id
    assert_eq!(&frame1.data[1..5], &[7, 8, 9, 10]);
    assert_eq!(frame1.len, 5);

    assert!(iter.next().is_none());
}

#[test]
/// Maximum payload: ensures 32 frames are produced.
fn test_builder_max_payload() {
    let payload = [0xAA; 223]; // Max Fast Packet
                               // PGN 129540 (GNSS Sats) is PDU2 (broadcast), no destination needed
    let builder = FastPacketBuilder::new(129540, 25, None, &payload, 0);
    let mut iter = builder.build();

    // First frame
    let frame0 = iter.next().unwrap().unwrap();
    assert_eq!(frame0.data[1], 223); // total length

    // Count the frames
    let mut count = 1;
    while iter.next().is_some() {
        count += 1;
    }

    // 6 + 31*7 = 223 → 32 frames
    assert_eq!(count, 32);
}

#[test]
/// Destination-aware PGNs keep their target in the generated frames.
fn test_builder_with_destination() {
    let payload = [1, 2, 3];
    let builder = FastPacketBuilder::new(59904, 42, Some(50), &payload, 0);
    let mut iter = builder.build();

    let frame = iter.next().unwrap().unwrap();
    assert_eq!(frame.id.destination(), Some(50));
}

#[test]
/// Oversized payload: returns an error and stops the iteration.
fn test_builder_payload_too_large() {
    let payload = [0x11; MAX_FAST_PACKET_PAYLOAD + 1];
    let builder = FastPacketBuilder::new(129540, 42, None, &payload, 0);
    let mut iter = builder.build();

    let err = iter.next().unwrap().unwrap_err();
    assert!(matches!(err, CanIdBuildError::InvalidData));
    assert!(iter.next().is_none());
}

#[test]
/// A sequence id outside 0..=6 is masked to the 3-bit wire field.
fn sequence_id_is_masked_to_three_bits() {
    let payload = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let builder = FastPacketBuilder::new(129040, 50, None, &payload, 0xFF);
    let mut iter = builder.build();
    let header = iter.next().unwrap().unwrap().data[0];
    assert_eq!(header >> 5, 0x07);
}

#[test]
/// Consecutive messages for the same (source, pgn) get distinct ids that
/// wrap modulo 7.
fn sequence_counters_cycle_through_seven_ids_per_source_and_pgn() {
    let mut counters = SequenceCounters::new();
    let ids: alloc::vec::Vec<u8> = (0..9).map(|_| counters.next(50, 129040)).collect();
    assert_eq!(ids, alloc::vec![0, 1, 2, 3, 4, 5, 6, 0, 1]);
}

#[test]
/// Different (source, pgn) pairs get independent counters.
fn sequence_counters_are_independent_per_source_and_pgn() {
    let mut counters = SequenceCounters::new();
    assert_eq!(counters.next(1, 129040), 0);
    assert_eq!(counters.next(1, 129040), 1);
    assert_eq!(counters.next(2, 129040), 0);
    assert_eq!(counters.next(1, 127489), 0);
}
