//! Frame Classifier (§4.1): turns a raw [`CanFrame`] into a [`Packet`] header
//! plus payload, resolving the PDU1/PDU2 effective PGN and consulting the
//! registry for whether the PGN is fast-packet or single-frame. Never
//! rejects a frame outright — unknown or malformed input still produces a
//! packet carrying a [`ClassifyError`] so downstream stages can surface an
//! `Unknown` value instead of silently dropping traffic.
use crate::core::PgnBytes;
use crate::error::ClassifyError;
use crate::protocol::packet::{Packet, PacketInfo};
use crate::protocol::registry;
use crate::protocol::transport::can_frame::CanFrame;

/// Classify one raw CAN frame.
///
/// `timestamp` is caller-supplied; this crate never reads a clock itself.
pub fn classify(frame: &CanFrame, timestamp: u64) -> Packet {
    let pgn = frame.id.pgn();
    let source = frame.id.source_address();
    let target = frame.id.destination().unwrap_or(255);
    let priority = frame.id.priority();
    let length = frame.len as u8;

    let info = PacketInfo {
        timestamp,
        priority,
        pgn,
        source,
        target,
        length,
    };

    if pgn == 0 {
        return Packet::rejected(info, ClassifyError::ZeroPgn);
    }
    if length == 0 {
        return Packet::rejected(info, ClassifyError::EmptyPayload);
    }

    let candidates = registry::candidates(pgn);
    if candidates.is_empty() {
        return Packet::rejected(info, ClassifyError::NoSchema { pgn });
    }

    // A PGN with more than one registered variant (130824's B&G/Maretron
    // split) needs the manufacturer code peeked before the fast/single-frame
    // decision can be made — the two vendors disagree on which this PGN is.
    // `select_candidate` peeks the raw frame bytes here, ahead of assembly;
    // see its doc comment for why that is safe despite a fast variant's
    // first bytes being a sequence header rather than payload.
    let selected = registry::select_candidate(candidates, &frame.data[..frame.len])
        .unwrap_or(&candidates[0]);
    let fast = selected.fastpacket;
    let mut data = PgnBytes::new();
    data.copy_from_slice(&frame.data[..frame.len]);

    Packet {
        info,
        data,
        fast,
        seq_id: None,
        proprietary: crate::protocol::packet::is_proprietary_pgn(pgn),
        complete: !fast,
        manufacturer: selected.manufacturer,
        errors: alloc::vec::Vec::new(),
    }
}
