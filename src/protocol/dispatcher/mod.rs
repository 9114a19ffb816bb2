//! Decoder Dispatcher (§4.4): picks the right schema variant for a completed
//! [`Packet`] and runs its decoder, producing a [`Value`]. Falls back to
//! [`UnknownValue`] whenever the registry has no schema, every candidate
//! decoder fails, or the packet itself carries a classifier/assembler error —
//! the dispatcher never halts the pipeline on bad data.
use crate::core::PgnBytes;
use crate::error::DispatchReason;
use crate::infra::codec::traits::PgnData;
use crate::protocol::lookups::{IndustryCode, ManufacturerCode};
use crate::protocol::messages::{
    BgWindData, EngineParametersDynamic, GnssPositionData, MaretronProprietary,
    PositionRapidUpdate, ProductInformation, RateOfTurn, UnknownValue, Value,
};
use crate::protocol::packet::Packet;
use crate::protocol::registry;

/// Decode one completed packet into a [`Value`]. `packet.complete` and
/// `packet.errors` are both consulted: a packet the classifier or assembler
/// already flagged is turned into an `Unknown` without attempting a decode.
pub fn dispatch(packet: &Packet) -> Value {
    let pgn = packet.info.pgn;
    let source = packet.info.source;

    if let Some(error) = packet.errors.first() {
        return unknown(pgn, source, packet.data, DispatchReason::Classify(*error));
    }
    if !packet.complete {
        return unknown(pgn, source, packet.data, DispatchReason::IncompletePacket { pgn });
    }

    let payload = packet.data.as_slice();

    match pgn {
        127251 => decode_one::<RateOfTurn>(payload, source, pgn, Value::RateOfTurn),
        127489 => decode_one::<EngineParametersDynamic>(
            payload,
            source,
            pgn,
            Value::EngineParametersDynamic,
        ),
        129025 => decode_one::<PositionRapidUpdate>(payload, source, pgn, Value::PositionRapidUpdate),
        129029 => decode_one::<GnssPositionData>(payload, source, pgn, Value::GnssPositionData),
        126996 => decode_one::<ProductInformation>(payload, source, pgn, Value::ProductInformation),
        130824 => decode_130824(payload, source),
        _ => unknown(pgn, source, packet.data, DispatchReason::NoSchema { pgn }),
    }
}

/// Decode a non-proprietary PGN with exactly one registered variant.
fn decode_one<T: PgnData>(
    payload: &[u8],
    source: u8,
    pgn: u32,
    wrap: fn(T) -> Value,
) -> Value {
    match T::from_payload(payload) {
        Ok(decoded) => wrap(decoded),
        Err(last) => unknown(
            pgn,
            source,
            raw_bytes(payload),
            DispatchReason::AllCandidatesFailed {
                pgn,
                tried: 1,
                last,
            },
        ),
    }
}

/// Resolve the PGN 130824 ambiguity (§4.4) the general way: peek the
/// manufacturer code the same way [`registry::select_candidate`] did when the
/// classifier chose fast-vs-single-frame, filter `registry::candidates(pgn)`
/// for the variant that claims it, and decode with that variant's type.
fn decode_130824(payload: &[u8], source: u8) -> Value {
    let pgn = 130824;
    let candidates = registry::candidates(pgn);
    let manufacturer = registry::peek_manufacturer_code(payload);
    let matched = manufacturer.and_then(|code| {
        candidates
            .iter()
            .find(|candidate| candidate.manufacturer == Some(code))
    });

    match matched.and_then(|candidate| candidate.manufacturer) {
        Some(381) => decode_one::<BgWindData>(payload, source, pgn, Value::BgWindData),
        Some(137) => decode_one::<MaretronProprietary>(payload, source, pgn, Value::MaretronProprietary),
        _ => unknown(
            pgn,
            source,
            raw_bytes(payload),
            DispatchReason::UnknownManufacturer {
                pgn,
                manufacturer: manufacturer.unwrap_or(0),
            },
        ),
    }
}

/// Peek the manufacturer and industry codes out of a proprietary payload's
/// first 11+3 bits without needing a full descriptor-driven read — used
/// purely for the diagnostic fields on an `Unknown`.
pub fn peek_manufacturer(payload: &[u8]) -> Option<(ManufacturerCode, IndustryCode)> {
    if payload.len() < 2 {
        return None;
    }
    let raw = u16::from_le_bytes([payload[0], payload[1]]);
    let manufacturer = ManufacturerCode::from_code(raw & 0x07FF);
    let industry = IndustryCode::from_code(((raw >> 13) & 0x07) as u8);
    Some((manufacturer, industry))
}

fn raw_bytes(payload: &[u8]) -> PgnBytes {
    let mut bytes = PgnBytes::new();
    bytes.copy_from_slice(payload);
    bytes
}

/// Render a [`DispatchReason`] to static text and, for proprietary PGNs,
/// recover the manufacturer/industry codes on a best-effort basis from the
/// raw payload (§4.4 "Unknown emission").
fn unknown(pgn: u32, source: u8, raw: PgnBytes, reason: DispatchReason) -> Value {
    let reason_str = match &reason {
        DispatchReason::NoSchema { .. } => "no schema for pgn",
        DispatchReason::UnknownManufacturer { .. } => "no variant for observed manufacturer",
        DispatchReason::AllCandidatesFailed { .. } => "all candidate decoders failed",
        DispatchReason::IncompletePacket { .. } => "reassembly produced an incomplete packet",
        DispatchReason::Classify(_) => "frame classification failed",
    };
    let (manufacturer, industry_code) = match peek_manufacturer(raw.as_slice()) {
        Some((manufacturer, industry)) if crate::protocol::packet::is_proprietary_pgn(pgn) => {
            (Some(manufacturer.code()), Some(industry.code()))
        }
        _ => (None, None),
    };
    Value::Unknown(UnknownValue {
        pgn,
        source,
        raw,
        reason: reason_str,
        manufacturer,
        industry_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::packet::PacketInfo;

    fn complete_packet(pgn: u32, source: u8, payload: &[u8]) -> Packet {
        let mut data = PgnBytes::new();
        data.copy_from_slice(payload);
        Packet {
            info: PacketInfo {
                timestamp: 0,
                priority: 3,
                pgn,
                source,
                target: 255,
                length: payload.len() as u8,
            },
            data,
            fast: payload.len() > 8,
            seq_id: None,
            proprietary: false,
            complete: true,
            manufacturer: None,
            errors: alloc::vec::Vec::new(),
        }
    }

    #[test]
    fn decodes_a_single_variant_pgn() {
        let payload = [7u8, 0, 0, 0, 0, 0, 0, 0];
        let packet = complete_packet(127251, 5, &payload);
        match dispatch(&packet) {
            Value::RateOfTurn(value) => assert_eq!(value.sid, 7),
            other => panic!("expected RateOfTurn, got {other:?}"),
        }
    }

    #[test]
    fn resolves_the_130824_bg_variant_from_its_manufacturer_code() {
        let payload = [0x7D, 0x81, 3, 4, 5, 0xFF, 0xFF, 0xFF];
        let packet = complete_packet(130824, 7, &payload);
        match dispatch(&packet) {
            Value::BgWindData(value) => assert_eq!(value.manufacturer_code, 381),
            other => panic!("expected BgWindData, got {other:?}"),
        }
    }

    #[test]
    fn an_unrecognized_manufacturer_on_130824_produces_an_unknown_value() {
        let mut payload = [0u8; 9];
        let raw: u16 = 999; // no registered 130824 variant claims this code.
        payload[..2].copy_from_slice(&raw.to_le_bytes());
        let packet = complete_packet(130824, 9, &payload);
        match dispatch(&packet) {
            Value::Unknown(value) => {
                assert_eq!(value.reason, "no variant for observed manufacturer");
                assert_eq!(value.manufacturer, Some(999));
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn resolves_the_130824_maretron_variant_otherwise() {
        let mut payload = [0u8; 9];
        // Manufacturer 137 (Maretron), industry 4 (Marine), packed little-endian.
        let raw: u16 = 137 | (4 << 13);
        payload[..2].copy_from_slice(&raw.to_le_bytes());
        let packet = complete_packet(130824, 9, &payload);
        match dispatch(&packet) {
            Value::MaretronProprietary(value) => assert_eq!(value.manufacturer_code, 137),
            other => panic!("expected MaretronProprietary, got {other:?}"),
        }
    }

    #[test]
    fn unknown_pgn_produces_an_unknown_value() {
        let packet = complete_packet(999999, 1, &[0u8; 8]);
        match dispatch(&packet) {
            Value::Unknown(value) => assert_eq!(value.pgn, 999999),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn a_carried_classify_error_short_circuits_to_unknown() {
        use crate::error::ClassifyError;
        let mut packet = complete_packet(127251, 1, &[0u8; 8]);
        packet.complete = false;
        packet.errors.push(ClassifyError::ZeroPgn);
        match dispatch(&packet) {
            Value::Unknown(_) => {}
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn peek_manufacturer_reads_the_leading_bytes() {
        let (manufacturer, industry) = peek_manufacturer(&[0x7D, 0x81]).unwrap();
        assert_eq!(manufacturer, ManufacturerCode::BAndG);
        assert_eq!(industry, IndustryCode::Marine);
    }
}
