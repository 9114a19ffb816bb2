//! Static PGN schema registry: `PGN → [PgnDescriptor]`, looked up by the
//! classifier and dispatcher. The full upstream dictionary has several
//! thousand entries generated offline (out of scope, see `DESIGN.md`); this
//! table hand-authors a curated subset covering every field kind and every
//! dispatcher behavior the rest of the crate exercises.
mod pgns;

use crate::core::PgnDescriptor;
use crate::infra::codec::bits::BitReader;

pub use pgns::{
    PGN_126996, PGN_127251, PGN_127489, PGN_129025, PGN_129029, PGN_130824_BG,
    PGN_130824_MARETRON,
};

/// Look up every schema variant registered for `pgn`. Empty when unknown.
pub fn candidates(pgn: u32) -> &'static [PgnDescriptor] {
    match pgn {
        127251 => &PGN_127251,
        127489 => &PGN_127489,
        129025 => &PGN_129025,
        129029 => &PGN_129029,
        126996 => &PGN_126996,
        130824 => &pgns::PGN_130824,
        _ => &[],
    }
}

/// Peek the 11-bit manufacturer code every proprietary payload starts with
/// (§3, §4.4), without consuming the reader: the cursor is rewound to 0
/// before returning, so a caller that goes on to fully decode the payload
/// starts from the same position it would have without the peek.
pub fn peek_manufacturer_code(payload: &[u8]) -> Option<u16> {
    let mut reader = BitReader::new(payload);
    let code = reader.read_u64(11).ok()? as u16;
    reader.seek(0);
    Some(code)
}

/// Among `candidates(pgn)`, pick the variant whose declared manufacturer
/// matches the one peeked from `payload`. Falls back to the first candidate
/// when there is only one (the overwhelmingly common case: a non-proprietary
/// PGN, or a proprietary one this registry only models a single vendor for)
/// or when no variant claims the observed manufacturer.
///
/// Called both on a fully reassembled payload (the dispatcher, picking a
/// decoder) and on a single raw CAN frame's 8 bytes (the classifier, picking
/// fast-vs-single before assembly even starts). The second use only works
/// because a single-frame candidate's manufacturer code sits at byte 0 with
/// no Fast Packet header in front of it, while a multi-frame candidate's
/// header byte (`seq_id<<5 | frame_index`) can't happen to read back as
/// another candidate's manufacturer code as long as every fast variant
/// sharing this PGN stays short enough that `frame_index` never reaches the
/// bit pattern that would collide — true for every proprietary PGN currently
/// registered, and worth re-checking by hand before adding a fast variant
/// long enough to challenge it.
pub fn select_candidate<'a>(
    candidates: &'a [PgnDescriptor],
    payload: &[u8],
) -> Option<&'a PgnDescriptor> {
    if candidates.len() <= 1 {
        return candidates.first();
    }
    let manufacturer = peek_manufacturer_code(payload);
    candidates
        .iter()
        .find(|candidate| candidate.manufacturer == manufacturer)
        .or_else(|| candidates.first())
}

/// Import-time validator: asserts that no PGN other than 130824 mixes a
/// fast-packet and a single-frame variant (§4.4). Exercised by a unit test
/// rather than run automatically — there is no `no_std`-friendly place to
/// hook "at import time" short of a test or an explicit call from the
/// embedding application's startup path.
pub fn validate_fast_single_coexistence() -> Result<(), u32> {
    for &pgn in &[127251u32, 127489, 129025, 129029, 126996, 130824] {
        let variants = candidates(pgn);
        let all_fast = variants.iter().all(|v| v.fastpacket);
        let all_single = variants.iter().all(|v| !v.fastpacket);
        if !all_fast && !all_single && pgn != 130824 {
            return Err(pgn);
        }
    }
    Ok(())
}
