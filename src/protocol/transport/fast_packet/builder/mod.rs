//! CAN frame generator for Fast Packet messages. Automatically builds the required
//! frame sequence (single or multi-packet) from an application payload.
use alloc::collections::BTreeMap;

use crate::error::CanIdBuildError;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::can_id::CanId;
use crate::protocol::transport::fast_packet::MAX_FAST_PACKET_PAYLOAD;

/// Hands out Fast Packet sequence identifiers, one per `(source, pgn)` pair,
/// cycling through the seven values a 3-bit field can unambiguously label
/// across a restart window (§4.5). Callers own an instance of this alongside
/// whatever keeps their CAN bus handle alive; it is never global state.
#[derive(Debug, Default)]
pub struct SequenceCounters {
    counters: BTreeMap<(u8, u32), u8>,
}

impl SequenceCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next sequence id for `(source, pgn)`, advancing the
    /// counter modulo 7.
    pub fn next(&mut self, source_address: u8, pgn: u32) -> u8 {
        let counter = self.counters.entry((source_address, pgn)).or_insert(0);
        let id = *counter;
        *counter = (*counter + 1) % 7;
        id
    }
}

#[derive(Debug)]
/// Shared parameters for all frames composing a Fast Packet message.
pub struct FastPacketBuilder<'a> {
    pgn: u32,
    source_address: u8,
    destination: Option<u8>,
    payload: &'a [u8],
    sequence_id: u8,
}

/// Lazy iterator returning frames one by one as they are encoded.
pub struct FrameIterator<'a> {
    builder: FastPacketBuilder<'a>,
    frame_index: u8,
    bytes_sent: usize,
}

impl<'a> Iterator for FrameIterator<'a> {
    type Item = Result<CanFrame, CanIdBuildError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes_sent >= self.builder.payload.len() {
            return None;
        }

        let mut id_builder = CanId::builder(self.builder.pgn, self.builder.source_address);

        if let Some(destination) = self.builder.destination {
            id_builder = id_builder.destination(destination);
        }

        let id = match id_builder.build() {
            Ok(id) => id,
            Err(e) => return Some(Err(e)),
        };
        let total_len = self.builder.payload.len();

        if total_len > MAX_FAST_PACKET_PAYLOAD {
            self.bytes_sent = total_len;
            return Some(Err(CanIdBuildError::InvalidData));
        }

        // Payload ≤ 8 bytes: single-frame message (no Fast Packet).
        if total_len <= 8 {
            let mut data = [0xFF; 8];
            data[..total_len].copy_from_slice(self.builder.payload);

            self.bytes_sent = total_len;

            return Some(Ok(CanFrame {
                id,
                data,
                len: total_len,
            }));
        }

        // Fast Packet case: segment the message.
        let header = ((self.builder.sequence_id & 0x07) << 5) | (self.frame_index & 0x1F);
        let frame = if self.bytes_sent == 0 {
            // First frame: header + six data bytes.
            let mut data = [0xFF; 8];
            // Byte 0: sequence identifier.
            data[0] = header;
            // Byte 1: total useful payload length.
            data[1] = self.builder.payload.len() as u8;
            // Bytes 2-7: first six payload bytes.
            let bytes_to_copy = 6.min(self.builder.payload.len());
            data[2..2 + bytes_to_copy].copy_from_slice(&self.builder.payload[0..bytes_to_copy]);

            self.bytes_sent += bytes_to_copy;

            CanFrame {
                id,
                data,
                len: 2 + bytes_to_copy,
            }
        } else {
            let mut data = [0xFF; 8];
            data[0] = header;

            let remaining_bytes = self.builder.payload.len() - self.bytes_sent;
            let bytes_to_copy = 7.min(remaining_bytes);
            let payload_slice =
                &self.builder.payload[self.bytes_sent..self.bytes_sent + bytes_to_copy];
            data[1..1 + bytes_to_copy].copy_from_slice(payload_slice);

            self.bytes_sent += bytes_to_copy;

            CanFrame {
                id,
                data,
                len: 1 + bytes_to_copy,
            }
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        Some(Ok(frame))
    }
}

impl<'a> FastPacketBuilder<'a> {
    /// Create a Fast Packet encoder (or single-frame builder) depending on payload size.
    ///
    /// `sequence_id` is taken from the caller's [`SequenceCounters`] (or any
    /// value `0..=6` for replay/testing); it is masked to three bits.
    pub fn new(
        pgn: u32,
        source_address: u8,
        destination: Option<u8>,
        payload: &'a [u8],
        sequence_id: u8,
    ) -> Self {
        Self {
            pgn,
            source_address,
            destination,
            payload,
            sequence_id: sequence_id & 0x07,
        }
    }

    /// Start the iteration; each call to `next` yields the next frame.
    pub fn build(self) -> FrameIterator<'a> {
        FrameIterator {
            builder: self,
            frame_index: 0,
            bytes_sent: 0,
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
