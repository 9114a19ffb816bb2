//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (CAN ID construction,
//! address management, serialization/deserialization, etc.).
use crate::core::{FieldKind, PgnValue};
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur while building a 29-bit CAN identifier.
pub enum CanIdBuildError {
    /// Provided parameters do not produce a valid identifier.
    #[error("Invalid data")]
    InvalidData,
    /// The destination address violates protocol constraints.
    #[error("Invalid destination")]
    InvalidDestination,
    /// Attempt to build a broadcast message (PDU2) with PF < 240.
    #[error("Invalid for broadcast message: PF is too low")]
    InvalidForBroadcast,
    /// Attempt to send an addressed message (PDU1) with PF ≥ 240.
    #[error("Invalid for addressed message: PF is too high: {pgn}")]
    InvalidForFocusedMessage { pgn: u8 },
    /// In PDU1 the lower 8 bits of the PGN must remain zero.
    #[error("PDU1 PGNs require PS = 0")]
    PsFocusMessageMustBeNull,
    /// No payload available to build the frame.
    #[error("Payload is empty: unable to build")]
    EmptyPayload,
}

//================================================================================CLASSIFIER_ERROR

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Failures raised by the Frame Classifier (§4.1). Never fatal: the pipeline
/// always produces a packet, using these as the "reason" carried by an
/// eventual `Unknown` value.
pub enum ClassifyError {
    /// `pgn == 0`, which no schema ever describes.
    #[error("PGN is zero")]
    ZeroPgn,
    /// The CAN frame declared zero payload bytes.
    #[error("Empty payload")]
    EmptyPayload,
    /// No registry entry exists for the effective PGN.
    #[error("No schema for PGN {pgn}")]
    NoSchema { pgn: u32 },
}

//================================================================================ASSEMBLER_ERROR

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Non-fatal reassembly failures (§4.2, §4.7). Each variant resets the
/// offending sequence; `Sparse` additionally means a packet that reached its
/// expected byte count still has a hole and must be reported as `Unknown`.
pub enum AssembleError {
    /// A continuation frame (index > 0) arrived with no frame-0 on record.
    #[error("Continuation frame with no preceding frame-0")]
    StrayContinuation,
    /// The same slot index was written twice within one sequence.
    #[error("Duplicate frame index {index} in sequence")]
    DuplicateFrame { index: u8 },
    /// `received >= expected` but an interior slot is still empty.
    #[error("Sparse reassembly: missing bytes before the declared total")]
    Sparse,
}

//================================================================================FRAGMENTER_ERROR

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors returned to the caller when fragmenting an encoded payload (§4.5, §4.7).
pub enum FragmentError {
    /// Payload exceeds the 223-byte fast-packet ceiling.
    #[error("Payload of {len} bytes exceeds the 223-byte fast-packet limit")]
    PayloadTooLarge { len: usize },
    /// Underlying CAN identifier could not be built.
    #[error(transparent)]
    Id(#[from] CanIdBuildError),
}

//================================================================================DISPATCH_ERROR

#[derive(Debug, Error)]
/// Reasons a decoded value ends up as `Unknown` instead of a typed variant (§4.4, §4.7).
pub enum DispatchReason {
    /// No registry entry at all for this PGN.
    #[error("No schema for PGN {pgn}")]
    NoSchema { pgn: u32 },
    /// Proprietary PGN but no variant matches the observed manufacturer code.
    #[error("No variant for manufacturer {manufacturer} on PGN {pgn}")]
    UnknownManufacturer { pgn: u32, manufacturer: u16 },
    /// Every candidate decoder failed; carries the last candidate's error for diagnostics.
    #[error("All {tried} candidate decoder(s) failed for PGN {pgn}: {last}")]
    AllCandidatesFailed {
        pgn: u32,
        tried: usize,
        last: DeserializationError,
    },
    /// Reassembly produced a sparse/incomplete packet.
    #[error("Reassembly produced an incomplete packet for PGN {pgn}")]
    IncompletePacket { pgn: u32 },
    /// The classifier itself rejected the frame before a schema lookup happened.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

//================================================================================SUBSCRIPTION_ERROR

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Subscription misuse (§4.6, §4.7 "partially fatal" row). Never raised during dispatch.
pub enum SubscriptionError {
    /// `unsubscribe` was called with an id that was never issued, or already removed.
    #[error("No subscription with id {0}")]
    NotFound(u64),
}

//================================================================================RAW_LOG_ERROR

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Failures parsing a §6.3 RAW log line or a §6.2 replay log line.
pub enum LogLineError {
    /// The line did not have the expected number of comma/space-separated fields.
    #[error("Malformed log line: wrong field count")]
    WrongFieldCount,
    /// A numeric field (timestamp, pgn, source, length, a hex byte, …) failed to parse.
    #[error("Malformed log line: bad numeric field")]
    BadNumber,
}

//================================================================================CODEC_ERROR

#[derive(Debug, Error)]
/// Issues encountered while serializing a PGN into a buffer.
pub enum SerializationError {
    /// Provided buffer is too small for the payload.
    #[error("Buffer too small")]
    BufferTooSmall,
    /// Data does not satisfy the descriptor constraints.
    #[error("Invalid data")]
    InvalidData,
    /// Code generator detected a malformed repeating PGN definition.
    #[error("Invalid repetitive PGN definition for {data}")]
    RepeatitiveError { data: u32 },
    /// Field length is not an acceptable bit multiple.
    #[error("Invalid field bit length for {field_name}")]
    InvalidFieldBits { field_name: &'static str },
    /// Failed while writing bits into the output buffer.
    #[error("BitWrite error: {err}")]
    BitWriteError { err: BitWriterError },
    /// Field type not supported by the serialization engine.
    #[error("Unsupported field kind")]
    UnsupportedFieldKind,
    /// Expected field was missing from the domain structure.
    #[error("Field {field_id} not found")]
    FieldNotFound { field_id: &'static str },
    /// Generic conversion error bubbling up from the codec module.
    #[error("Codec Error: {source}")]
    CodecError { source: CodecError },
}

#[derive(Error, Debug)]
/// Errors raised while deserializing a CAN buffer into a PGN structure.
pub enum DeserializationError {
    /// Payload size does not match the expected schema.
    #[error("Invalid data length")]
    InvalidDataLength,
    /// Bits read from the buffer cannot be interpreted according to the descriptor.
    #[error("Malformed data")]
    MalformedData,
    /// Feature not implemented for this PGN yet.
    #[error("Functionality not implemented for this PGN")]
    NotImplemented,
    /// Indirect field depends on a lookup table that is missing.
    #[error("Missing Indirect Lookup Reference for descriptor {desc}: {pgn}")]
    MissingIndirectLookupRef { desc: u32, pgn: &'static str },
    /// Dependent field is missing or was not populated.
    #[error("Dependency field not found {dep} for pgn {desc}")]
    DependencyFieldNotFound { dep: &'static str, desc: u32 },
    /// Field kind not supported by the parser.
    #[error("Unsupported field kind {field_kind:?}")]
    UnsupportedFieldKind { field_kind: FieldKind },
    /// Could not assign value into the target structure.
    #[error("Field assignment failed {desc}")]
    FieldAssignmentFailed { desc: &'static str },
    /// Field descriptor defines an invalid bit length.
    #[error("Invalid field bit length for {field_name}")]
    InvalidFieldBits { field_name: &'static str },
    /// Error bubbled up from the generic codec engine.
    #[error("Codec Error: {source}")]
    CodecError { source: CodecError },
    /// Bit-level access on the buffer failed (out of bounds, misalignment…).
    #[error("BitReader error: {err}")]
    BitReaderError { err: BitReaderError },
}

#[derive(Error, Debug)]
/// Shared error abstraction for conversion helpers.
pub enum CodecError {
    /// Value type is incompatible with the algorithm.
    #[error("Data type mismatch for value {value:?}, function: {func}")]
    DataTypeMismatch { value: PgnValue, func: &'static str },
}

//==================================================================================SEND_ERROR
#[derive(Debug, Error)]
/// Errors encountered when sending a PGN (build + transmit).
pub enum SendPgnError<E: core::fmt::Debug> {
    /// PGN serialization failed.
    #[error("Serialization failed")]
    Serialization,
    /// CAN identifier could not be built.
    #[error("Frame build failed: {0:?}")]
    Build(CanIdBuildError),
    /// CAN layer refused or failed to send the frame.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
}

//==================================================================================BITREADER_ERRORS
#[derive(Debug, Error)]
/// Errors raised during bitwise buffer reads.
pub enum BitReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when required.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}
//==================================================================================BITREADER_ERRORS
#[derive(Debug, Error)]
/// Errors raised during bitwise writes into a buffer.
pub enum BitWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Field is too large for the provided type.
    #[error("Cannot write more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when the operation requires it.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}
