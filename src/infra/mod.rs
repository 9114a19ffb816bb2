//! Infrastructure layer: bit-level codec built on top of raw CAN payloads.
pub mod codec;
