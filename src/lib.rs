//! `n2k-core` library: primitives and protocols required to classify, reassemble,
//! decode, and dispatch NMEA 2000 frames in a `no_std` environment. The crate
//! exposes the infrastructure modules (bit-level codec), protocol logic
//! (transport, fast-packet reassembly, registry, dispatcher, subscriptions),
//! and a minimal endpoint abstraction.
#![no_std]
extern crate alloc;
//==================================================================================
/// Core data types shared by the registry and the codec engine.
pub mod core;
/// Domain and low-level errors (CAN identifier construction, classification,
/// reassembly, serialization, deserialization, dispatch, and related issues).
pub mod error;
/// Representation of a raw NMEA 2000 frame as it is read from the CAN bus,
/// and the bit-level codec built on top of it.
pub mod infra;
/// Endpoint abstraction: a source/sink of raw CAN frames independent of the
/// underlying transport (CAN driver, file replay, …).
pub mod io;
/// End-to-end wiring from raw frames to decoded values and back.
pub mod pipeline;
/// NMEA 2000 protocol implementation: CAN transport, fast packets,
/// frame classification, PGN registry, dispatch, lookup tables, and
/// subscription fan-out.
pub mod protocol;
//==================================================================================
