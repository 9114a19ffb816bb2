//! High-level components of the NMEA 2000 protocol: frame classification,
//! fast-packet transport, the PGN registry and dispatcher, lookup tables,
//! message structures, subscription fan-out, and the RAW/replay log codecs.
pub mod classifier;
pub mod dispatcher;
pub mod lookups;
pub mod messages;
pub mod packet;
pub mod raw_log;
pub mod registry;
pub mod replay_log;
pub mod subscription;
pub mod transport;
