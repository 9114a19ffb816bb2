//! RAW log line codec (§6.3): `<ISO8601 UTC>,<priority>,<pgn>,<source>,
//! <target>,<length>,<hex>,<hex>,...` with hex bytes as two-digit lowercase.
//! Used by the logger endpoint on write and the converter on read. Reading
//! or writing the file itself is an endpoint concern outside this crate;
//! this module is the pure, allocation-only line codec every such adapter
//! needs identically.
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::LogLineError;
use crate::protocol::packet::PacketInfo;

/// One parsed RAW log line. `timestamp` is kept as the original ISO8601
/// text — this crate has no wall clock and never interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLogLine {
    pub timestamp: String,
    pub info: PacketInfo,
    pub data: Vec<u8>,
}

/// Render one RAW log line. `timestamp` must already be formatted as
/// ISO8601 UTC by the caller.
pub fn format_line(timestamp: &str, info: &PacketInfo, data: &[u8]) -> String {
    let mut line = format!(
        "{timestamp},{},{},{},{},{}",
        info.priority, info.pgn, info.source, info.target, info.length
    );
    for byte in data {
        let _ = write!(line, ",{byte:02x}");
    }
    line
}

/// Parse one RAW log line produced by [`format_line`].
pub fn parse_line(line: &str) -> Result<RawLogLine, LogLineError> {
    let mut fields = line.trim().split(',');

    let timestamp = fields.next().ok_or(LogLineError::WrongFieldCount)?;
    let priority = next_field(&mut fields)?;
    let pgn = next_field(&mut fields)?;
    let source = next_field(&mut fields)?;
    let target = next_field(&mut fields)?;
    let length: u8 = next_field(&mut fields)?;

    let mut data = Vec::with_capacity(length as usize);
    for field in fields {
        let byte = u8::from_str_radix(field, 16).map_err(|_| LogLineError::BadNumber)?;
        data.push(byte);
    }
    if data.len() != length as usize {
        return Err(LogLineError::WrongFieldCount);
    }

    Ok(RawLogLine {
        timestamp: String::from(timestamp),
        info: PacketInfo {
            timestamp: 0,
            priority,
            pgn,
            source,
            target,
            length,
        },
        data,
    })
}

fn next_field<'a, T: core::str::FromStr>(
    fields: &mut core::str::Split<'a, char>,
) -> Result<T, LogLineError> {
    fields
        .next()
        .ok_or(LogLineError::WrongFieldCount)?
        .trim()
        .parse()
        .map_err(|_| LogLineError::BadNumber)
}
