//! Replay log line parser (§6.2): `" (%f)  %s  %8X   [%d]  %X %X %X %X %X
//! %X %X %X"` — seconds since start, an interface label, the 29-bit CAN id
//! in hex, the data length in decimal, and eight hex payload bytes. Blank
//! lines are the caller's (the file-replay endpoint's) to skip; every
//! replay-capable endpoint needs identical parsing semantics, so the parser
//! itself lives here rather than being duplicated per adapter.
use alloc::string::String;

use crate::error::LogLineError;
use crate::io::Frame;

/// One parsed replay log line: a [`Frame`] plus the relative time, in
/// seconds since the start of the log, at which it should be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayLine {
    pub time_delta: f32,
    pub interface: String,
    pub frame: Frame,
}

/// Parse one non-blank replay log line.
pub fn parse_line(line: &str) -> Result<ReplayLine, LogLineError> {
    let line = line.trim();

    let open = line.find('(').ok_or(LogLineError::WrongFieldCount)?;
    let close = line[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or(LogLineError::WrongFieldCount)?;
    let time_delta: f32 = line[open + 1..close]
        .trim()
        .parse()
        .map_err(|_| LogLineError::BadNumber)?;

    let mut tokens = line[close + 1..].split_whitespace();

    let interface = tokens.next().ok_or(LogLineError::WrongFieldCount)?;
    let id = u32::from_str_radix(tokens.next().ok_or(LogLineError::WrongFieldCount)?, 16)
        .map_err(|_| LogLineError::BadNumber)?;

    let length_token = tokens.next().ok_or(LogLineError::WrongFieldCount)?;
    let length_text = length_token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(LogLineError::WrongFieldCount)?;
    let length: u8 = length_text.parse().map_err(|_| LogLineError::BadNumber)?;

    let mut data = [0u8; 8];
    for slot in data.iter_mut() {
        let token = tokens.next().ok_or(LogLineError::WrongFieldCount)?;
        *slot = u8::from_str_radix(token, 16).map_err(|_| LogLineError::BadNumber)?;
    }

    Ok(ReplayLine {
        time_delta,
        interface: String::from(interface),
        frame: Frame { id, length, data },
    })
}
