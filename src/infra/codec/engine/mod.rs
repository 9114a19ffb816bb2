//! Generic descriptor-driven (de)serialization engine. Walks a
//! [`PgnDescriptor`]'s field list and drives a [`BitReader`]/[`BitWriter`]
//! against a concrete struct through the [`FieldAccess`] trait, so that
//! adding a PGN to the registry never requires touching this module.
use alloc::string::String;

use crate::core::{FieldDescriptor, FieldKind, PgnBytes, PgnDescriptor, PgnValue};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{trim_string_fix, BitReader, BitWriter};
use crate::infra::codec::traits::FieldAccess;

/// Populate `instance` by reading `payload` according to `descriptor`.
pub fn deserialize_into<T: FieldAccess>(
    instance: &mut T,
    payload: &[u8],
    descriptor: &PgnDescriptor,
) -> Result<(), DeserializationError> {
    let mut reader = BitReader::new(payload);

    let repeating_start = descriptor
        .repeating_field_sets
        .iter()
        .map(|set| set.start_field_index)
        .min();

    for (index, field) in descriptor.fields.iter().enumerate() {
        if repeating_start == Some(index) {
            break;
        }
        read_field_into(instance, field, &mut reader)?;
    }

    for set in descriptor.repeating_field_sets {
        let count = match set.count_field_index {
            Some(count_idx) => match instance.field(descriptor.fields[count_idx].id) {
                Some(value) => pgn_value_to_u64(&value)
                    .map_err(|_| DeserializationError::DependencyFieldNotFound {
                        dep: descriptor.fields[count_idx].id,
                        desc: descriptor.id,
                    })? as usize,
                None => {
                    return Err(DeserializationError::DependencyFieldNotFound {
                        dep: descriptor.fields[count_idx].id,
                        desc: descriptor.id,
                    })
                }
            },
            None => set.max_repetitions,
        };
        let count = count.min(set.max_repetitions);
        instance.set_repetitive_count(set.array_id, count);

        for rep in 0..count {
            for field in &descriptor.fields[set.start_field_index..set.start_field_index + set.size] {
                let value = read_field_value(field, &mut reader)?;
                instance
                    .repetitive_field_mut(set.array_id, rep, field.id, value)
                    .ok_or(DeserializationError::FieldAssignmentFailed { desc: field.id })?;
            }
        }
    }

    Ok(())
}

fn read_field_into<T: FieldAccess>(
    instance: &mut T,
    field: &FieldDescriptor,
    reader: &mut BitReader,
) -> Result<(), DeserializationError> {
    let value = read_field_value(field, reader)?;
    if matches!(field.kind, FieldKind::Reserved | FieldKind::Spare) {
        return Ok(());
    }
    instance
        .field_mut(field.id, value)
        .ok_or(DeserializationError::FieldAssignmentFailed { desc: field.id })
}

/// Read a single field's raw bits and produce the typed [`PgnValue`], applying
/// the nullable-sentinel rule and resolution scaling where the field kind calls for it.
fn read_field_value(
    field: &FieldDescriptor,
    reader: &mut BitReader,
) -> Result<PgnValue, DeserializationError> {
    // Variable-length string kinds derive their own length from the stream
    // and never consult `bits_length`.
    if matches!(
        field.kind,
        FieldKind::StringLz | FieldKind::StringLau | FieldKind::StringVar
    ) {
        return read_variable_length_string(field, reader);
    }

    let bits = field
        .bits_length
        .ok_or(DeserializationError::InvalidFieldBits {
            field_name: field.id,
        })? as u8;

    match field.kind {
        FieldKind::Number | FieldKind::Duration | FieldKind::Mmsi | FieldKind::Time => {
            let signed = field.is_signed.unwrap_or(false);
            match field.resolution {
                Some(r) => {
                    let value = if signed {
                        reader.read_signed_resolution(bits, r)
                    } else {
                        reader.read_unsigned_resolution(bits, r)
                    }
                    .map_err(|err| DeserializationError::BitReaderError { err })?;
                    Ok(value.unwrap_or(PgnValue::Null))
                }
                None => {
                    if signed {
                        let value = reader
                            .read_signed(bits)
                            .map_err(|err| DeserializationError::BitReaderError { err })?;
                        Ok(signed_int_value(value, bits))
                    } else {
                        let value = reader
                            .read_unsigned(bits)
                            .map_err(|err| DeserializationError::BitReaderError { err })?;
                        Ok(unsigned_int_value(value, bits))
                    }
                }
            }
        }
        FieldKind::Float32 => {
            let value = reader
                .read_float32()
                .map_err(|err| DeserializationError::BitReaderError { err })?;
            Ok(PgnValue::F32(value))
        }
        FieldKind::Lookup | FieldKind::IndirectLookup | FieldKind::FieldtypeLookup => {
            let value = reader
                .read_unsigned(bits)
                .map_err(|err| DeserializationError::BitReaderError { err })?;
            Ok(unsigned_int_value(value, bits))
        }
        FieldKind::BitLookup | FieldKind::Pgn | FieldKind::Date | FieldKind::IsoName => {
            let raw = reader
                .read_u64(bits)
                .map_err(|err| DeserializationError::BitReaderError { err })?;
            Ok(unsigned_int_value(Some(raw), bits))
        }
        FieldKind::StringFix => {
            let raw = reader
                .read_string_fix(bits)
                .map_err(|err| DeserializationError::BitReaderError { err })?;
            let mut bytes = PgnBytes::new();
            bytes.copy_from_slice(trim_string_fix(raw));
            Ok(PgnValue::Bytes(bytes))
        }
        FieldKind::StringLz | FieldKind::StringLau | FieldKind::StringVar => {
            unreachable!("handled by read_variable_length_string above")
        }
        FieldKind::Binary => {
            let raw = reader
                .read_binary(bits)
                .map_err(|err| DeserializationError::BitReaderError { err })?;
            let mut bytes = PgnBytes::new();
            bytes.copy_from_slice(raw);
            Ok(PgnValue::Bytes(bytes))
        }
        FieldKind::Reserved | FieldKind::Spare => {
            reader
                .advance(bits)
                .map_err(|err| DeserializationError::BitReaderError { err })?;
            Ok(PgnValue::Ignored)
        }
        FieldKind::Decimal
        | FieldKind::KeyValue
        | FieldKind::Variable
        | FieldKind::FieldIndex
        | FieldKind::Unimplemented => Err(DeserializationError::UnsupportedFieldKind {
            field_kind: field.kind.clone(),
        }),
    }
}

fn read_variable_length_string(
    field: &FieldDescriptor,
    reader: &mut BitReader,
) -> Result<PgnValue, DeserializationError> {
    let raw = match field.kind {
        FieldKind::StringLz => reader
            .read_string_lz()
            .map_err(|err| DeserializationError::BitReaderError { err })?,
        FieldKind::StringLau => {
            reader
                .read_string_lau()
                .map_err(|err| DeserializationError::BitReaderError { err })?
                .1
        }
        FieldKind::StringVar => reader
            .read_string_startstop()
            .map_err(|err| DeserializationError::BitReaderError { err })?,
        _ => unreachable!(),
    };
    let mut bytes = PgnBytes::new();
    bytes.copy_from_slice(raw);
    Ok(PgnValue::Bytes(bytes))
}

fn signed_int_value(value: Option<i64>, bits: u8) -> PgnValue {
    match value {
        None => PgnValue::Null,
        Some(v) => {
            if bits <= 8 {
                PgnValue::I8(v as i8)
            } else if bits <= 16 {
                PgnValue::I16(v as i16)
            } else if bits <= 32 {
                PgnValue::I32(v as i32)
            } else {
                PgnValue::I64(v)
            }
        }
    }
}

fn unsigned_int_value(value: Option<u64>, bits: u8) -> PgnValue {
    match value {
        None => PgnValue::Null,
        Some(v) => {
            if bits <= 8 {
                PgnValue::U8(v as u8)
            } else if bits <= 16 {
                PgnValue::U16(v as u16)
            } else if bits <= 32 {
                PgnValue::U32(v as u32)
            } else {
                PgnValue::U64(v)
            }
        }
    }
}

/// Serialize `instance` into `buffer`, returning the number of bytes written.
pub fn serialize<T: FieldAccess>(
    instance: &T,
    buffer: &mut [u8],
    descriptor: &PgnDescriptor,
) -> Result<usize, SerializationError> {
    let mut writer = BitWriter::new(buffer);

    let repeating_start = descriptor
        .repeating_field_sets
        .iter()
        .map(|set| set.start_field_index)
        .min();

    for (index, field) in descriptor.fields.iter().enumerate() {
        if repeating_start == Some(index) {
            break;
        }
        write_field(instance, field, &mut writer)?;
    }

    for set in descriptor.repeating_field_sets {
        let count = instance.repetitive_count(set.array_id).unwrap_or(0);
        for rep in 0..count {
            for field in &descriptor.fields[set.start_field_index..set.start_field_index + set.size] {
                let value = instance
                    .repetitive_field(set.array_id, rep, field.id)
                    .ok_or(SerializationError::FieldNotFound { field_id: field.id })?;
                write_value(&value, field, &mut writer)?;
            }
        }
    }

    Ok((writer.bit_cursor() + 7) / 8)
}

fn write_field<T: FieldAccess>(
    instance: &T,
    field: &FieldDescriptor,
    writer: &mut BitWriter,
) -> Result<(), SerializationError> {
    if matches!(field.kind, FieldKind::Reserved) {
        let bits = field
            .bits_length
            .ok_or(SerializationError::InvalidFieldBits {
                field_name: field.id,
            })? as u8;
        writer
            .advance(bits)
            .map_err(|err| SerializationError::BitWriteError { err })?;
        return Ok(());
    }
    let value = instance
        .field(field.id)
        .ok_or(SerializationError::FieldNotFound { field_id: field.id })?;
    write_value(&value, field, writer)
}

fn write_value(
    value: &PgnValue,
    field: &FieldDescriptor,
    writer: &mut BitWriter,
) -> Result<(), SerializationError> {
    if matches!(
        field.kind,
        FieldKind::StringLz | FieldKind::StringLau | FieldKind::StringVar
    ) {
        return write_variable_length_string(value, field, writer);
    }

    let bits = field
        .bits_length
        .ok_or(SerializationError::InvalidFieldBits {
            field_name: field.id,
        })? as u8;

    match field.kind {
        FieldKind::Number | FieldKind::Duration | FieldKind::Mmsi | FieldKind::Time => {
            let signed = field.is_signed.unwrap_or(false);
            match field.resolution {
                Some(r) => {
                    let as_f64 = match value {
                        PgnValue::Null => None,
                        other => Some(pgn_value_to_f64(other)?),
                    };
                    if signed {
                        writer.write_signed_resolution(as_f64, bits, r)
                    } else {
                        writer.write_unsigned_resolution(as_f64, bits, r)
                    }
                    .map_err(|err| SerializationError::BitWriteError { err })
                }
                None => {
                    if signed {
                        let as_i64 = match value {
                            PgnValue::Null => None,
                            other => Some(pgn_value_to_i64(other)?),
                        };
                        writer
                            .write_signed(as_i64, bits)
                            .map_err(|err| SerializationError::BitWriteError { err })
                    } else {
                        let as_u64 = match value {
                            PgnValue::Null => None,
                            other => Some(pgn_value_to_u64(other)?),
                        };
                        writer
                            .write_unsigned(as_u64, bits)
                            .map_err(|err| SerializationError::BitWriteError { err })
                    }
                }
            }
        }
        FieldKind::Float32 => {
            let as_f32 = pgn_value_to_f64(value)? as f32;
            writer
                .write_float32(as_f32)
                .map_err(|err| SerializationError::BitWriteError { err })
        }
        FieldKind::Lookup | FieldKind::IndirectLookup | FieldKind::FieldtypeLookup => {
            let as_u64 = match value {
                PgnValue::Null => None,
                other => Some(pgn_value_to_u64(other)?),
            };
            writer
                .write_unsigned(as_u64, bits)
                .map_err(|err| SerializationError::BitWriteError { err })
        }
        FieldKind::BitLookup | FieldKind::Pgn | FieldKind::Date | FieldKind::IsoName => {
            let raw = pgn_value_to_u64(value)?;
            writer
                .write_u64(raw, bits)
                .map_err(|err| SerializationError::BitWriteError { err })
        }
        FieldKind::StringFix => match value {
            PgnValue::Bytes(bytes) => writer
                .write_string_fix(bytes.as_slice(), (bits / 8) as usize)
                .map_err(|err| SerializationError::BitWriteError { err }),
            other => Err(SerializationError::CodecError {
                source: crate::error::CodecError::DataTypeMismatch {
                    value: other.clone(),
                    func: "write_value/StringFix",
                },
            }),
        },
        FieldKind::StringLz | FieldKind::StringLau | FieldKind::StringVar => {
            unreachable!("handled by write_variable_length_string above")
        }
        FieldKind::Binary => match value {
            PgnValue::Bytes(bytes) => writer
                .write_binary(bytes.as_slice())
                .map_err(|err| SerializationError::BitWriteError { err }),
            other => Err(SerializationError::CodecError {
                source: crate::error::CodecError::DataTypeMismatch {
                    value: other.clone(),
                    func: "write_value/Binary",
                },
            }),
        },
        FieldKind::Reserved | FieldKind::Spare => writer
            .advance(bits)
            .map_err(|err| SerializationError::BitWriteError { err }),
        FieldKind::Decimal
        | FieldKind::KeyValue
        | FieldKind::Variable
        | FieldKind::FieldIndex
        | FieldKind::Unimplemented => Err(SerializationError::UnsupportedFieldKind),
    }
}

fn write_variable_length_string(
    value: &PgnValue,
    field: &FieldDescriptor,
    writer: &mut BitWriter,
) -> Result<(), SerializationError> {
    let bytes = match value {
        PgnValue::Bytes(bytes) => bytes,
        other => {
            return Err(SerializationError::CodecError {
                source: crate::error::CodecError::DataTypeMismatch {
                    value: other.clone(),
                    func: "write_variable_length_string",
                },
            })
        }
    };
    match field.kind {
        FieldKind::StringLz => writer.write_string_lz(bytes.as_slice()),
        FieldKind::StringLau => writer.write_string_lau(1, bytes.as_slice()),
        FieldKind::StringVar => writer.write_string_startstop(bytes.as_slice()),
        _ => unreachable!(),
    }
    .map_err(|err| SerializationError::BitWriteError { err })
}

pub(crate) fn pgn_value_to_f64(value: &PgnValue) -> Result<f64, SerializationError> {
    Ok(match value {
        PgnValue::U64(v) => *v as f64,
        PgnValue::U32(v) => *v as f64,
        PgnValue::U16(v) => *v as f64,
        PgnValue::U8(v) => *v as f64,
        PgnValue::I64(v) => *v as f64,
        PgnValue::I32(v) => *v as f64,
        PgnValue::I16(v) => *v as f64,
        PgnValue::I8(v) => *v as f64,
        PgnValue::F64(v) => *v,
        PgnValue::F32(v) => *v as f64,
        other => {
            return Err(SerializationError::CodecError {
                source: crate::error::CodecError::DataTypeMismatch {
                    value: other.clone(),
                    func: "pgn_value_to_f64",
                },
            })
        }
    })
}

pub(crate) fn pgn_value_to_i64(value: &PgnValue) -> Result<i64, SerializationError> {
    Ok(match value {
        PgnValue::I64(v) => *v,
        PgnValue::I32(v) => *v as i64,
        PgnValue::I16(v) => *v as i64,
        PgnValue::I8(v) => *v as i64,
        PgnValue::U64(v) => *v as i64,
        PgnValue::U32(v) => *v as i64,
        PgnValue::U16(v) => *v as i64,
        PgnValue::U8(v) => *v as i64,
        other => {
            return Err(SerializationError::CodecError {
                source: crate::error::CodecError::DataTypeMismatch {
                    value: other.clone(),
                    func: "pgn_value_to_i64",
                },
            })
        }
    })
}

pub(crate) fn pgn_value_to_u64(value: &PgnValue) -> Result<u64, SerializationError> {
    Ok(match value {
        PgnValue::U64(v) => *v,
        PgnValue::U32(v) => *v as u64,
        PgnValue::U16(v) => *v as u64,
        PgnValue::U8(v) => *v as u64,
        PgnValue::I64(v) => *v as u64,
        PgnValue::I32(v) => *v as u64,
        PgnValue::I16(v) => *v as u64,
        PgnValue::I8(v) => *v as u64,
        other => {
            return Err(SerializationError::CodecError {
                source: crate::error::CodecError::DataTypeMismatch {
                    value: other.clone(),
                    func: "pgn_value_to_u64",
                },
            })
        }
    })
}

/// Lossy textual dump of a field's value, used only by diagnostic formatting.
#[allow(dead_code)]
pub(crate) fn pgn_value_to_string(value: &PgnValue) -> String {
    match value {
        PgnValue::Bytes(bytes) => String::from_utf8_lossy(bytes.as_slice()).into_owned(),
        other => alloc::format!("{other:?}"),
    }
}
