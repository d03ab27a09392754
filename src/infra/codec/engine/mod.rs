//! Generic encode/decode engine: walks a message's
//! static `MessageDescriptor` field-by-field, reading and writing values
//! through `FieldAccess` so no per-message code is required here. Bool
//! fields are packed or emitted as lone bytes exactly per the `bool_packs`
//! table the schema compiler produced (see `core::BoolPackEntry`).
use super::primitive::{decode_float_text, encode_float_text, fits_dynamic_length, Reader, Writer};
use super::traits::FieldAccess;
use crate::core::{BoolPackEntry, FieldKind, FieldValue, MessageDescriptor, UmbBytes, UmbString};
use crate::error::{DecodeError, EncodeError};

fn pack_entry(d: &'static MessageDescriptor, field_index: usize) -> Option<&'static BoolPackEntry> {
    d.bool_packs.iter().find(|e| e.field_index == field_index)
}

/// Current wire size of every field, in declaration order, excluding the
/// 4-byte logical header. Equal to `d.static_size - HEADER_SIZE` for
/// static messages; computed from live values otherwise.
pub fn fields_size<T: FieldAccess>(msg: &T, d: &'static MessageDescriptor) -> usize {
    use crate::core::HEADER_SIZE;
    if d.has_static_size {
        return d.static_size - HEADER_SIZE;
    }

    let mut size = d.static_part - HEADER_SIZE;
    for f in d.fields.iter().filter(|f| f.kind.is_dynamic()) {
        size += match msg.get(f.name) {
            Some(FieldValue::Float(v)) => encode_float_text(v).1,
            Some(FieldValue::String(s)) => s.len() * 2,
            Some(FieldValue::Bytes(b)) => b.len(),
            _ => 0,
        };
    }
    size
}

/// Encode every field of `msg` into `w`, applying the bool-pack layout.
pub fn encode_fields<T: FieldAccess>(
    msg: &T,
    d: &'static MessageDescriptor,
    w: &mut Writer,
) -> Result<(), EncodeError> {
    let mut pack_byte: u8 = 0;

    for (index, f) in d.fields.iter().enumerate() {
        match f.kind {
            FieldKind::Bool => {
                let FieldValue::Bool(value) = msg
                    .get(f.name)
                    .ok_or(EncodeError::FieldNotFound { field_name: f.name })?
                else {
                    return Err(EncodeError::FieldNotFound { field_name: f.name });
                };

                if let Some(entry) = pack_entry(d, index) {
                    if value {
                        pack_byte |= 1 << entry.bit_index;
                    }
                    if entry.boundary || entry.last {
                        w.write_byte(pack_byte)
                            .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
                        pack_byte = 0;
                    }
                } else {
                    w.write_byte(value as u8)
                        .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
                }
            }
            FieldKind::Byte => {
                let FieldValue::Byte(value) = msg
                    .get(f.name)
                    .ok_or(EncodeError::FieldNotFound { field_name: f.name })?
                else {
                    return Err(EncodeError::FieldNotFound { field_name: f.name });
                };
                w.write_byte(value)
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
            }
            FieldKind::Int => {
                let FieldValue::Int(value) = msg
                    .get(f.name)
                    .ok_or(EncodeError::FieldNotFound { field_name: f.name })?
                else {
                    return Err(EncodeError::FieldNotFound { field_name: f.name });
                };
                w.write_i32(value)
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
            }
            FieldKind::Float => {
                let FieldValue::Float(value) = msg
                    .get(f.name)
                    .ok_or(EncodeError::FieldNotFound { field_name: f.name })?
                else {
                    return Err(EncodeError::FieldNotFound { field_name: f.name });
                };
                let (text, len) = encode_float_text(value);
                w.write_byte(len as u8)
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
                w.write_slice(&text[..len])
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
            }
            FieldKind::String => {
                let FieldValue::String(value) = msg
                    .get(f.name)
                    .ok_or(EncodeError::FieldNotFound { field_name: f.name })?
                else {
                    return Err(EncodeError::FieldNotFound { field_name: f.name });
                };
                if !fits_dynamic_length(value.len()) {
                    return Err(EncodeError::Oversize { field_name: f.name, len: value.len() });
                }
                for unit in value.code_units() {
                    if (0xD800..=0xDFFF).contains(unit) {
                        return Err(EncodeError::NonBmpChar { field_name: f.name });
                    }
                }
                w.write_byte(value.len() as u8)
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
                for unit in value.code_units() {
                    w.write_slice(&unit.to_le_bytes())
                        .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
                }
            }
            FieldKind::Bytes => {
                let FieldValue::Bytes(value) = msg
                    .get(f.name)
                    .ok_or(EncodeError::FieldNotFound { field_name: f.name })?
                else {
                    return Err(EncodeError::FieldNotFound { field_name: f.name });
                };
                if !fits_dynamic_length(value.len()) {
                    return Err(EncodeError::Oversize { field_name: f.name, len: value.len() });
                }
                w.write_byte(value.len() as u8)
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
                w.write_slice(value.as_slice())
                    .map_err(|source| EncodeError::Bounds { field_name: f.name, source })?;
            }
        }
    }

    Ok(())
}

/// Decode every field of `d` from `r`, writing results into `msg` through
/// `FieldAccess::set`, applying the bool-pack layout in reverse.
pub fn decode_fields<T: FieldAccess>(
    msg: &mut T,
    d: &'static MessageDescriptor,
    r: &mut Reader,
) -> Result<(), DecodeError> {
    let mut pack_byte: u8 = 0;

    for (index, f) in d.fields.iter().enumerate() {
        let value = match f.kind {
            FieldKind::Bool => {
                let bit = if let Some(entry) = pack_entry(d, index) {
                    if entry.bit_index == 0 {
                        pack_byte = r.read_byte()?;
                    }
                    (pack_byte >> entry.bit_index) & 1 != 0
                } else {
                    r.read_byte()? != 0
                };
                FieldValue::Bool(bit)
            }
            FieldKind::Byte => FieldValue::Byte(r.read_byte()?),
            FieldKind::Int => FieldValue::Int(r.read_i32()?),
            FieldKind::Float => {
                let len = r.read_byte()? as usize;
                let text = r.read_slice(len)?;
                let parsed = decode_float_text(text).ok_or(DecodeError::FloatTextUnparseable {
                    field_name: f.name,
                    text: pad_float_text(text),
                    text_len: text.len(),
                })?;
                FieldValue::Float(parsed)
            }
            FieldKind::String => {
                let unit_count = r.read_byte()? as usize;
                let bytes = r.read_slice(unit_count * 2)?;
                let mut units = [0u16; 255];
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    units[i] = u16::from_le_bytes([pair[0], pair[1]]);
                }
                // unit_count is a single byte, so it can never exceed MAX_DYNAMIC_SIZE.
                FieldValue::String(UmbString::from_units(&units[..unit_count]).expect("length byte is bounded to 255"))
            }
            FieldKind::Bytes => {
                let len = r.read_byte()? as usize;
                let bytes = r.read_slice(len)?;
                // len is a single byte, so it can never exceed MAX_DYNAMIC_SIZE.
                FieldValue::Bytes(UmbBytes::from_slice(bytes).expect("length byte is bounded to 255"))
            }
        };

        msg.set(f.name, value)
            .ok_or(DecodeError::FieldNotFound { field_name: f.name })?;
    }

    Ok(())
}

fn pad_float_text(text: &[u8]) -> [u8; 32] {
    let mut buf = [0u8; 32];
    let len = text.len().min(32);
    buf[..len].copy_from_slice(&text[..len]);
    buf
}
