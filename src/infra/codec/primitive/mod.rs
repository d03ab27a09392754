//! Primitive byte-level codec: bounds-checked cursor and writer over
//! caller-owned buffers, plus the float-as-text encoding rule.
//!
//! Every function here operates on exactly one wire value and never looks
//! at a `MessageDescriptor` — the bool-packing and field-ordering logic
//! built on top of these primitives lives in `super::engine`.
use core::fmt;
use core::fmt::Write as _;

use crate::core::MAX_DYNAMIC_SIZE;
use crate::error::BoundsError;

/// Significant decimal digits kept when round-tripping an `f32` through its
/// scientific-notation text form (one digit before the point, this many
/// after: `1 + FLOAT_TEXT_PRECISION` significant digits total).
pub const FLOAT_TEXT_PRECISION: usize = 8;
/// Upper bound on the text form's length: sign, leading digit, point,
/// mantissa digits, exponent marker, exponent sign, up to two exponent
/// digits, plus slack for "NaN"/"inf"/"-inf".
pub const FLOAT_TEXT_CAP: usize = 32;

/// Bounds-checked read cursor over a byte span.
#[derive(Debug)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn check(&self, len: usize) -> Result<(), BoundsError> {
        if len <= self.remaining() {
            Ok(())
        } else {
            Err(BoundsError::OutOfBounds {
                asked: len,
                available: self.remaining(),
            })
        }
    }

    pub fn read_byte(&mut self) -> Result<u8, BoundsError> {
        self.check(1)?;
        let b = self.bytes[self.pos];
        self.pos += 1;
        Ok(b)
    }

    pub fn read_i32(&mut self) -> Result<i32, BoundsError> {
        self.check(4)?;
        let b = &self.bytes[self.pos..self.pos + 4];
        self.pos += 4;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], BoundsError> {
        self.check(len)?;
        let s = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(s)
    }
}

/// Bounds-checked write cursor over a caller-owned destination buffer.
#[derive(Debug)]
pub struct Writer<'a> {
    bytes: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn check(&self, len: usize) -> Result<(), BoundsError> {
        if len <= self.remaining() {
            Ok(())
        } else {
            Err(BoundsError::OutOfBounds {
                asked: len,
                available: self.remaining(),
            })
        }
    }

    pub fn write_byte(&mut self, b: u8) -> Result<(), BoundsError> {
        self.check(1)?;
        self.bytes[self.pos] = b;
        self.pos += 1;
        Ok(())
    }

    pub fn write_i32(&mut self, v: i32) -> Result<(), BoundsError> {
        self.check(4)?;
        self.bytes[self.pos..self.pos + 4].copy_from_slice(&v.to_le_bytes());
        self.pos += 4;
        Ok(())
    }

    pub fn write_slice(&mut self, data: &[u8]) -> Result<(), BoundsError> {
        self.check(data.len())?;
        self.bytes[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }
}

/// Fixed-capacity text buffer, used as a `core::fmt::Write` target so float
/// formatting never touches an allocator.
struct TextBuf {
    data: [u8; FLOAT_TEXT_CAP],
    len: usize,
}

impl TextBuf {
    fn new() -> Self {
        Self {
            data: [0; FLOAT_TEXT_CAP],
            len: 0,
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl fmt::Write for TextBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.len + bytes.len() > self.data.len() {
            return Err(fmt::Error);
        }
        self.data[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Render `f` into its wire text form: `NaN`/`inf`/`-inf` for the special
/// values, scientific notation at `FLOAT_TEXT_PRECISION` digits otherwise.
/// Returns the number of valid bytes in the fixed buffer.
pub fn encode_float_text(f: f32) -> ([u8; FLOAT_TEXT_CAP], usize) {
    let mut buf = TextBuf::new();
    let result = if f.is_nan() {
        buf.write_str("NaN")
    } else if f.is_infinite() {
        write!(buf, "{}", f)
    } else {
        write!(buf, "{:.*e}", FLOAT_TEXT_PRECISION, f)
    };
    debug_assert!(result.is_ok(), "float text overflowed fixed buffer");
    (buf.data, buf.len)
}

/// Parse a float's wire text form back into an `f32`. Returns `None` if the
/// bytes are not valid UTF-8 or not a parseable float literal.
pub fn decode_float_text(text: &[u8]) -> Option<f32> {
    core::str::from_utf8(text).ok()?.parse::<f32>().ok()
}

/// Truncate `slice` to `MAX_DYNAMIC_SIZE` elements, as the one-byte length
/// prefix requires of every dynamic field's element count.
pub const fn fits_dynamic_length(len: usize) -> bool {
    len <= MAX_DYNAMIC_SIZE
}
