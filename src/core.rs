//! Defines the "data contract" between `build.rs` (the schema compiler) and
//! the serialization/deserialization engine (the interpreter).
//!
//! `build.rs` generates static descriptors that implement this contract.
//! The `engine` module consumes those descriptors to encode or decode
//! messages field by field.
#![allow(dead_code)]

/// Total packet size in bytes, header included. `size ∈ [4, 255]`.
pub const PACKET_SIZE: usize = 255;
/// Size of the 4-byte packet header (`size`, `part`, `type_lo`, `type_hi`).
pub const HEADER_SIZE: usize = 4;
/// Payload capacity of a single intermediate multipart packet
/// (`PACKET_SIZE - HEADER_SIZE`).
pub const PAYLOAD_CAPACITY: usize = PACKET_SIZE - HEADER_SIZE;
/// Maximum length byte value for any dynamic field (string/bytes/float-text).
pub const MAX_DYNAMIC_SIZE: usize = 255;
/// Number of boolean bits packed per byte.
pub const BOOLS_PER_BYTE: usize = 8;
/// `part` value marking the final packet of a multipart message.
pub const PART_MULTIPART_END: u8 = 254;
/// `part` value marking the sole packet of a single-part message.
pub const PART_SOLE: u8 = 255;
/// Largest number of distinct message types the 16-bit tag space allows
/// (0 is reserved for "no message").
pub const MAX_MESSAGE_TYPES: u16 = u16::MAX - 1;
/// Fixed capacity of the packet assembler's reassembly buffer. Bounds how
/// large a multipart logical message the receiver can accept; comfortably
/// above any message built from the closed field-type set's capacities.
pub const MAX_REASSEMBLY_BUFFER: usize = 4096;

/// Semantic type of a field within a message. Mirrors the closed type set
/// from the schema (`byte`, `int`, `bool`, `float`, `string`, `bytes`).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    /// 8-bit unsigned integer.
    Byte,
    /// 32-bit signed little-endian integer.
    Int,
    /// Logical value, packed into shared bytes when consecutive (see `BoolPackEntry`).
    Bool,
    /// IEEE-754 32-bit float, coded as length-prefixed ASCII decimal text.
    Float,
    /// Length-prefixed sequence of 16-bit code units (BMP only), little-endian.
    String,
    /// Length-prefixed opaque byte sequence.
    Bytes,
}

impl FieldKind {
    /// Size in bytes of a statically-sized field kind; `None` for dynamic kinds.
    pub const fn static_size(self) -> Option<usize> {
        match self {
            FieldKind::Byte | FieldKind::Bool => Some(1),
            FieldKind::Int => Some(4),
            FieldKind::Float | FieldKind::String | FieldKind::Bytes => None,
        }
    }

    /// True for `string`/`bytes`/`float`: fields whose wire size depends on
    /// the current value and therefore carry a one-byte length header.
    pub const fn is_dynamic(self) -> bool {
        self.static_size().is_none()
    }
}

/// Descriptor for a single message field, produced by the schema compiler.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Field identifier as declared in the schema.
    pub name: &'static str,
    /// Semantic type for the field.
    pub kind: FieldKind,
    /// Index of this field within the message's field list.
    pub index: usize,
}

/// One entry of a message's bool-pack layout table.
///
/// A run of two or more consecutive boolean fields is packed into shared
/// bytes; a lone boolean (non-bool neighbors on both sides, or a pack of
/// length 1) is dropped from this table and emitted as a full byte instead.
#[derive(Debug, Clone, Copy)]
pub struct BoolPackEntry {
    /// Field index (into the message's field list) this entry describes.
    pub field_index: usize,
    /// Bit index within the owning packed byte, in `0..8`.
    pub bit_index: u8,
    /// Index of the packed byte within the message's bool-byte region.
    /// Counts bytes used by packs of length ≥ 2 *and* lone-bool bytes.
    pub byte_index: u8,
    /// True for the final boolean of a pack run.
    pub last: bool,
    /// True for the 8th boolean of a multi-byte pack (bit_index == 7),
    /// signalling generated code to flush the current byte.
    pub boundary: bool,
}

/// Derived, immutable per-message facts produced once by the schema
/// compiler at build time.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// Message identifier as declared in the schema.
    pub name: &'static str,
    /// Unique, nonzero 16-bit wire tag (0 is reserved for "no message").
    pub type_id: u16,
    /// Ordered field descriptors.
    pub fields: &'static [FieldDescriptor],
    /// Bool-pack layout table; entries for lone booleans are absent.
    pub bool_packs: &'static [BoolPackEntry],
    /// Count of bytes consumed by packed + lone-bool fields combined.
    pub total_pack_bytes: usize,
    /// True when every field has a fully determined wire size
    /// (`byte`, `int`, `bool`).
    pub has_static_size: bool,
    /// Exact serialized size when `has_static_size`; 0 otherwise.
    pub static_size: usize,
    /// Static prefix size for a dynamic message: header + static fields +
    /// one length byte per dynamic field. 0 when `has_static_size`.
    pub static_part: usize,
    /// `has_static_size && static_size <= PACKET_SIZE`.
    pub always_single_part: bool,
    /// Cached predicate: any field is `float`.
    pub has_float_fields: bool,
    /// Cached predicate: any field is `string`.
    pub has_string_fields: bool,
    /// Cached predicate: any field is `bytes`.
    pub has_bytes_fields: bool,
}

impl MessageDescriptor {
    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Value of a single field, used by the reflection layer and by the
/// generic encode/decode engine to move typed data without per-message code.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldValue {
    Byte(u8),
    Int(i32),
    Bool(bool),
    Float(f32),
    String(UmbString),
    Bytes(UmbBytes),
}

impl FieldValue {
    /// Structural equality with the NaN-equals-NaN exemption for floats,
    /// so that round-trip equality holds for messages carrying `NaN`.
    pub fn value_eq(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Float(a), FieldValue::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            _ => self == other,
        }
    }
}

/// Fixed-capacity byte buffer for dynamic `bytes` fields (`no_std`-friendly,
/// no heap allocation).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UmbBytes {
    len: usize,
    data: [u8; MAX_DYNAMIC_SIZE],
}

impl Default for UmbBytes {
    fn default() -> Self {
        Self::new()
    }
}

impl UmbBytes {
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; MAX_DYNAMIC_SIZE],
        }
    }

    /// Build a buffer from a slice. Returns `None` if `slice` is longer
    /// than `MAX_DYNAMIC_SIZE` rather than silently truncating it.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let mut buf = Self::new();
        if buf.copy_from_slice(slice) {
            Some(buf)
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies `slice` into the buffer. Returns `false` (leaving the
    /// buffer unchanged) if `slice.len() > MAX_DYNAMIC_SIZE`.
    #[inline]
    pub fn copy_from_slice(&mut self, slice: &[u8]) -> bool {
        if slice.len() > MAX_DYNAMIC_SIZE {
            return false;
        }
        self.data[..slice.len()].copy_from_slice(slice);
        self.len = slice.len();
        true
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// Fixed-capacity UCS-2 (BMP-only) string buffer for dynamic `string` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UmbString {
    len: usize,
    data: [u16; MAX_DYNAMIC_SIZE],
}

impl Default for UmbString {
    fn default() -> Self {
        Self::new()
    }
}

impl UmbString {
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [0; MAX_DYNAMIC_SIZE],
        }
    }

    /// Build from code units. Returns `None` if `units` is longer than
    /// `MAX_DYNAMIC_SIZE` rather than silently truncating it.
    pub fn from_units(units: &[u16]) -> Option<Self> {
        if units.len() > MAX_DYNAMIC_SIZE {
            return None;
        }
        let mut buf = Self::new();
        buf.data[..units.len()].copy_from_slice(units);
        buf.len = units.len();
        Some(buf)
    }

    /// Build from a `str`, rejecting any character outside the Basic
    /// Multilingual Plane (a surrogate pair would need two code units).
    pub fn from_str_bmp(s: &str) -> Option<Self> {
        let mut buf = Self::new();
        let mut n = 0usize;
        for c in s.chars() {
            let cp = c as u32;
            if cp > 0xFFFF || n >= MAX_DYNAMIC_SIZE {
                return None;
            }
            buf.data[n] = cp as u16;
            n += 1;
        }
        buf.len = n;
        Some(buf)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn code_units(&self) -> &[u16] {
        &self.data[..self.len]
    }
}
