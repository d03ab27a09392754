//! Error definitions shared across the codec, framer, and reflection layers.
//! Each type models one specific failure scenario named in the wire-protocol
//! error taxonomy (short-buffer, oversize-dynamic, protocol-violation, …).
use thiserror_no_std::Error;

//================================================================================BOUNDS_ERRORS

#[derive(Debug, Error)]
/// Errors raised while reading a fixed-width field off a byte cursor.
pub enum BoundsError {
    /// Cursor plus field width would read past the end of the input span.
    #[error("attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}

//================================================================================CODEC_ERRORS

#[derive(Debug, Error)]
/// Issues encountered while serializing a message into a buffer.
pub enum EncodeError {
    /// Destination buffer length does not equal `serialized_size()`.
    #[error("destination buffer size mismatch: expected {expected}, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// A string field contains a code point outside the Basic Multilingual Plane.
    #[error("field {field_name} contains a non-BMP character")]
    NonBmpChar { field_name: &'static str },
    /// A dynamic field's length exceeds the one-byte length prefix's range.
    #[error("field {field_name} is oversize: {len} exceeds the 255-unit dynamic field limit")]
    Oversize { field_name: &'static str, len: usize },
    /// Field descriptor named a field missing from the value table.
    #[error("field {field_name} not found")]
    FieldNotFound { field_name: &'static str },
    /// Low-level bounds failure while writing into the destination.
    #[error("bounds error while writing {field_name}: {source}")]
    Bounds {
        field_name: &'static str,
        #[source]
        source: BoundsError,
    },
}

#[derive(Debug, Error)]
/// Errors raised while deserializing a byte span into a message.
pub enum DecodeError {
    /// A decode step read past the end of the input span.
    #[error("short buffer: {source}")]
    ShortBuffer {
        #[source]
        source: BoundsError,
    },
    /// A float field's ASCII text could not be parsed back into an `f32`.
    #[error("float text for {field_name} could not be parsed: {text:?}")]
    FloatTextUnparseable {
        field_name: &'static str,
        text: [u8; 32],
        text_len: usize,
    },
    /// Field descriptor named a field missing from the value table.
    #[error("field {field_name} not found")]
    FieldNotFound { field_name: &'static str },
}

impl From<BoundsError> for DecodeError {
    fn from(source: BoundsError) -> Self {
        DecodeError::ShortBuffer { source }
    }
}

//================================================================================FRAMER_ERRORS

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Protocol violations detected by the packet framer's receive state
/// machine (§4.4). All are terminal for the current logical message.
pub enum FramerError {
    /// Header declared `size == 0`.
    #[error("invalid packet size 0")]
    InvalidSize,
    /// A header arrived with a `part` value not valid from the current state.
    #[error("unexpected part byte {part} in state {state}")]
    UnexpectedPart { part: u8, state: &'static str },
    /// A continuation packet's type tag did not match the first packet's.
    #[error("type tag changed mid-multipart: expected {expected}, got {got}")]
    TypeMismatch { expected: u16, got: u16 },
    /// A continuation packet's `size` byte did not match its actual payload.
    #[error("declared packet size {declared} does not match header size {header_size}")]
    InvalidPacketSize { declared: u8, header_size: usize },
    /// Reassembled message would exceed the receiver's fixed buffer.
    #[error("reassembly buffer overflow: needed {needed}, capacity {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },
}

//================================================================================REFLECTION_ERRORS

#[derive(Debug, Error)]
/// Errors raised by the reflection/meta layer.
pub enum ReflectionError {
    /// No message type is registered under the requested type id.
    #[error("no message registered for type id {type_id}")]
    UnknownTypeId { type_id: u16 },
    /// Field name not present on the message (or present with a different kind).
    #[error("field {field_name} not found or type mismatch")]
    FieldMismatch { field_name: &'static str },
}
