//! Public traits exposed by the codec engine. They decouple generated
//! message structs from the serialization/deserialization logic and
//! provide a uniform API to callers.
use super::engine;
use super::primitive::{Reader, Writer};
use crate::core::{FieldValue, MessageDescriptor, HEADER_SIZE, PACKET_SIZE, PART_SOLE};
use crate::error::EncodeError;

//==================================================================================FIELD_ACCESS
/// Lets the engine and reflection layer read/write a message's fields by
/// name without knowing the concrete generated struct. Implementations are
/// code-generated from the schema.
pub trait FieldAccess {
    /// Read the current value of a field.
    ///
    /// Returns `None` only if `name` is not one of this message's fields;
    /// generated code never calls this with a name outside its own schema.
    fn get(&self, name: &'static str) -> Option<FieldValue>;

    /// Write a field's value. Returns `None` if `name` does not exist or
    /// `value`'s variant does not match the field's declared kind.
    fn set(&mut self, name: &'static str, value: FieldValue) -> Option<()>;
}

//==================================================================================MESSAGE
/// Implemented by every generated message struct. Provides encoding,
/// decoding, and equality purely in terms of `FieldAccess` and the static
/// `MessageDescriptor` the schema compiler produced for this type.
pub trait Message: FieldAccess + Sized {
    /// Static facts about this message's layout, produced by the schema
    /// compiler at build time.
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// The unique, nonzero wire tag for this message type.
    fn type_id(&self) -> u16 {
        self.descriptor().type_id
    }

    /// Size of `to_bytes()`'s output: the 4-byte logical header plus every
    /// field's current wire size.
    fn serialized_size(&self) -> usize {
        HEADER_SIZE + engine::fields_size(self, self.descriptor())
    }

    /// Serialize into a freshly allocated array-backed buffer is not
    /// available in `no_std`; callers provide storage sized by
    /// `serialized_size()` and call [`Message::to_bytes`] instead.
    fn to_bytes(&self, dest: &mut [u8]) -> Result<(), EncodeError> {
        let expected = self.serialized_size();
        if dest.len() != expected {
            return Err(EncodeError::BufferSizeMismatch {
                expected,
                got: dest.len(),
            });
        }

        let size_byte = expected.min(PACKET_SIZE) as u8;
        let part_byte = if expected <= PACKET_SIZE { PART_SOLE } else { 0 };
        let [type_lo, type_hi] = self.type_id().to_le_bytes();
        dest[0] = size_byte;
        dest[1] = part_byte;
        dest[2] = type_lo;
        dest[3] = type_hi;

        let mut w = Writer::new(&mut dest[HEADER_SIZE..]);
        engine::encode_fields(self, self.descriptor(), &mut w)
    }

    /// Parse the logical form (header + field bytes) produced by
    /// [`Message::to_bytes`]. Returns `false` on any bounds violation, a
    /// type-tag mismatch, or (for fully static messages) leftover bytes.
    fn from_bytes(&mut self, src: &[u8]) -> bool {
        if src.len() < HEADER_SIZE {
            return false;
        }
        let type_id = u16::from_le_bytes([src[2], src[3]]);
        if type_id != self.type_id() {
            return false;
        }

        let descriptor = self.descriptor();
        let mut r = Reader::new(&src[HEADER_SIZE..]);
        if engine::decode_fields(self, descriptor, &mut r).is_err() {
            return false;
        }
        if descriptor.has_static_size && r.remaining() != 0 {
            return false;
        }
        true
    }

    /// Structural equality over every declared field, with the
    /// NaN-equals-NaN exemption `FieldValue::value_eq` applies to floats.
    fn messages_equal(&self, other: &Self) -> bool {
        self.descriptor().fields.iter().all(|f| {
            match (self.get(f.name), other.get(f.name)) {
                (Some(a), Some(b)) => a.value_eq(&b),
                _ => false,
            }
        })
    }
}
