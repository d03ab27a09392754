//! Hand-written message types and the reflection/meta layer built on
//! top of them.
//!
//! The schema compiler (`build.rs`) generates *data only*: the
//! [`MessageDescriptor`] statics under [`crate::schema`]. The two concrete
//! message types below, and the [`AnyMessage`] tagged union that lets a
//! caller dispatch on a wire type-id without knowing which message it is,
//! are written by hand against those descriptors — this is the seam
//! described as "a table mapping type-id → factory → trait object".
mod get_some_stuff;
mod sensor_sample;

pub use get_some_stuff::GetSomeStuff;
pub use sensor_sample::SensorSample;

use crate::core::{FieldDescriptor, FieldValue, MessageDescriptor};
use crate::infra::codec::traits::{FieldAccess, Message};
use crate::schema::{GET_SOME_STUFF_DESCRIPTOR, SENSOR_SAMPLE_DESCRIPTOR};

//==================================================================================ANY_MESSAGE

/// A tagged union over every message this schema compilation declared.
/// Lets code that only knows a wire type-id (e.g. the packet transport,
/// or a fuzzing harness) construct and drive the right concrete message
/// without a `match` at every call site.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMessage {
    GetSomeStuff(GetSomeStuff),
    SensorSample(SensorSample),
}

impl FieldAccess for AnyMessage {
    fn get(&self, name: &'static str) -> Option<FieldValue> {
        match self {
            AnyMessage::GetSomeStuff(m) => m.get(name),
            AnyMessage::SensorSample(m) => m.get(name),
        }
    }

    fn set(&mut self, name: &'static str, value: FieldValue) -> Option<()> {
        match self {
            AnyMessage::GetSomeStuff(m) => m.set(name, value),
            AnyMessage::SensorSample(m) => m.set(name, value),
        }
    }
}

impl Message for AnyMessage {
    fn descriptor(&self) -> &'static MessageDescriptor {
        match self {
            AnyMessage::GetSomeStuff(m) => m.descriptor(),
            AnyMessage::SensorSample(m) => m.descriptor(),
        }
    }
}

impl AnyMessage {
    /// Every field name and semantic type for the wrapped message, in
    /// declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.descriptor().fields
    }

    /// Typed read by field name, dispatched to the wrapped message.
    pub fn field(&self, name: &'static str) -> Option<FieldValue> {
        self.get(name)
    }

    /// Typed write by field name, dispatched to the wrapped message.
    pub fn set_field(&mut self, name: &'static str, value: FieldValue) -> Option<()> {
        self.set(name, value)
    }
}

//==================================================================================REFLECTION

/// Every message type-id this schema compilation declared, in declaration
/// (type-id) order.
pub const ALL_TYPE_IDS: &[u16] = &[
    GET_SOME_STUFF_DESCRIPTOR.type_id,
    SENSOR_SAMPLE_DESCRIPTOR.type_id,
];

/// Look up a message's static descriptor by its wire type-id.
pub fn descriptor_for(type_id: u16) -> Option<&'static MessageDescriptor> {
    if type_id == GET_SOME_STUFF_DESCRIPTOR.type_id {
        Some(&GET_SOME_STUFF_DESCRIPTOR)
    } else if type_id == SENSOR_SAMPLE_DESCRIPTOR.type_id {
        Some(&SENSOR_SAMPLE_DESCRIPTOR)
    } else {
        None
    }
}

/// Construct a fresh, zero-valued instance of the message registered under
/// `type_id`, wrapped in [`AnyMessage`] so callers can drive it uniformly.
/// This is the factory table §9's "tagged union... produced by the
/// generator alongside the factory table" calls for; the table itself is
/// hand-written since it's a two-arm match, not a data-shaped artifact.
pub fn new_by_type_id(type_id: u16) -> Option<AnyMessage> {
    if type_id == GET_SOME_STUFF_DESCRIPTOR.type_id {
        Some(AnyMessage::GetSomeStuff(GetSomeStuff))
    } else if type_id == SENSOR_SAMPLE_DESCRIPTOR.type_id {
        Some(AnyMessage::SensorSample(SensorSample::default()))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
