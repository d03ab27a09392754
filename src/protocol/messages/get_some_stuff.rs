//! A message with no fields: fixed 4-byte wire form (header only).
//! Demonstrates the fully-static, always-single-part case.
use crate::core::{FieldValue, MessageDescriptor};
use crate::infra::codec::traits::{FieldAccess, Message};
use crate::schema::GET_SOME_STUFF_DESCRIPTOR;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetSomeStuff;

impl FieldAccess for GetSomeStuff {
    fn get(&self, _name: &'static str) -> Option<FieldValue> {
        None
    }

    fn set(&mut self, _name: &'static str, _value: FieldValue) -> Option<()> {
        None
    }
}

impl Message for GetSomeStuff {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &GET_SOME_STUFF_DESCRIPTOR
    }
}
