//! A message exercising every field kind, including a bool-pack run split
//! across two packed bytes (`a,b,c` form one byte, `e,f` a second) and the
//! three dynamic kinds: float, string, bytes.
use crate::core::{FieldValue, MessageDescriptor, UmbBytes, UmbString};
use crate::infra::codec::traits::{FieldAccess, Message};
use crate::schema::SENSOR_SAMPLE_DESCRIPTOR;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorSample {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: i32,
    pub e: bool,
    pub f: bool,
    pub reading: f32,
    pub label: UmbString,
    pub payload: UmbBytes,
}

impl FieldAccess for SensorSample {
    fn get(&self, name: &'static str) -> Option<FieldValue> {
        match name {
            "a" => Some(FieldValue::Bool(self.a)),
            "b" => Some(FieldValue::Bool(self.b)),
            "c" => Some(FieldValue::Bool(self.c)),
            "d" => Some(FieldValue::Int(self.d)),
            "e" => Some(FieldValue::Bool(self.e)),
            "f" => Some(FieldValue::Bool(self.f)),
            "reading" => Some(FieldValue::Float(self.reading)),
            "label" => Some(FieldValue::String(self.label.clone())),
            "payload" => Some(FieldValue::Bytes(self.payload.clone())),
            _ => None,
        }
    }

    fn set(&mut self, name: &'static str, value: FieldValue) -> Option<()> {
        match (name, value) {
            ("a", FieldValue::Bool(v)) => self.a = v,
            ("b", FieldValue::Bool(v)) => self.b = v,
            ("c", FieldValue::Bool(v)) => self.c = v,
            ("d", FieldValue::Int(v)) => self.d = v,
            ("e", FieldValue::Bool(v)) => self.e = v,
            ("f", FieldValue::Bool(v)) => self.f = v,
            ("reading", FieldValue::Float(v)) => self.reading = v,
            ("label", FieldValue::String(v)) => self.label = v,
            ("payload", FieldValue::Bytes(v)) => self.payload = v,
            _ => return None,
        }
        Some(())
    }
}

impl Message for SensorSample {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &SENSOR_SAMPLE_DESCRIPTOR
    }
}
