//! Deserialized shape of the input schema: an ordered set of messages,
//! each an ordered set of named, typed fields drawn from the closed
//! type set.
use serde::Deserialize;

//==================================================================================SCHEMA

#[derive(Debug, Deserialize)]
pub(crate) struct Schema {
    /// Logical name for the generated family. Currently informational only
    /// (no backend keys off it), kept for parity with the source format.
    #[allow(dead_code)]
    pub(crate) class_name: String,
    pub(crate) messages: Vec<MessageDef>,
    /// Namespace hint for a target backend. Unused by this generator, which
    /// emits a flat `MessageDescriptor` table rather than namespaced code.
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) cpp_namespace: Option<String>,
    /// Hook name for a backend that integrates with an external handler.
    /// Unused here; this generator has no handler-dispatch backend.
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) uscript_message_handler_class: Option<String>,
    /// Request for test-harness scaffolding. Unused: the crate's test
    /// harness's round-trip tests are hand-written, not generated.
    #[serde(default)]
    #[allow(dead_code, non_snake_case)]
    pub(crate) __generate_test_mutator: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageDef {
    pub(crate) name: String,
    pub(crate) fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldDef {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) field_type: String,
}
