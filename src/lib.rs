//! `umb-codec`: a schema-driven serialization toolkit for a fixed-size-packet
//! wire protocol. The crate exposes the byte-level codec (primitive
//! bounds-checked cursors plus the generic descriptor-driven encode/decode
//! engine), the packet transport (framing and reassembly over an abstract
//! byte stream), and the generated message types a schema compiles to.
#![no_std]
/// Core data types shared by the build script and the codec engine:
/// the closed field-type set, message/field/bool-pack descriptors, and the
/// typed `FieldValue` the reflection layer and engine move around.
pub mod core;
/// Codec, transport, and reflection errors (bounds violations, protocol
/// violations, and the few encode/decode preconditions the schema can't
/// rule out statically).
pub mod error;
/// Byte-level codec: bounds-checked primitives and the generic
/// descriptor-driven encode/decode engine built on top of them.
pub mod infra;
/// UMB protocol implementation: generated message types and the
/// packet transport that frames and reassembles them.
pub mod protocol;
/// Build-time-generated `MessageDescriptor` table. See
/// [`schema`] for why this module is a single `include!`.
pub mod schema;
