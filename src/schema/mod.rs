//! The schema compiler's only output: a `static` table of
//! [`crate::core::MessageDescriptor`] records, one per message declared in
//! the JSON schema (`UMB_SCHEMA_PATH`, default `build_core/var/schema.json`).
//!
//! Nothing here is hand-written. `build.rs` parses the schema, runs the
//! bool-pack layout and size-classification passes over it, and writes the
//! const declarations this file pulls in verbatim. The two message structs
//! that reference these descriptors — and their `FieldAccess`/`Message`
//! impls — are hand-written in `crate::protocol::messages`; this module
//! supplies only the data they're built on.
include!(concat!(env!("OUT_DIR"), "/generated.rs"));
