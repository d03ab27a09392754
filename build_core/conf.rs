//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Default location of the message schema, relative to the crate root.
/// Overridden by the `UMB_SCHEMA_PATH` environment variable.
pub(crate) const SCHEMA_PATH: &str = "build_core/var/schema.json";
/// Generated descriptor-table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_GENERATED_FILE_NAME: &str = "generated.rs";
/// Message type-ids are assigned sequentially starting here; 0 is reserved
/// for "no message".
pub(crate) const FIRST_TYPE_ID: u16 = 1;
