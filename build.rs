//! Cargo build script: compiles the message schema into a static
//! `MessageDescriptor` table.

// Re-export the core module from src/core.rs so build_core can reuse the
// same `FieldKind`/`FieldDescriptor`/`BoolPackEntry`/`MessageDescriptor`
// types the runtime engine consumes.
#[path = "src/core.rs"]
mod core;

mod build_core;
use crate::build_core::conf::{OUT_DIR_GENERATED_FILE_NAME, SCHEMA_PATH};
use crate::build_core::domain::Schema;
use crate::build_core::errors::BuildError;
use crate::build_core::gen_messages::generate;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

// This build script is the core of the code generation pipeline: it reads
// the message schema (JSON) and produces the static analysis records
// (`MessageDescriptor`, `FieldDescriptor`, `BoolPackEntry`) the runtime
// engine in `src/infra/codec/engine` walks to encode and decode messages.
// The two concrete message structs that reference these descriptors are
// hand-written in `src/protocol/messages`; this script never emits a
// struct or a trait impl, only the data they're built on.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_core/var/schema.json");

    // Priority order:
    //   1. UMB_SCHEMA_PATH environment variable (absolute or relative path)
    //   2. Default schema shipped with the crate
    let default_schema_path = PathBuf::from_str(SCHEMA_PATH).map_err(|_| BuildError::ReadPath {
        path: SCHEMA_PATH.to_string(),
    })?;

    let user_schema_path = std::env::var("UMB_SCHEMA_PATH").ok().map(PathBuf::from);

    let schema_path = if let Some(path) = user_schema_path {
        if path.exists() {
            println!("cargo:warning=Using custom schema from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        } else {
            println!(
                "cargo:warning=Custom schema path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default schema");
            default_schema_path
        }
    } else {
        println!("cargo:warning=Using default schema");
        default_schema_path
    };

    let schema_string = std::fs::read_to_string(&schema_path).map_err(|e| BuildError::ReadFile {
        path: schema_path.to_path_buf(),
        source: e,
    })?;
    let schema: Schema = serde_json::from_str(&schema_string)?;

    let generated = generate(&schema)?;

    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let dest_path = PathBuf::from(out_dir_str).join(OUT_DIR_GENERATED_FILE_NAME);

    fs::write(&dest_path, &generated).map_err(|e| BuildError::WriteFile {
        path: dest_path,
        source: e,
    })?;

    Ok(())
}
