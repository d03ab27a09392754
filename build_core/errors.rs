//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, schema validation,
/// code generation).
pub(crate) enum BuildError {
    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the schema JSON document.
    #[error("[MESSAGE]:Format JSON invalide [Error]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Provided path is invalid or missing.
    #[error("[MESSAGE]:Failed to read path. [PATH]:{path}")]
    ReadPath { path: String },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    /// I/O-oriented variant of the previous error.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnIoErr {
        #[from]
        source: io::Error,
    },

    /// A field named a type outside the closed set
    /// (`byte`/`int`/`bool`/`float`/`string`/`bytes`).
    #[error("[MESSAGE]:Unknown field type [MESSAGE_NAME]:{message}, [FIELD]:{field}, [TYPE]:{field_type}")]
    UnknownFieldType {
        message: String,
        field: String,
        field_type: String,
    },

    /// Two messages in the same schema declared the same name.
    #[error("[MESSAGE]:Duplicate message name [NAME]:{name}")]
    DuplicateMessageName { name: String },

    /// Two fields of the same message declared the same name.
    #[error("[MESSAGE]:Duplicate field name [MESSAGE_NAME]:{message}, [FIELD]:{field}")]
    DuplicateFieldName { message: String, field: String },

    /// The schema declared more messages than the 16-bit type-id space
    /// can hold (`u16::MAX - 1`, since 0 is reserved).
    #[error("[MESSAGE]:Too many messages for the type-id space [COUNT]:{count}")]
    TooManyMessageTypes { count: usize },
}
