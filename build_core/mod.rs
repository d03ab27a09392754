//! Workspace for the build script: schema model, validation/analysis, and
//! the codegen driver.
pub mod analyzer;
pub mod boolpack;
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_messages;
pub mod name_helpers;
