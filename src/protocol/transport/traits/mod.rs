//! Abstraction traits used by the transport layer.
pub mod byte_stream;
