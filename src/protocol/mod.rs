//! High-level components of the UMB protocol: generated message types and
//! the packet transport that frames and reassembles them.
pub mod messages;
pub mod transport;
