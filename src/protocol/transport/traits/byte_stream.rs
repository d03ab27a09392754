//! Abstraction for the byte-oriented transport the packet framer runs over.
//! Mirrors the bus/timer traits elsewhere in this crate: asynchronous so a
//! single-threaded cooperative scheduler can multiplex many connections,
//! suspending exactly at the I/O operations (read header, read body, write
//! packet) described for the reference echo server.
use futures_util::Future;

/// Contract for a single duplex byte connection.
pub trait ByteStream {
    type Error: core::fmt::Debug;

    /// Fill `buf` completely or fail; never returns a short read.
    fn read_exact<'a>(&'a mut self, buf: &'a mut [u8]) -> impl Future<Output = Result<(), Self::Error>> + 'a;

    /// Write the entirety of `buf` or fail.
    fn write_all<'a>(&'a mut self, buf: &'a [u8]) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
