//! Per-connection echo loop: receive one logical message off a
//! [`ByteStream`], decode it through the reflection layer, and send it
//! straight back.
//!
//! Mirrors the reference echo server's shape: one state machine per
//! connection (`receive_message` already implements the `WaitHeader` →
//! `WaitBody` → `Done` sequence), suspending only at `read_exact`/
//! `write_all`, so many connections can be driven cooperatively on a
//! single thread — see [`super::scheduler::Scheduler`].
use crate::core::{HEADER_SIZE, MAX_REASSEMBLY_BUFFER};
use crate::error::{EncodeError, ReflectionError};
use crate::infra::codec::traits::Message;
use crate::protocol::messages::new_by_type_id;
use crate::protocol::transport::packet::assembler::{receive_message, ReceiveError};
use crate::protocol::transport::packet::builder::PacketBuilder;
use crate::protocol::transport::traits::byte_stream::ByteStream;

/// Failure modes for a single echo turn.
#[derive(Debug)]
pub enum ConnectionError<E> {
    /// The framer rejected the incoming packet sequence, or the stream
    /// itself failed while reading it.
    Receive(ReceiveError<E>),
    /// The stream failed while writing the echoed reply.
    Write(E),
    /// Re-encoding the decoded message failed (should not happen: a
    /// message that decoded successfully always re-encodes).
    Encode(EncodeError),
    /// The incoming type tag is not one this build's schema declares.
    Reflection(ReflectionError),
}

/// Drives the echo protocol over one duplex byte connection.
pub struct Connection<S> {
    stream: S,
}

impl<S: ByteStream> Connection<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Receive exactly one logical message and write it back unchanged.
    /// Returns once the reply has been fully sent.
    pub async fn serve_one_message(&mut self) -> Result<(), ConnectionError<S::Error>> {
        let received = receive_message(&mut self.stream)
            .await
            .map_err(ConnectionError::Receive)?;

        let mut any = new_by_type_id(received.type_id()).ok_or(ConnectionError::Reflection(
            ReflectionError::UnknownTypeId {
                type_id: received.type_id(),
            },
        ))?;

        // `from_bytes` only inspects the type tag at offset 2..4; the
        // `size`/`part` header bytes are a packet-framing concern already
        // consumed by `receive_message`, so they're left zeroed here.
        let mut logical = [0u8; MAX_REASSEMBLY_BUFFER];
        let [lo, hi] = received.type_id().to_le_bytes();
        logical[2] = lo;
        logical[3] = hi;
        let body = received.body();
        logical[HEADER_SIZE..HEADER_SIZE + body.len()].copy_from_slice(body);
        if !any.from_bytes(&logical[..HEADER_SIZE + body.len()]) {
            return Err(ConnectionError::Receive(ReceiveError::Framer(
                crate::error::FramerError::BufferOverflow {
                    needed: HEADER_SIZE + body.len(),
                    capacity: MAX_REASSEMBLY_BUFFER,
                },
            )));
        }

        let mut reply = [0u8; MAX_REASSEMBLY_BUFFER];
        let size = any.serialized_size();
        any.to_bytes(&mut reply[..size])
            .map_err(ConnectionError::Encode)?;

        let reply_body = &reply[HEADER_SIZE..size];
        for packet in PacketBuilder::new(any.type_id(), reply_body).build() {
            self.stream
                .write_all(packet.as_slice())
                .await
                .map_err(ConnectionError::Write)?;
        }

        Ok(())
    }

    /// Serve messages until the peer closes the stream or a protocol
    /// violation occurs; returns the error that ended the loop.
    pub async fn run(&mut self) -> ConnectionError<S::Error> {
        loop {
            if let Err(e) = self.serve_one_message().await {
                return e;
            }
        }
    }
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
