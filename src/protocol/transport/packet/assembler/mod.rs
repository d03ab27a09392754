//! Packet receiver: rebuilds a logical message from packets read off a
//! `ByteStream`, following the receive state machine (`WaitHeader` →
//! `WaitBody`/`WaitBody(multi)` → `WaitPartHeader` → `WaitPartBody` →
//! `Done`/`Error`).
use super::PacketHeader;
use crate::core::{HEADER_SIZE, MAX_REASSEMBLY_BUFFER};
use crate::error::FramerError;
use crate::protocol::transport::traits::byte_stream::ByteStream;

/// A fully reassembled logical message: its type tag and field bytes
/// (header excluded).
#[derive(Debug)]
pub struct ReassembledMessage {
    buffer: [u8; MAX_REASSEMBLY_BUFFER],
    len: usize,
    type_id: u16,
}

impl ReassembledMessage {
    pub fn type_id(&self) -> u16 {
        self.type_id
    }

    pub fn body(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    fn new(type_id: u16) -> Self {
        Self {
            buffer: [0; MAX_REASSEMBLY_BUFFER],
            len: 0,
            type_id,
        }
    }

    fn push(&mut self, bytes: &[u8]) -> Result<(), FramerError> {
        let needed = self.len + bytes.len();
        if needed > self.buffer.len() {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "reassembly buffer overflow: needed {} bytes, capacity is {}",
                needed,
                self.buffer.len()
            );
            return Err(FramerError::BufferOverflow {
                needed,
                capacity: self.buffer.len(),
            });
        }
        self.buffer[self.len..needed].copy_from_slice(bytes);
        self.len = needed;
        Ok(())
    }
}

/// Error surfaced while receiving a message: either the stream failed, or
/// the peer violated the framing protocol.
#[derive(Debug)]
pub enum ReceiveError<E> {
    Stream(E),
    Framer(FramerError),
}

/// Read one logical message from `stream`, consuming as many packets as
/// the message requires. Packets of a single logical message must arrive
/// strictly in order; interleaving concurrent multipart messages on the
/// same stream is not supported.
pub async fn receive_message<S: ByteStream>(
    stream: &mut S,
) -> Result<ReassembledMessage, ReceiveError<S::Error>> {
    // WaitHeader
    let header = read_header(stream).await?;
    if header.size == 0 {
        return Err(ReceiveError::Framer(FramerError::InvalidSize));
    }

    if header.is_sole() {
        // WaitBody
        let mut message = ReassembledMessage::new(header.type_id);
        read_body(stream, &mut message, &header).await?;
        return Ok(message);
    }

    if !header.is_multipart_start() {
        return Err(ReceiveError::Framer(FramerError::UnexpectedPart {
            part: header.part,
            state: "WaitHeader",
        }));
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("starting multipart receive for type {}", header.type_id);

    // WaitBody(multi): first body read
    let mut message = ReassembledMessage::new(header.type_id);
    read_body(stream, &mut message, &header).await?;

    let mut next_expected: u8 = 1;
    loop {
        // WaitPartHeader
        let part_header = read_header(stream).await?;
        if part_header.size == 0 {
            return Err(ReceiveError::Framer(FramerError::InvalidSize));
        }
        if part_header.type_id != message.type_id {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "type tag changed mid-stream: expected {}, got {}",
                message.type_id,
                part_header.type_id
            );
            return Err(ReceiveError::Framer(FramerError::TypeMismatch {
                expected: message.type_id,
                got: part_header.type_id,
            }));
        }
        if part_header.part != next_expected && !part_header.is_multipart_end() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "unexpected part {} while waiting for {}",
                part_header.part,
                next_expected
            );
            return Err(ReceiveError::Framer(FramerError::UnexpectedPart {
                part: part_header.part,
                state: "WaitPartHeader",
            }));
        }

        // WaitPartBody
        read_body(stream, &mut message, &part_header).await?;

        if part_header.is_multipart_end() {
            return Ok(message);
        }
        next_expected = next_expected.wrapping_add(1);
    }
}

async fn read_header<S: ByteStream>(stream: &mut S) -> Result<PacketHeader, ReceiveError<S::Error>> {
    let mut raw = [0u8; HEADER_SIZE];
    stream.read_exact(&mut raw).await.map_err(ReceiveError::Stream)?;
    Ok(PacketHeader::from_bytes(raw))
}

async fn read_body<S: ByteStream>(
    stream: &mut S,
    message: &mut ReassembledMessage,
    header: &PacketHeader,
) -> Result<(), ReceiveError<S::Error>> {
    let total = header.size as usize;
    if total < HEADER_SIZE {
        return Err(ReceiveError::Framer(FramerError::InvalidPacketSize {
            declared: header.size,
            header_size: HEADER_SIZE,
        }));
    }
    let body_len = total - HEADER_SIZE;
    let mut body = [0u8; crate::core::PAYLOAD_CAPACITY];
    stream
        .read_exact(&mut body[..body_len])
        .await
        .map_err(ReceiveError::Stream)?;
    message.push(&body[..body_len]).map_err(ReceiveError::Framer)
}
