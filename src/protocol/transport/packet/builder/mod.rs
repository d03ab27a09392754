//! Packet sender: splits a logical serialized message into the packet
//! sequence required to transmit it, one packet at a time.
use crate::core::{HEADER_SIZE, PACKET_SIZE, PART_MULTIPART_END, PART_SOLE, PAYLOAD_CAPACITY};
use crate::protocol::transport::packet::PacketHeader;

/// A single framed packet ready for the wire: header bytes followed by
/// its payload slice, both owned so the iterator can yield independent items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: PacketHeader,
    len: usize,
    data: [u8; PACKET_SIZE],
}

impl Packet {
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// Shared parameters for all packets composing one logical message.
#[derive(Debug)]
pub struct PacketBuilder<'a> {
    type_id: u16,
    /// Logical message body, i.e. the serialized fields *without* the
    /// 4-byte logical header (the header's `size`/`part` are re-derived
    /// per packet; its `type` is carried in `type_id`).
    body: &'a [u8],
}

/// Lazy iterator returning packets one by one as they are encoded.
pub struct PacketIterator<'a> {
    builder: PacketBuilder<'a>,
    part: u8,
    bytes_sent: usize,
    done: bool,
}

impl<'a> PacketBuilder<'a> {
    /// Build a packet sender for `type_id` carrying `body` (the message's
    /// field bytes, logical header excluded).
    pub fn new(type_id: u16, body: &'a [u8]) -> Self {
        Self { type_id, body }
    }

    pub fn build(self) -> PacketIterator<'a> {
        PacketIterator {
            builder: self,
            part: 0,
            bytes_sent: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for PacketIterator<'a> {
    type Item = Packet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let total_len = HEADER_SIZE + self.builder.body.len();

        // Single-part message: one packet, sole-part marker, full body.
        if total_len <= PACKET_SIZE {
            self.done = true;
            let header = PacketHeader {
                size: total_len as u8,
                part: PART_SOLE,
                type_id: self.builder.type_id,
            };
            return Some(make_packet(header, self.builder.body));
        }

        let remaining = self.builder.body.len() - self.bytes_sent;
        let is_final = remaining <= PAYLOAD_CAPACITY;

        let (part, chunk_len) = if is_final {
            (PART_MULTIPART_END, remaining)
        } else {
            (self.part, PAYLOAD_CAPACITY)
        };

        let chunk = &self.builder.body[self.bytes_sent..self.bytes_sent + chunk_len];
        let header = PacketHeader {
            size: (HEADER_SIZE + chunk_len) as u8,
            part,
            type_id: self.builder.type_id,
        };

        self.bytes_sent += chunk_len;
        self.part += 1;
        if is_final {
            self.done = true;
        }

        Some(make_packet(header, chunk))
    }
}

fn make_packet(header: PacketHeader, payload: &[u8]) -> Packet {
    let mut data = [0u8; PACKET_SIZE];
    let header_bytes = header.to_bytes();
    data[..HEADER_SIZE].copy_from_slice(&header_bytes);
    data[HEADER_SIZE..HEADER_SIZE + payload.len()].copy_from_slice(payload);
    Packet {
        header,
        len: HEADER_SIZE + payload.len(),
        data,
    }
}
