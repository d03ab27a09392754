//! UMB packet framing: splits a logical serialized message into ≤255-byte
//! packets with a 4-byte header, and reassembles them at the receiving peer.
use crate::core::{HEADER_SIZE, PACKET_SIZE, PART_MULTIPART_END, PART_SOLE};

pub mod assembler;
pub mod builder;

/// The 4-byte packet header: `size`, `part`, `type` (little-endian u16).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketHeader {
    /// Total bytes in this packet including the header, in `[4, 255]`.
    pub size: u8,
    /// `0..253` intermediate part index, `254` final part, `255` sole part.
    pub part: u8,
    /// Message type tag, little-endian on the wire.
    pub type_id: u16,
}

impl PacketHeader {
    pub const fn encoded_len() -> usize {
        HEADER_SIZE
    }

    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let [lo, hi] = self.type_id.to_le_bytes();
        [self.size, self.part, lo, hi]
    }

    pub fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        Self {
            size: bytes[0],
            part: bytes[1],
            type_id: u16::from_le_bytes([bytes[2], bytes[3]]),
        }
    }

    pub const fn is_sole(self) -> bool {
        self.part == PART_SOLE
    }

    pub const fn is_multipart_end(self) -> bool {
        self.part == PART_MULTIPART_END
    }

    pub const fn is_multipart_start(self) -> bool {
        self.part == 0
    }
}

/// True if `len` logical-message bytes (header included) fit in one packet.
pub const fn fits_single_packet(len: usize) -> bool {
    len <= PACKET_SIZE
}
