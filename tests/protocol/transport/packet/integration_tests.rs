//! Edge-case and robustness tests for the packet receiver, driven over a
//! real `ByteStream` rather than hand-fed header bytes: malformed framing,
//! sequential traffic on one connection, and boundary-sized messages.
#[path = "../../../helpers/mod.rs"]
mod helpers;

use helpers::ChannelStream;
use umb_codec::core::{HEADER_SIZE, PACKET_SIZE};
use umb_codec::error::FramerError;
use umb_codec::protocol::transport::packet::assembler::{receive_message, ReceiveError};
use umb_codec::protocol::transport::packet::builder::PacketBuilder;
use umb_codec::protocol::transport::traits::byte_stream::ByteStream;

const TYPE_ID: u16 = 7;

#[tokio::test]
async fn a_message_at_exactly_the_single_packet_ceiling_stays_single_part() {
    let (mut writer, mut reader) = ChannelStream::create_pair();
    let body = vec![0xAAu8; PACKET_SIZE - HEADER_SIZE];

    tokio::spawn({
        let body = body.clone();
        async move {
            for packet in PacketBuilder::new(TYPE_ID, &body).build() {
                writer.write_all(packet.as_slice()).await.unwrap();
            }
        }
    });

    let received = receive_message(&mut reader).await.expect("receive");
    assert_eq!(received.body(), body.as_slice());
}

#[tokio::test]
async fn one_byte_past_the_ceiling_splits_into_two_packets() {
    let (mut writer, mut reader) = ChannelStream::create_pair();
    let body = vec![0xBBu8; PACKET_SIZE - HEADER_SIZE + 1];

    tokio::spawn({
        let body = body.clone();
        async move {
            let mut count = 0;
            for packet in PacketBuilder::new(TYPE_ID, &body).build() {
                writer.write_all(packet.as_slice()).await.unwrap();
                count += 1;
            }
            assert_eq!(count, 2, "one byte past the ceiling needs exactly two packets");
        }
    });

    let received = receive_message(&mut reader).await.expect("receive");
    assert_eq!(received.body(), body.as_slice());
}

#[tokio::test]
async fn a_continuation_packet_with_the_wrong_type_id_is_rejected() {
    let (mut writer, mut reader) = ChannelStream::create_pair();
    let body = vec![0xCCu8; PACKET_SIZE - HEADER_SIZE + 10];

    tokio::spawn(async move {
        let mut packets = PacketBuilder::new(TYPE_ID, &body).build();
        // First (start) packet goes through untouched.
        let first = packets.next().unwrap();
        writer.write_all(first.as_slice()).await.unwrap();

        // Second packet's type tag is corrupted before it's sent.
        let second = packets.next().unwrap();
        let mut bytes = second.as_slice().to_vec();
        bytes[2] = bytes[2].wrapping_add(1);
        let _ = writer.write_all(&bytes).await;
    });

    let err = receive_message(&mut reader).await.unwrap_err();
    assert!(matches!(
        err,
        ReceiveError::Framer(FramerError::TypeMismatch { .. })
    ));
}

#[tokio::test]
async fn a_skipped_part_number_is_rejected() {
    let (mut writer, mut reader) = ChannelStream::create_pair();
    // Four packets (three full intermediate chunks plus a short final one)
    // so the skipped packet below is a non-final part, not the multipart-end
    // sentinel the receiver would otherwise accept unconditionally.
    let body = vec![0xDDu8; (PACKET_SIZE - HEADER_SIZE) * 3 + 10];

    tokio::spawn(async move {
        let mut packets = PacketBuilder::new(TYPE_ID, &body).build();
        let first = packets.next().unwrap();
        writer.write_all(first.as_slice()).await.unwrap();
        // Skip the second packet (part 1) entirely and send the third
        // (part 2) instead; the receiver is expecting part 1 next.
        let _second = packets.next().unwrap();
        let third = packets.next().unwrap();
        let _ = writer.write_all(third.as_slice()).await;
    });

    let err = receive_message(&mut reader).await.unwrap_err();
    assert!(matches!(
        err,
        ReceiveError::Framer(FramerError::UnexpectedPart { .. })
    ));
}

#[tokio::test]
async fn a_size_zero_header_is_rejected() {
    let (mut writer, mut reader) = ChannelStream::create_pair();
    tokio::spawn(async move {
        let zero_header = [0u8, 0xFF, 1, 0];
        let _ = writer.write_all(&zero_header).await;
    });

    let err = receive_message(&mut reader).await.unwrap_err();
    assert!(matches!(
        err,
        ReceiveError::Framer(FramerError::InvalidSize)
    ));
}

#[tokio::test]
async fn fifty_single_part_messages_in_a_row_all_round_trip() {
    // One connection serving many sequential messages must not leak state
    // between receives (no lingering expectation of a continuation part).
    let (mut writer, mut reader) = ChannelStream::create_pair();

    tokio::spawn(async move {
        for i in 0u8..50 {
            let body = [i; 5];
            for packet in PacketBuilder::new(TYPE_ID, &body).build() {
                writer.write_all(packet.as_slice()).await.unwrap();
            }
        }
    });

    for i in 0u8..50 {
        let received = receive_message(&mut reader).await.expect("receive");
        assert_eq!(received.body(), [i; 5]);
    }
}
