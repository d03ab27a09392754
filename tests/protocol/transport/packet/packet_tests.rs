//! Round-trip tests for the packet builder/assembler pair running over a
//! real duplex `ByteStream`, rather than the in-process slices the unit
//! tests in `builder`/`assembler` exercise.
#[path = "../../../helpers/mod.rs"]
mod helpers;

use helpers::ChannelStream;
use umb_codec::core::{FieldValue, UmbBytes, MAX_DYNAMIC_SIZE};
use umb_codec::infra::codec::traits::Message;
use umb_codec::protocol::messages::{AnyMessage, GetSomeStuff, SensorSample};
use umb_codec::protocol::transport::packet::assembler::receive_message;
use umb_codec::protocol::transport::packet::builder::PacketBuilder;
use umb_codec::protocol::transport::traits::byte_stream::ByteStream;

async fn round_trip(message: &AnyMessage) -> AnyMessage {
    let (mut writer, mut reader) = ChannelStream::create_pair();

    let mut encoded = [0u8; 4096];
    let size = message.serialized_size();
    message.to_bytes(&mut encoded[..size]).expect("encode");

    let body = encoded[4..size].to_vec();
    let type_id = message.type_id();
    tokio::spawn(async move {
        for packet in PacketBuilder::new(type_id, &body).build() {
            writer
                .write_all(packet.as_slice())
                .await
                .expect("write packet");
        }
    });

    let received = receive_message(&mut reader).await.expect("receive message");
    assert_eq!(received.type_id(), type_id);

    let mut logical = [0u8; 4096];
    logical[2..4].copy_from_slice(&type_id.to_le_bytes());
    logical[4..4 + received.body().len()].copy_from_slice(received.body());

    let mut decoded = match message {
        AnyMessage::GetSomeStuff(_) => AnyMessage::GetSomeStuff(GetSomeStuff),
        AnyMessage::SensorSample(_) => AnyMessage::SensorSample(SensorSample::default()),
    };
    assert!(decoded.from_bytes(&logical[..4 + received.body().len()]));
    decoded
}

#[tokio::test]
async fn empty_message_is_a_single_packet_round_trip() {
    let message = AnyMessage::GetSomeStuff(GetSomeStuff);
    let decoded = round_trip(&message).await;
    assert_eq!(decoded, message);
}

#[tokio::test]
async fn small_sensor_sample_is_a_single_packet_round_trip() {
    let sample = SensorSample {
        a: true,
        b: true,
        c: false,
        d: 9000,
        e: false,
        f: true,
        reading: -12.5,
        label: Default::default(),
        payload: Default::default(),
    };
    let message = AnyMessage::SensorSample(sample);
    let decoded = round_trip(&message).await;
    assert_eq!(decoded.field("d"), Some(FieldValue::Int(9000)));
    assert_eq!(decoded.field("a"), Some(FieldValue::Bool(true)));
    assert_eq!(decoded.field("f"), Some(FieldValue::Bool(true)));
}

#[tokio::test]
async fn large_payload_field_forces_a_multipart_round_trip() {
    // A near-maximum `bytes` field pushes the serialized message past the
    // 255-byte single-packet ceiling, so the builder must fragment it and
    // the assembler must stitch the fragments back together.
    let big_payload = UmbBytes::from_slice(&[0x5A; MAX_DYNAMIC_SIZE]).unwrap();
    let sample = SensorSample {
        a: true,
        b: false,
        c: true,
        d: -1,
        e: true,
        f: false,
        reading: 0.125,
        label: Default::default(),
        payload: big_payload.clone(),
    };
    let message = AnyMessage::SensorSample(sample);
    assert!(
        message.serialized_size() > 255,
        "test setup must actually require a multipart message"
    );

    let decoded = round_trip(&message).await;
    match decoded.field("payload") {
        Some(FieldValue::Bytes(bytes)) => {
            assert_eq!(bytes.as_slice(), big_payload.as_slice());
        }
        other => panic!("expected a bytes field, got {other:?}"),
    }
}
