//! Tests for the round-robin scheduler.
use super::*;
use crate::protocol::transport::packet::builder::PacketBuilder;

/// Same fixed-buffer double as `connection_tests`, duplicated locally so
/// this module stays independent of `Connection`'s private test helpers.
#[derive(Debug)]
struct MockStream {
    input: [u8; 512],
    input_len: usize,
    pos: usize,
    output: [u8; 512],
    output_len: usize,
}

impl MockStream {
    fn from_packets(type_id: u16, body: &[u8]) -> Self {
        let mut input = [0u8; 512];
        let mut len = 0usize;
        for packet in PacketBuilder::new(type_id, body).build() {
            let bytes = packet.as_slice();
            input[len..len + bytes.len()].copy_from_slice(bytes);
            len += bytes.len();
        }
        Self {
            input,
            input_len: len,
            pos: 0,
            output: [0u8; 512],
            output_len: 0,
        }
    }
}

impl ByteStream for MockStream {
    type Error = &'static str;

    fn read_exact<'a>(
        &'a mut self,
        buf: &'a mut [u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a {
        async move {
            if self.pos + buf.len() > self.input_len {
                return Err("unexpected end of stream");
            }
            buf.copy_from_slice(&self.input[self.pos..self.pos + buf.len()]);
            self.pos += buf.len();
            Ok(())
        }
    }

    fn write_all<'a>(
        &'a mut self,
        buf: &'a [u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a {
        async move {
            self.output[self.output_len..self.output_len + buf.len()].copy_from_slice(buf);
            self.output_len += buf.len();
            Ok(())
        }
    }
}

#[tokio::test]
async fn serves_every_connection_in_its_slot() {
    let mut scheduler: Scheduler<MockStream, 2> = Scheduler::new();
    scheduler.add(MockStream::from_packets(1, &[])).unwrap();
    scheduler.add(MockStream::from_packets(1, &[])).unwrap();
    assert_eq!(scheduler.len(), 2);

    let mut errors: [Option<ConnectionError<&'static str>>; 2] = [None, None];
    scheduler.run_round(&mut errors).await;
    assert!(errors.iter().all(Option::is_none));
    assert_eq!(scheduler.len(), 2);
}

#[tokio::test]
async fn full_scheduler_rejects_additional_connections() {
    let mut scheduler: Scheduler<MockStream, 1> = Scheduler::new();
    scheduler.add(MockStream::from_packets(1, &[])).unwrap();
    let rejected = scheduler.add(MockStream::from_packets(1, &[]));
    assert!(rejected.is_err());
}

#[tokio::test]
async fn a_failing_connection_frees_its_slot() {
    let mut scheduler: Scheduler<MockStream, 1> = Scheduler::new();
    // No packets queued: the very first read fails.
    let mut empty_stream = MockStream::from_packets(1, &[]);
    empty_stream.input_len = 0;
    scheduler.add(empty_stream).unwrap();
    assert_eq!(scheduler.len(), 1);

    let mut errors: [Option<ConnectionError<&'static str>>; 1] = [None];
    scheduler.run_round(&mut errors).await;
    assert!(errors[0].is_some());
    assert_eq!(scheduler.len(), 0);

    // The freed slot can be reused.
    scheduler.add(MockStream::from_packets(1, &[])).unwrap();
    assert_eq!(scheduler.len(), 1);
}
