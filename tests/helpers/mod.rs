//! Test doubles to simulate a byte-stream transport during integration tests.
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use umb_codec::protocol::transport::traits::byte_stream::ByteStream;

#[allow(dead_code)]
/// In-memory duplex byte stream built on two `tokio` mpsc channels, carrying
/// raw bytes rather than framed messages so it exercises the same
/// `read_exact`/`write_all` contract a real socket would.
pub struct ChannelStream {
    tx: mpsc::UnboundedSender<u8>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<u8>>>,
}

#[allow(dead_code)]
impl ChannelStream {
    /// Construct a pair of interconnected streams (server ↔ client): bytes
    /// written to one side arrive on a `read_exact` call against the other.
    pub fn create_pair() -> (Self, Self) {
        let (a_tx, b_rx) = mpsc::unbounded_channel();
        let (b_tx, a_rx) = mpsc::unbounded_channel();

        let a = Self {
            tx: a_tx,
            rx: Arc::new(Mutex::new(a_rx)),
        };
        let b = Self {
            tx: b_tx,
            rx: Arc::new(Mutex::new(b_rx)),
        };
        (a, b)
    }
}

impl ByteStream for ChannelStream {
    type Error = &'static str;

    fn read_exact<'a>(
        &'a mut self,
        buf: &'a mut [u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a {
        async move {
            let mut rx = self.rx.lock().await;
            for slot in buf.iter_mut() {
                *slot = rx.recv().await.ok_or("peer closed the stream")?;
            }
            Ok(())
        }
    }

    fn write_all<'a>(
        &'a mut self,
        buf: &'a [u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>> + 'a {
        async move {
            for byte in buf {
                self.tx.send(*byte).map_err(|_| "peer closed the stream")?;
            }
            Ok(())
        }
    }
}
