//! Fixed-capacity, single-threaded cooperative scheduler over a set of
//! [`Connection`]s. No allocator: connections live in a const-generic
//! array of slots, and the scheduler advances each live connection by
//! exactly one message per round, the same granularity `ByteStream`
//! suspends at.
use crate::protocol::transport::connection::{Connection, ConnectionError};
use crate::protocol::transport::traits::byte_stream::ByteStream;

/// Round-robin driver for up to `N` concurrent connections of the same
/// stream type. A connection that errors (including a clean peer close)
/// is dropped from its slot; the scheduler keeps serving the rest.
pub struct Scheduler<S, const N: usize> {
    slots: [Option<Connection<S>>; N],
}

impl<S: ByteStream, const N: usize> Default for Scheduler<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteStream, const N: usize> Scheduler<S, N> {
    pub fn new() -> Self {
        Self {
            slots: [(); N].map(|_| None),
        }
    }

    /// Number of connections currently occupying a slot.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Place `stream` in the first free slot. Returns the stream back if
    /// every slot is occupied.
    pub fn add(&mut self, stream: S) -> Result<(), S> {
        for slot in &mut self.slots {
            if slot.is_none() {
                *slot = Some(Connection::new(stream));
                return Ok(());
            }
        }
        Err(stream)
    }

    /// Advance every live connection by one message. A connection that
    /// errors is removed from its slot and its terminating error is
    /// reported; callers that don't care about individual failures can
    /// ignore the returned slice length.
    pub async fn run_round(&mut self, errors_out: &mut [Option<ConnectionError<S::Error>>; N]) {
        for (slot, error_slot) in self.slots.iter_mut().zip(errors_out.iter_mut()) {
            *error_slot = None;
            if let Some(connection) = slot {
                if let Err(e) = connection.serve_one_message().await {
                    *error_slot = Some(e);
                    *slot = None;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
