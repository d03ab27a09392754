//! UMB transport layer: packet framing (splitting and reassembly), the
//! byte-stream abstraction it runs over, and the cooperative connection/
//! scheduler pair that demonstrates driving many connections on one
//! thread.
pub mod connection;
pub mod packet;
pub mod scheduler;
pub mod traits;
