//! Lorabeat Transport - Radio transceiver seam and stand-in drivers
//!
//! The real long-range transceiver lives behind the `Radio` trait. This
//! crate ships two stand-ins: an in-memory loopback pair for tests and a
//! blocking UDP driver so the demo binaries can run a link on a desk.

pub mod loopback;
pub mod radio;
pub mod udp;

pub use loopback::*;
pub use radio::*;
pub use udp::*;
