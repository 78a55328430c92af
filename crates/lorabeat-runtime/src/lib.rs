//! Lorabeat Runtime - Node loops and startup sequencing
//!
//! One single-threaded cooperative loop per node. The sender alternates
//! build/encode/transmit with a fixed pacing sleep; the receiver alternates
//! a non-blocking radio poll with liveness checks and a display refresh.
//! No locks, no async tasks; the only shared state is owned by the loop.

pub mod display;
pub mod receiver;
pub mod sender;
pub mod startup;

pub use display::*;
pub use receiver::*;
pub use sender::*;
pub use startup::*;
