//! Lorabeat State - Receiver link liveness and status projection
//!
//! On a one-way fire-and-forget link, elapsed time since the last decoded
//! packet is the only liveness signal available. This crate holds the
//! receiver's state machine around that signal and the pure projection of
//! its state into display lines.

pub mod monitor;
pub mod presenter;

pub use monitor::*;
pub use presenter::*;
