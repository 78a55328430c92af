//! Lorabeat Time - Wall clock source and network service seams
//!
//! The heartbeat timestamp comes from a synchronized wall clock; the
//! synchronization itself (network join, clock sync) is an external service
//! reached through the `NetLink` trait.

pub mod clock;
pub mod netlink;

pub use clock::*;
pub use netlink::*;
