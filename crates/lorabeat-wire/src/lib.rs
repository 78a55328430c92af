//! Lorabeat Wire Protocol - Textual heartbeat packet format
//!
//! A packet is a single UTF-8 radio payload with no length prefix:
//!
//! `TIME:<HH:MM:SS>|DATA:<payload> <sequence>`
//!
//! Framing and integrity checks are the radio layer's responsibility.
//! Decoding is total: input without the expected markers degrades to an
//! opaque legacy payload instead of failing.

pub mod codec;

pub use codec::*;
