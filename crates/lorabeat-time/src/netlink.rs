//! Network join and clock synchronization seams
//!
//! Both operations are best-effort with caller-supplied timeouts. Retry
//! policy belongs to the startup sequencer, not to implementations.

use std::time::Duration;

/// Credentials for joining the wireless network
#[derive(Clone, Debug)]
pub struct Credentials {
    pub network: String,
    pub passphrase: String,
}

impl Credentials {
    pub fn new(network: &str, passphrase: &str) -> Self {
        Credentials {
            network: network.to_string(),
            passphrase: passphrase.to_string(),
        }
    }
}

/// Network association and time synchronization services
pub trait NetLink {
    /// Associate with the wireless network. False means the attempt timed out.
    fn join_network(&mut self, credentials: &Credentials, timeout: Duration) -> bool;

    /// Synchronize the wall clock. False means the attempt timed out.
    fn sync_clock(&mut self, timeout: Duration) -> bool;
}

/// Host-managed services
///
/// For desk runs: the operating system is assumed already associated and
/// NTP-synced, so both steps succeed immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostNet;

impl NetLink for HostNet {
    fn join_network(&mut self, _credentials: &Credentials, _timeout: Duration) -> bool {
        true
    }

    fn sync_clock(&mut self, _timeout: Duration) -> bool {
        true
    }
}
