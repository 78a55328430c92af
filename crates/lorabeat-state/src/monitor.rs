//! Link liveness state machine

use std::time::{Duration, Instant};

use lorabeat_wire::Decoded;

/// Link monitor configuration
#[derive(Clone, Debug)]
pub struct LinkConfig {
    /// Liveness timeout: the link drops when the last contact is older than
    /// this. MUST be strictly greater than the sender's transmit period with
    /// a safety margin; at a 1:1 ratio the link flaps on any scheduling
    /// jitter.
    pub timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        // 2.5x the default 10s transmit period
        LinkConfig {
            timeout: Duration::from_secs(25),
        }
    }
}

/// Presentation-level link status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    /// No packet ever received
    Waiting,
    Connected,
    Disconnected,
}

/// Receiver-owned link state, mutated only by `LinkMonitor`
///
/// INVARIANT: `connected` implies `last_contact` is set and within the
/// timeout as of the latest `on_tick`. The last-seen fields survive a
/// disconnect so the display can keep showing last-known-good data.
#[derive(Clone, Debug, Default)]
pub struct LinkState {
    /// Monotonic instant of the last decoded packet
    pub last_contact: Option<Instant>,
    /// Most recent decoded packet
    pub last_packet: Option<Decoded>,
    /// Signal strength of the most recent packet (dBm)
    pub last_rssi: i16,
    /// Current liveness belief
    pub connected: bool,
}

impl LinkState {
    pub fn status(&self) -> LinkStatus {
        if self.connected {
            LinkStatus::Connected
        } else if self.last_contact.is_none() {
            LinkStatus::Waiting
        } else {
            LinkStatus::Disconnected
        }
    }
}

/// Transition reported by `on_tick`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTransition {
    /// Liveness timeout expired
    Lost,
}

/// Link liveness state machine
///
/// Two states, DISCONNECTED (initial) and CONNECTED. Packets always refresh
/// the last-seen fields; only the timeout check in `on_tick` can take the
/// link down. Both entry points take `now` explicitly so tests can drive
/// virtual time.
pub struct LinkMonitor {
    state: LinkState,
    config: LinkConfig,
}

impl LinkMonitor {
    pub fn new() -> Self {
        Self::with_config(LinkConfig::default())
    }

    pub fn with_config(config: LinkConfig) -> Self {
        LinkMonitor {
            state: LinkState::default(),
            config,
        }
    }

    /// Record a decoded packet received at `now`
    pub fn on_packet(&mut self, packet: Decoded, rssi: i16, now: Instant) {
        self.state.last_contact = Some(now);
        self.state.last_packet = Some(packet);
        self.state.last_rssi = rssi;

        if !self.state.connected {
            self.state.connected = true;
            tracing::info!(rssi, "link up");
        }
    }

    /// Run one liveness check at `now`
    ///
    /// The threshold is strictly greater-than: a contact aged exactly
    /// `timeout` keeps the link up. At most one `Lost` transition per
    /// expiry.
    pub fn on_tick(&mut self, now: Instant) -> Option<LinkTransition> {
        if !self.state.connected {
            return None;
        }
        let last = self.state.last_contact?;
        if now.duration_since(last) > self.config.timeout {
            // Last-seen fields stay for the display
            self.state.connected = false;
            tracing::warn!(timeout = ?self.config.timeout, "link down");
            return Some(LinkTransition::Lost);
        }
        None
    }

    pub fn state(&self) -> &LinkState {
        &self.state
    }

    pub fn status(&self) -> LinkStatus {
        self.state.status()
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}
