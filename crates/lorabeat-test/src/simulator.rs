//! Lossy one-way link simulator

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lorabeat_core::LorabeatResult;
use lorabeat_transport::{ChannelParams, Radio};

/// Link conditions
#[derive(Clone, Debug)]
pub struct LinkProfile {
    /// Packet loss rate (0.0 - 1.0), decided at transmit time
    pub loss_rate: f64,
    /// RSSI range reported for delivered packets (dBm)
    pub rssi_range: (i16, i16),
}

impl Default for LinkProfile {
    fn default() -> Self {
        LinkProfile {
            loss_rate: 0.0,
            rssi_range: (-90, -40),
        }
    }
}

impl LinkProfile {
    /// Clean bench link
    pub fn clean() -> Self {
        Self::default()
    }

    /// Long-range link with heavy loss and weak signal
    pub fn marginal() -> Self {
        LinkProfile {
            loss_rate: 0.3,
            rssi_range: (-120, -95),
        }
    }
}

/// Delivery statistics for a simulated link
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkStats {
    pub offered: u64,
    pub dropped: u64,
}

struct SimLink {
    profile: LinkProfile,
    rng: StdRng,
    queue: VecDeque<(Vec<u8>, i16)>,
    stats: LinkStats,
}

impl SimLink {
    fn offer(&mut self, bytes: &[u8]) {
        self.stats.offered += 1;
        if self.rng.gen_bool(self.profile.loss_rate) {
            self.stats.dropped += 1;
            return;
        }
        let (lo, hi) = self.profile.rssi_range;
        let rssi = self.rng.gen_range(lo..=hi);
        self.queue.push_back((bytes.to_vec(), rssi));
    }
}

/// Radio handle over a shared simulated link
///
/// Clone the handle to hand the same link to both the sender and the
/// receiver node; everything runs on one thread.
#[derive(Clone)]
pub struct SimRadio {
    link: Rc<RefCell<SimLink>>,
}

impl SimRadio {
    pub fn new(profile: LinkProfile, seed: u64) -> Self {
        SimRadio {
            link: Rc::new(RefCell::new(SimLink {
                profile,
                rng: StdRng::seed_from_u64(seed),
                queue: VecDeque::new(),
                stats: LinkStats::default(),
            })),
        }
    }

    pub fn stats(&self) -> LinkStats {
        self.link.borrow().stats
    }

    /// Packets currently in flight
    pub fn in_flight(&self) -> usize {
        self.link.borrow().queue.len()
    }
}

impl Radio for SimRadio {
    fn configure(&mut self, _params: &ChannelParams) -> LorabeatResult<()> {
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> bool {
        // The transmit itself succeeds; loss happens in the air
        self.link.borrow_mut().offer(bytes);
        true
    }

    fn poll_received(&mut self) -> Option<(Vec<u8>, i16)> {
        self.link.borrow_mut().queue.pop_front()
    }
}
