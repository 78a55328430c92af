//! Receive loop for the monitor node

use std::thread;
use std::time::{Duration, Instant};

use lorabeat_state::{status_lines, LinkConfig, LinkMonitor};
use lorabeat_transport::Radio;
use lorabeat_wire::decode_packet;

use crate::DisplaySink;

/// Receiver node configuration
#[derive(Clone, Debug)]
pub struct ReceiverConfig {
    /// Pacing sleep between loop iterations
    pub poll_interval: Duration,
    pub link: LinkConfig,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        ReceiverConfig {
            poll_interval: Duration::from_millis(100),
            link: LinkConfig::default(),
        }
    }
}

/// Receiver node
///
/// Drains the radio, advances the link monitor, and refreshes the display
/// when the projected lines change.
pub struct ReceiverNode<R, D> {
    radio: R,
    display: D,
    monitor: LinkMonitor,
    config: ReceiverConfig,
    last_lines: Vec<String>,
}

impl<R, D> ReceiverNode<R, D>
where
    R: Radio,
    D: DisplaySink,
{
    pub fn new(radio: R, display: D, config: ReceiverConfig) -> Self {
        let monitor = LinkMonitor::with_config(config.link.clone());
        ReceiverNode {
            radio,
            display,
            monitor,
            config,
            last_lines: Vec::new(),
        }
    }

    /// One loop iteration at `now`: drain the radio, run the liveness
    /// check, refresh the display if anything changed
    pub fn poll_once(&mut self, now: Instant) {
        while let Some((bytes, rssi)) = self.radio.poll_received() {
            let packet = decode_packet(&bytes);
            if packet.is_legacy() {
                tracing::debug!("legacy packet accepted");
            }
            self.monitor.on_packet(packet, rssi, now);
        }

        self.monitor.on_tick(now);

        let lines = status_lines(self.monitor.state());
        if lines != self.last_lines {
            self.display.render(&lines);
            self.last_lines = lines;
        }
    }

    /// Run the receive loop; never returns
    pub fn run(&mut self) -> ! {
        loop {
            self.poll_once(Instant::now());
            thread::sleep(self.config.poll_interval);
        }
    }

    pub fn monitor(&self) -> &LinkMonitor {
        &self.monitor
    }
}
