//! Transmit scheduler for the heartbeat sender node

use std::thread;
use std::time::Duration;

use lorabeat_core::HeartbeatRecord;
use lorabeat_time::TimeSource;
use lorabeat_transport::Radio;
use lorabeat_wire::encode_heartbeat;

use crate::DisplaySink;

/// Sender-side identity header
pub const TX_HEADER: &str = "LORABEAT TX";

/// Sender node configuration
#[derive(Clone, Debug)]
pub struct SenderConfig {
    /// Pacing period, measured from the end of the previous transmit. The
    /// true period is this plus transmit latency; there is no drift
    /// correction.
    pub period: Duration,
    /// Short text tag carried in every heartbeat
    pub tag: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        SenderConfig {
            period: Duration::from_secs(10),
            tag: "beacon".to_string(),
        }
    }
}

/// Fixed-interval heartbeat scheduler
///
/// Owns the sequence counter. The counter advances every tick whether or
/// not the transmit succeeded: delivery is at-most-once with no
/// confirmation, so a failed send is dropped, not replayed.
pub struct HeartbeatScheduler<R, C, D> {
    radio: R,
    clock: C,
    display: D,
    config: SenderConfig,
    sequence: u64,
}

impl<R, C, D> HeartbeatScheduler<R, C, D>
where
    R: Radio,
    C: TimeSource,
    D: DisplaySink,
{
    pub fn new(radio: R, clock: C, display: D, config: SenderConfig) -> Self {
        HeartbeatScheduler {
            radio,
            clock,
            display,
            config,
            sequence: 0,
        }
    }

    /// Build, encode, and transmit one heartbeat
    ///
    /// Returns the record for this tick, whether or not it went out.
    pub fn tick(&mut self) -> HeartbeatRecord {
        let record =
            HeartbeatRecord::new(self.sequence, self.clock.now(), self.config.tag.clone());
        self.sequence += 1;

        let packet = encode_heartbeat(&record);
        let sent = self.radio.send(&packet);
        if sent {
            tracing::debug!(sequence = record.sequence, "heartbeat sent");
        } else {
            // Fire and forget: dropped, no retry, no buffering
            tracing::warn!(sequence = record.sequence, "heartbeat transmit failed");
        }

        self.display.render(&sent_lines(&record, sent));
        record
    }

    /// Run the scheduler loop; never returns
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
            thread::sleep(self.config.period);
        }
    }

    /// Sequence number the next tick will use
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Sender-side display summary for one transmit
fn sent_lines(record: &HeartbeatRecord, sent: bool) -> Vec<String> {
    let outcome = if sent {
        format!("SENT #{}", record.sequence)
    } else {
        format!("SEND FAILED #{}", record.sequence)
    };
    vec![TX_HEADER.to_string(), outcome, record.timestamp.clone()]
}

#[cfg(test)]
mod tests {
    use lorabeat_core::LorabeatResult;
    use lorabeat_time::FixedClock;
    use lorabeat_transport::{ChannelParams, LoopbackRadio};

    use crate::CapturedDisplay;

    use super::*;

    /// Radio that fails every other transmit
    struct FlakySendRadio {
        sends: u32,
    }

    impl Radio for FlakySendRadio {
        fn configure(&mut self, _params: &ChannelParams) -> LorabeatResult<()> {
            Ok(())
        }

        fn send(&mut self, _bytes: &[u8]) -> bool {
            self.sends += 1;
            self.sends % 2 == 1
        }

        fn poll_received(&mut self) -> Option<(Vec<u8>, i16)> {
            None
        }
    }

    fn scheduler_with<R: Radio>(
        radio: R,
    ) -> HeartbeatScheduler<R, FixedClock, CapturedDisplay> {
        HeartbeatScheduler::new(
            radio,
            FixedClock::new("10:00:00"),
            CapturedDisplay::default(),
            SenderConfig::default(),
        )
    }

    #[test]
    fn test_tick_builds_and_transmits() {
        let (tx, mut rx) = LoopbackRadio::pair();
        let mut scheduler = scheduler_with(tx);

        let record = scheduler.tick();

        assert_eq!(record.sequence, 0);
        assert_eq!(record.timestamp, "10:00:00");
        assert_eq!(record.payload, "beacon");

        let (bytes, _rssi) = rx.poll_received().unwrap();
        assert_eq!(&bytes[..], b"TIME:10:00:00|DATA:beacon 0");
    }

    #[test]
    fn test_sequence_advances_every_tick() {
        let (tx, _rx) = LoopbackRadio::pair();
        let mut scheduler = scheduler_with(tx);

        for expected in 0u64..5 {
            let record = scheduler.tick();
            assert_eq!(record.sequence, expected);
        }
        assert_eq!(scheduler.sequence(), 5);
    }

    #[test]
    fn test_sequence_ignores_send_failures() {
        // Scenario C: counter is unconditional, send failures interleaved
        let mut scheduler = scheduler_with(FlakySendRadio { sends: 0 });

        let sequences: Vec<u64> = (0..6).map(|_| scheduler.tick().sequence).collect();

        assert_eq!(sequences, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_display_reports_each_transmit() {
        let mut scheduler = scheduler_with(FlakySendRadio { sends: 0 });

        scheduler.tick();
        scheduler.tick();

        let frames = &scheduler.display.frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0][0], TX_HEADER);
        assert_eq!(frames[0][1], "SENT #0");
        assert_eq!(frames[1][1], "SEND FAILED #1");
        assert_eq!(frames[1][2], "10:00:00");
    }
}
