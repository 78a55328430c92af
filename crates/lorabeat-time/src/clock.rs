//! Wall clock sources for heartbeat timestamps

use chrono::Local;

/// Formatted wall-clock source
///
/// Callers must not enter the transmit loop before the clock has been
/// synchronized (see `NetLink::sync_clock`); the timestamps are otherwise
/// meaningless to the peer.
pub trait TimeSource {
    /// Current wall-clock time as `HH:MM:SS`
    fn now(&self) -> String;
}

/// System clock in the local timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

/// Clock pinned to a fixed value, for tests and simulations
#[derive(Clone, Debug)]
pub struct FixedClock {
    value: String,
}

impl FixedClock {
    pub fn new(value: &str) -> Self {
        FixedClock {
            value: value.to_string(),
        }
    }

    /// Move the pinned value
    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_format() {
        let now = SystemClock.now();

        // HH:MM:SS, two digits per field
        assert_eq!(now.len(), 8);
        assert_eq!(now.as_bytes()[2], b':');
        assert_eq!(now.as_bytes()[5], b':');
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new("08:00:00");
        assert_eq!(clock.now(), "08:00:00");

        clock.set("08:00:10");
        assert_eq!(clock.now(), "08:00:10");
    }
}
