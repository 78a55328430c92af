//! Heartbeat record, one per transmit tick

/// One timestamped telemetry unit
///
/// Immutable once built. The sequence counter belongs to the scheduler and
/// advances every tick whether or not the transmit succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeartbeatRecord {
    /// Monotonically increasing counter, starting at 0
    pub sequence: u64,
    /// Wall-clock timestamp, "HH:MM:SS"
    pub timestamp: String,
    /// Short text tag carried with every heartbeat
    pub payload: String,
}

impl HeartbeatRecord {
    /// Create a new record
    pub fn new(sequence: u64, timestamp: String, payload: String) -> Self {
        HeartbeatRecord {
            sequence,
            timestamp,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields() {
        let record = HeartbeatRecord::new(7, "12:00:00".to_string(), "beacon".to_string());

        assert_eq!(record.sequence, 7);
        assert_eq!(record.timestamp, "12:00:00");
        assert_eq!(record.payload, "beacon");
    }
}
