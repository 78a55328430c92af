//! Heartbeat packet codec
//!
//! Field order and marker spelling are fixed; the peer locates the markers
//! by substring search, so interop depends on them byte for byte.

use bytes::Bytes;

use lorabeat_core::HeartbeatRecord;

/// Timestamp field marker
pub const TIME_MARKER: &str = "TIME:";

/// Payload field marker
pub const DATA_MARKER: &str = "|DATA:";

/// Decoded form of a received packet
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Both markers present and in order
    Parsed { timestamp: String, payload: String },
    /// Markers absent or out of order: the whole input is an opaque payload
    Legacy { payload: String },
}

impl Decoded {
    /// Timestamp field (empty for legacy packets)
    pub fn timestamp(&self) -> &str {
        match self {
            Decoded::Parsed { timestamp, .. } => timestamp,
            Decoded::Legacy { .. } => "",
        }
    }

    /// Payload field
    pub fn payload(&self) -> &str {
        match self {
            Decoded::Parsed { payload, .. } => payload,
            Decoded::Legacy { payload } => payload,
        }
    }

    /// Trailing sequence counter of a parsed payload
    ///
    /// Legacy packets carry no recoverable counter.
    pub fn sequence(&self) -> Option<u64> {
        match self {
            Decoded::Parsed { payload, .. } => payload.rsplit(' ').next()?.parse().ok(),
            Decoded::Legacy { .. } => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Decoded::Legacy { .. })
    }
}

/// Encode a heartbeat record into its wire form
pub fn encode_heartbeat(record: &HeartbeatRecord) -> Bytes {
    let mut out = String::with_capacity(
        TIME_MARKER.len()
            + record.timestamp.len()
            + DATA_MARKER.len()
            + record.payload.len()
            + 21,
    );
    out.push_str(TIME_MARKER);
    out.push_str(&record.timestamp);
    out.push_str(DATA_MARKER);
    out.push_str(&record.payload);
    out.push(' ');
    out.push_str(&record.sequence.to_string());
    Bytes::from(out.into_bytes())
}

/// Decode a received radio payload
///
/// Total function: arbitrary bytes (including invalid UTF-8) decode to
/// either `Parsed` or `Legacy`, never an error. The markers must appear
/// with the timestamp marker first; anything else takes the legacy path.
pub fn decode_packet(bytes: &[u8]) -> Decoded {
    let text = String::from_utf8_lossy(bytes);

    let Some(time_at) = text.find(TIME_MARKER) else {
        return Decoded::Legacy {
            payload: text.into_owned(),
        };
    };
    let Some(data_at) = text.find(DATA_MARKER) else {
        return Decoded::Legacy {
            payload: text.into_owned(),
        };
    };
    if data_at < time_at + TIME_MARKER.len() {
        return Decoded::Legacy {
            payload: text.into_owned(),
        };
    }

    let timestamp = text[time_at + TIME_MARKER.len()..data_at].to_string();
    let payload = text[data_at + DATA_MARKER.len()..].to_string();
    Decoded::Parsed { timestamp, payload }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sequence: u64) -> HeartbeatRecord {
        HeartbeatRecord::new(sequence, "13:37:00".to_string(), "beacon".to_string())
    }

    #[test]
    fn test_encode_exact_form() {
        let bytes = encode_heartbeat(&record(42));
        assert_eq!(&bytes[..], b"TIME:13:37:00|DATA:beacon 42");
    }

    #[test]
    fn test_roundtrip() {
        let original = record(3);
        let decoded = decode_packet(&encode_heartbeat(&original));

        assert_eq!(decoded.timestamp(), "13:37:00");
        assert_eq!(decoded.payload(), "beacon 3");
        assert_eq!(decoded.sequence(), Some(3));
        assert!(!decoded.is_legacy());
    }

    #[test]
    fn test_decode_plain_text_is_legacy() {
        let decoded = decode_packet(b"hello from an old node");

        assert!(decoded.is_legacy());
        assert_eq!(decoded.timestamp(), "");
        assert_eq!(decoded.payload(), "hello from an old node");
        assert_eq!(decoded.sequence(), None);
    }

    #[test]
    fn test_decode_markers_out_of_order_is_legacy() {
        let decoded = decode_packet(b"|DATA:beacon 1TIME:13:37:00");

        assert!(decoded.is_legacy());
        assert_eq!(decoded.payload(), "|DATA:beacon 1TIME:13:37:00");
    }

    #[test]
    fn test_decode_single_marker_is_legacy() {
        assert!(decode_packet(b"TIME:13:37:00").is_legacy());
        assert!(decode_packet(b"|DATA:beacon 1").is_legacy());
    }

    #[test]
    fn test_decode_empty_input() {
        let decoded = decode_packet(b"");

        assert!(decoded.is_legacy());
        assert_eq!(decoded.payload(), "");
    }

    #[test]
    fn test_decode_invalid_utf8_is_legacy() {
        let decoded = decode_packet(&[0xFF, 0xFE, 0x80]);

        assert!(decoded.is_legacy());
        assert_eq!(decoded.timestamp(), "");
    }

    #[test]
    fn test_decode_empty_timestamp() {
        // Adjacent markers parse as an empty timestamp, not as legacy
        let decoded = decode_packet(b"TIME:|DATA:beacon 9");

        assert_eq!(decoded, Decoded::Parsed {
            timestamp: String::new(),
            payload: "beacon 9".to_string(),
        });
    }

    #[test]
    fn test_sequence_non_numeric_tail() {
        let decoded = decode_packet(b"TIME:13:37:00|DATA:beacon only");
        assert_eq!(decoded.sequence(), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn roundtrip_recovers_record(
                sequence in any::<u64>(),
                timestamp in "[0-2][0-9]:[0-5][0-9]:[0-5][0-9]",
                payload in "[a-zA-Z0-9_-][a-zA-Z0-9_ -]{0,31}",
            ) {
                let original = HeartbeatRecord::new(sequence, timestamp.clone(), payload.clone());
                let decoded = decode_packet(&encode_heartbeat(&original));

                prop_assert_eq!(decoded.timestamp(), timestamp.as_str());
                prop_assert_eq!(decoded.payload(), format!("{} {}", payload, sequence));
                prop_assert_eq!(decoded.sequence(), Some(sequence));
            }

            #[test]
            fn decode_is_total(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                // Must never panic, whatever the radio hands us
                let _ = decode_packet(&bytes);
            }

            #[test]
            fn markerless_input_is_preserved(text in "[a-z ]{0,64}") {
                let decoded = decode_packet(text.as_bytes());

                prop_assert!(decoded.is_legacy());
                prop_assert_eq!(decoded.payload(), text.as_str());
                prop_assert_eq!(decoded.timestamp(), "");
            }
        }
    }
}
