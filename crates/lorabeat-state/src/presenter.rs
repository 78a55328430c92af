//! Status projection for the display adapter
//!
//! Pure mapping from link state to ordered display lines; the external
//! display adapter performs the actual render.

use crate::{LinkState, LinkStatus};

/// Static identity header, always the first display line
pub const HEADER: &str = "LORABEAT RX";

/// Project link state into display lines
///
/// Header, state, then (whenever a packet has ever been decoded) the
/// last-seen timestamp, payload, and signal strength. Last-seen data is
/// shown even while disconnected.
pub fn status_lines(state: &LinkState) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.push(HEADER.to_string());
    lines.push(state_label(state.status()).to_string());

    if let Some(packet) = &state.last_packet {
        lines.push(packet.timestamp().to_string());
        lines.push(packet.payload().to_string());
        lines.push(format!("{} dBm", state.last_rssi));
    }

    lines
}

fn state_label(status: LinkStatus) -> &'static str {
    match status {
        LinkStatus::Waiting => "WAITING",
        LinkStatus::Connected => "CONNECTED",
        LinkStatus::Disconnected => "DISCONNECTED",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use lorabeat_wire::Decoded;

    use super::*;

    #[test]
    fn test_waiting_shows_header_and_state_only() {
        let lines = status_lines(&LinkState::default());

        assert_eq!(lines, vec!["LORABEAT RX", "WAITING"]);
    }

    #[test]
    fn test_connected_shows_last_packet() {
        let state = LinkState {
            last_contact: Some(Instant::now()),
            last_packet: Some(Decoded::Parsed {
                timestamp: "10:00:20".to_string(),
                payload: "beacon 2".to_string(),
            }),
            last_rssi: -92,
            connected: true,
        };

        let lines = status_lines(&state);

        assert_eq!(
            lines,
            vec![
                "LORABEAT RX",
                "CONNECTED",
                "10:00:20",
                "beacon 2",
                "-92 dBm",
            ]
        );
    }

    #[test]
    fn test_disconnected_keeps_last_seen_data() {
        let state = LinkState {
            last_contact: Some(Instant::now()),
            last_packet: Some(Decoded::Parsed {
                timestamp: "10:00:20".to_string(),
                payload: "beacon 2".to_string(),
            }),
            last_rssi: -92,
            connected: false,
        };

        let lines = status_lines(&state);

        assert_eq!(lines[1], "DISCONNECTED");
        assert_eq!(lines[2], "10:00:20");
        assert_eq!(lines[3], "beacon 2");
        assert_eq!(lines[4], "-92 dBm");
    }

    #[test]
    fn test_legacy_packet_has_empty_timestamp_line() {
        let state = LinkState {
            last_contact: Some(Instant::now()),
            last_packet: Some(Decoded::Legacy {
                payload: "raw".to_string(),
            }),
            last_rssi: -100,
            connected: true,
        };

        let lines = status_lines(&state);

        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "raw");
    }
}
