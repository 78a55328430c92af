//! Radio transceiver seam

use lorabeat_core::LorabeatResult;

/// Channel parameters for a long-range packet radio
#[derive(Clone, Debug)]
pub struct ChannelParams {
    /// Carrier frequency in Hz
    pub frequency_hz: u32,
    /// Channel bandwidth in Hz
    pub bandwidth_hz: u32,
    /// Spreading factor (7..=12 for LoRa-class radios)
    pub spreading_factor: u8,
    /// Transmit power in dBm
    pub tx_power_dbm: i8,
}

impl Default for ChannelParams {
    fn default() -> Self {
        // EU868 single-channel defaults
        ChannelParams {
            frequency_hz: 868_100_000,
            bandwidth_hz: 125_000,
            spreading_factor: 9,
            tx_power_dbm: 14,
        }
    }
}

/// Packet radio transceiver
///
/// The link is fire-and-forget: `send` reports transmit success only, there
/// is no delivery confirmation and no retransmission. Framing and integrity
/// checks belong to the radio layer behind this trait.
pub trait Radio {
    /// Apply channel parameters. Retried by the startup sequencer until it
    /// succeeds.
    fn configure(&mut self, params: &ChannelParams) -> LorabeatResult<()>;

    /// Transmit one packet. False means the transmit failed; the caller
    /// drops the packet.
    fn send(&mut self, bytes: &[u8]) -> bool;

    /// Non-blocking poll for one received packet and its RSSI in dBm.
    fn poll_received(&mut self) -> Option<(Vec<u8>, i16)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_in_band() {
        let params = ChannelParams::default();

        assert!(params.frequency_hz >= 868_000_000 && params.frequency_hz < 869_000_000);
        assert!((7..=12).contains(&params.spreading_factor));
    }
}
