//! In-memory radio pair for tests and demos

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use lorabeat_core::LorabeatResult;

use crate::{ChannelParams, Radio};

/// Synthetic signal strength reported by a loopback pair
pub const LOOPBACK_RSSI: i16 = -42;

/// One end of an in-memory radio link
///
/// Every packet sent on one end appears on `poll_received` of the other.
/// A dropped peer makes `send` report transmit failure, which stands in for
/// an unpowered transceiver.
pub struct LoopbackRadio {
    tx: Sender<Vec<u8>>,
    rx: Receiver<Vec<u8>>,
    rssi: i16,
}

impl LoopbackRadio {
    /// Create a connected pair of radios
    pub fn pair() -> (LoopbackRadio, LoopbackRadio) {
        let (a_tx, b_rx) = mpsc::channel();
        let (b_tx, a_rx) = mpsc::channel();
        (
            LoopbackRadio {
                tx: a_tx,
                rx: a_rx,
                rssi: LOOPBACK_RSSI,
            },
            LoopbackRadio {
                tx: b_tx,
                rx: b_rx,
                rssi: LOOPBACK_RSSI,
            },
        )
    }

    /// Override the synthetic RSSI reported with received packets
    pub fn set_rssi(&mut self, rssi: i16) {
        self.rssi = rssi;
    }
}

impl Radio for LoopbackRadio {
    fn configure(&mut self, _params: &ChannelParams) -> LorabeatResult<()> {
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> bool {
        self.tx.send(bytes.to_vec()).is_ok()
    }

    fn poll_received(&mut self) -> Option<(Vec<u8>, i16)> {
        match self.rx.try_recv() {
            Ok(bytes) => Some((bytes, self.rssi)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
