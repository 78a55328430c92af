//! Blocking UDP stand-in driver
//!
//! Lets the demo binaries run a full link on a desk without radio hardware.
//! RF channel parameters have no meaning here and `configure` accepts them
//! as-is; RSSI is a fixed synthetic value since there is no front end to
//! measure one.

use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};

use lorabeat_core::{LorabeatError, LorabeatResult};

use crate::{ChannelParams, Radio};

/// Largest accepted datagram; generous for a one-line heartbeat
const MAX_PACKET_SIZE: usize = 512;

/// Synthetic RSSI reported for received datagrams
const UDP_RSSI: i16 = -60;

/// UDP socket wrapped as a `Radio`
pub struct UdpRadio {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpRadio {
    /// Bind a local address and aim transmissions at `peer`
    pub fn bind(local: SocketAddr, peer: SocketAddr) -> LorabeatResult<Self> {
        let socket =
            UdpSocket::bind(local).map_err(|e| LorabeatError::TransportError(e.to_string()))?;
        socket
            .set_nonblocking(true)
            .map_err(|e| LorabeatError::TransportError(e.to_string()))?;

        Ok(UdpRadio { socket, peer })
    }

    /// Bound local address
    pub fn local_addr(&self) -> LorabeatResult<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| LorabeatError::TransportError(e.to_string()))
    }
}

impl Radio for UdpRadio {
    fn configure(&mut self, _params: &ChannelParams) -> LorabeatResult<()> {
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> bool {
        match self.socket.send_to(bytes, self.peer) {
            Ok(sent) => sent == bytes.len(),
            Err(e) => {
                tracing::warn!("UDP send error: {}", e);
                false
            }
        }
    }

    fn poll_received(&mut self) -> Option<(Vec<u8>, i16)> {
        let mut buf = vec![0u8; MAX_PACKET_SIZE];
        match self.socket.recv_from(&mut buf) {
            Ok((len, _addr)) => {
                buf.truncate(len);
                Some((buf, UDP_RSSI))
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock => None,
            Err(e) => {
                tracing::warn!("UDP receive error: {}", e);
                None
            }
        }
    }
}
