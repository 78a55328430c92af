//! Heartbeat monitor node, desk demo over the UDP stand-in driver
//!
//! Environment:
//! - `LORABEAT_LOCAL`   local bind address (default 127.0.0.1:7102)
//! - `LORABEAT_PEER`    peer address       (default 127.0.0.1:7101)
//! - `LORABEAT_TIMEOUT` liveness timeout, e.g. "25s" (default 25s)

use std::net::SocketAddr;
use std::time::Duration;

use lorabeat_runtime::{init_radio, ConsoleDisplay, ReceiverConfig, ReceiverNode};
use lorabeat_transport::{ChannelParams, UdpRadio};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let local: SocketAddr = std::env::var("LORABEAT_LOCAL")
        .unwrap_or_else(|_| "127.0.0.1:7102".to_string())
        .parse()?;
    let peer: SocketAddr = std::env::var("LORABEAT_PEER")
        .unwrap_or_else(|_| "127.0.0.1:7101".to_string())
        .parse()?;

    let mut config = ReceiverConfig::default();
    if let Ok(timeout) = std::env::var("LORABEAT_TIMEOUT") {
        config.link.timeout = humantime::parse_duration(&timeout)?;
    }

    let mut display = ConsoleDisplay;
    let mut radio = UdpRadio::bind(local, peer)?;
    init_radio(
        &mut radio,
        &ChannelParams::default(),
        &mut display,
        Duration::from_secs(2),
    );

    tracing::info!(%local, %peer, timeout = ?config.link.timeout, "monitor up");
    let mut node = ReceiverNode::new(radio, display, config);
    node.run()
}
