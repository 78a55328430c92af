//! Heartbeat sender node, desk demo over the UDP stand-in driver
//!
//! Environment:
//! - `LORABEAT_LOCAL`  local bind address (default 127.0.0.1:7101)
//! - `LORABEAT_PEER`   peer address       (default 127.0.0.1:7102)
//! - `LORABEAT_PERIOD` transmit period, e.g. "10s" (default 10s)
//! - `LORABEAT_TAG`    heartbeat tag (default "beacon")

use std::net::SocketAddr;
use std::time::Duration;

use lorabeat_runtime::{
    bring_up, init_radio, ConsoleDisplay, HeartbeatScheduler, SenderConfig, StartupConfig,
};
use lorabeat_time::{HostNet, SystemClock};
use lorabeat_transport::{ChannelParams, UdpRadio};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let local: SocketAddr = std::env::var("LORABEAT_LOCAL")
        .unwrap_or_else(|_| "127.0.0.1:7101".to_string())
        .parse()?;
    let peer: SocketAddr = std::env::var("LORABEAT_PEER")
        .unwrap_or_else(|_| "127.0.0.1:7102".to_string())
        .parse()?;

    let mut config = SenderConfig::default();
    if let Ok(period) = std::env::var("LORABEAT_PERIOD") {
        config.period = humantime::parse_duration(&period)?;
    }
    if let Ok(tag) = std::env::var("LORABEAT_TAG") {
        config.tag = tag;
    }

    let mut display = ConsoleDisplay;
    let mut net = HostNet;
    bring_up(&mut net, &mut display, &StartupConfig::default())?;

    let mut radio = UdpRadio::bind(local, peer)?;
    init_radio(
        &mut radio,
        &ChannelParams::default(),
        &mut display,
        Duration::from_secs(2),
    );

    tracing::info!(%local, %peer, period = ?config.period, "beacon up");
    let mut scheduler = HeartbeatScheduler::new(radio, SystemClock, display, config);
    scheduler.run()
}
