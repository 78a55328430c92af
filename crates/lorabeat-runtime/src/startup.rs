//! Startup sequencing: network join, clock sync, radio init
//!
//! The scheduler must not start before the network is joined and the clock
//! is synced. Both steps are bounded retries with backoff and display
//! feedback; only radio init retries indefinitely, since nothing can flow
//! without the transceiver.

use std::thread;
use std::time::Duration;

use rand::Rng;

use lorabeat_core::{LorabeatError, LorabeatResult};
use lorabeat_time::{Credentials, NetLink};
use lorabeat_transport::{ChannelParams, Radio};

use crate::DisplaySink;

/// Bounded exponential backoff policy
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Delay multiplier applied after every failed attempt
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// No sleeping between attempts, for tests
    pub fn immediate(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            multiplier: 1.0,
        }
    }

    /// Delay before retrying after the given 1-based attempt
    ///
    /// Up to 10% jitter so restarting nodes do not retry in lockstep.
    fn delay_after(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_secs_f64()
            * self.multiplier.powi(attempt.saturating_sub(1) as i32);
        let capped = base.min(self.max_delay.as_secs_f64());
        if capped <= 0.0 {
            return Duration::ZERO;
        }
        let jitter = rand::thread_rng().gen_range(0.0..capped * 0.1);
        Duration::from_secs_f64(capped + jitter)
    }
}

/// Run `op` until it reports success or the policy is exhausted
///
/// `op` receives the 1-based attempt number. Returns the attempts used on
/// success, `None` after exhaustion. This replaces poll-until-success busy
/// loops at the startup seams.
pub fn retry_with_backoff<F>(policy: &RetryPolicy, mut op: F) -> Option<u32>
where
    F: FnMut(u32) -> bool,
{
    for attempt in 1..=policy.max_attempts {
        if op(attempt) {
            return Some(attempt);
        }
        if attempt < policy.max_attempts {
            thread::sleep(policy.delay_after(attempt));
        }
    }
    None
}

/// Startup configuration for the network-facing steps
#[derive(Clone, Debug)]
pub struct StartupConfig {
    pub credentials: Credentials,
    /// Per-attempt timeout handed to the network services
    pub attempt_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for StartupConfig {
    fn default() -> Self {
        StartupConfig {
            credentials: Credentials::new("lorabeat", ""),
            attempt_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }
}

/// Bring up network and clock before the scheduler may start
pub fn bring_up<N, D>(net: &mut N, display: &mut D, config: &StartupConfig) -> LorabeatResult<()>
where
    N: NetLink,
    D: DisplaySink,
{
    let joined = retry_with_backoff(&config.retry, |attempt| {
        display.render(&[format!("JOIN {} ({})", config.credentials.network, attempt)]);
        net.join_network(&config.credentials, config.attempt_timeout)
    });
    match joined {
        Some(attempts) => tracing::info!(attempts, "network joined"),
        None => {
            display.render(&["JOIN FAILED".to_string()]);
            return Err(LorabeatError::JoinFailed {
                attempts: config.retry.max_attempts,
            });
        }
    }

    let synced = retry_with_backoff(&config.retry, |attempt| {
        display.render(&[format!("CLOCK SYNC ({})", attempt)]);
        net.sync_clock(config.attempt_timeout)
    });
    match synced {
        Some(attempts) => tracing::info!(attempts, "clock synchronized"),
        None => {
            display.render(&["CLOCK SYNC FAILED".to_string()]);
            return Err(LorabeatError::SyncFailed {
                attempts: config.retry.max_attempts,
            });
        }
    }

    Ok(())
}

/// Configure the radio, retrying until it succeeds
///
/// The one fatal-until-resolved condition: there is no bound on attempts.
pub fn init_radio<R, D>(
    radio: &mut R,
    params: &ChannelParams,
    display: &mut D,
    retry_delay: Duration,
) where
    R: Radio,
    D: DisplaySink,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match radio.configure(params) {
            Ok(()) => {
                tracing::info!(attempt, "radio configured");
                return;
            }
            Err(e) => {
                tracing::warn!(attempt, "radio init failed: {}", e);
                display.render(&[format!("RADIO RETRY ({})", attempt)]);
                thread::sleep(retry_delay);
            }
        }
    }
}
