//! Error types for the lorabeat link

use thiserror::Error;

/// Core lorabeat errors
#[derive(Error, Debug)]
pub enum LorabeatError {
    // Startup errors
    #[error("Network join failed after {attempts} attempts")]
    JoinFailed { attempts: u32 },

    #[error("Clock sync failed after {attempts} attempts")]
    SyncFailed { attempts: u32 },

    #[error("Radio init failed: {0}")]
    RadioInit(String),

    // Transport errors
    #[error("Transport error: {0}")]
    TransportError(String),
}

/// Result type for lorabeat operations
pub type LorabeatResult<T> = Result<T, LorabeatError>;
