//! Bridge error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Connection, timeout or body decoding failure
    #[error("designkit backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Reachable backend answered with an unexpected status
    #[error("designkit backend returned {status}: {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, BridgeError>;
