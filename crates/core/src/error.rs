use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum SccsError {
    #[error("config error: {0}")]
    Config(String),

    #[error("chain error: {0}")]
    Chain(String),

    #[error("rate feed error: {0}")]
    Rate(String),

    #[error("{0}")]
    Invalid(String),

    #[error("identity verification (KYC) required")]
    KycRequired,

    #[error("wallet not connected")]
    NotConnected,
}

pub type Result<T, E = SccsError> = std::result::Result<T, E>;
