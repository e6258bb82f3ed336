//! Error types for rconkit
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RconError
pub type Result<T> = std::result::Result<T, RconError>;

/// Unified error type for rconkit operations
#[derive(Debug, Error)]
pub enum RconError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Timed out connecting to {address}")]
    ConnectTimeout { address: String },

    #[error("Failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("Short read: expected {expected} bytes, got {read}")]
    ShortRead { expected: usize, read: usize },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Authentication failed: server rejected the password")]
    Authentication,

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("Session is closed")]
    SessionClosed,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RconError {
    /// True when the server rejected the credentials
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, RconError::Authentication)
    }

    /// True for failures of the transport itself (dial, read, write)
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            RconError::ConnectTimeout { .. }
                | RconError::Connect { .. }
                | RconError::Io(_)
                | RconError::Write(_)
                | RconError::ShortRead { .. }
        )
    }
}
