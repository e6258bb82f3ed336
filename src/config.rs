//! Configuration for rconkit
//!
//! Explicit client configuration with sensible defaults.

use std::time::Duration;

use crate::error::{RconError, Result};

/// Default TCP dial timeout (milliseconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

/// Client configuration for one RCON exchange
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Target
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub address: String,

    /// RCON password sent in the auth packet
    pub password: String,

    /// Command executed by `client::run`
    pub command: String,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP dial timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Read timeout after connect (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Write timeout after connect (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:25575".to_string(),
            password: String::new(),
            command: String::new(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Dial timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Check the config before it is used to dial
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(RconError::Config("address must not be empty".to_string()));
        }
        // TcpStream::connect_timeout rejects a zero duration
        if self.connect_timeout_ms == 0 {
            return Err(RconError::Config(
                "connect timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (host:port)
    pub fn address(mut self, addr: impl Into<String>) -> Self {
        self.config.address = addr.into();
        self
    }

    /// Set the RCON password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the command to execute
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.config.command = command.into();
        self
    }

    /// Set the dial timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
