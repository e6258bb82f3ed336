//! One-shot client
//!
//! Connect, run the configured command, close.

use crate::config::Config;
use crate::error::Result;
use crate::network::Session;

/// Run `config.command` against `config.address` and return the response body
pub fn run(config: &Config) -> Result<String> {
    let mut session = Session::connect_with(config)?;
    let result = session.execute(&config.command);

    if let Err(e) = session.close() {
        tracing::warn!("Error closing session with {}: {}", session.peer_addr(), e);
    }

    result
}
