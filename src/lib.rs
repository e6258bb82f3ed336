//! # rconkit
//!
//! A small blocking client for the RCON remote console protocol:
//! - Little-endian, length-prefixed, null-terminated packet codec
//! - Password authentication on connect
//! - One command, one response, over a plain TCP connection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI / caller                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ connect / execute / close
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Session                                │
//! │          (one TcpStream, auth then commands)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Packet
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Packet Codec                              │
//! │        size | id | type | body | 0x00 0x00                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rconkit::Session;
//!
//! let mut session = Session::connect("127.0.0.1:25575", "secret")?;
//! let output = session.execute("list")?;
//! println!("Response: {}", output);
//! session.close()?;
//! # Ok::<(), rconkit::RconError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RconError, Result};
pub use config::Config;
pub use network::{Session, SessionState};
pub use protocol::{Packet, PacketType};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rconkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
