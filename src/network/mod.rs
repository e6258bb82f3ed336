//! Network Module
//!
//! TCP session handling for the RCON client.
//!
//! ## Architecture
//! - One blocking TCP connection per session
//! - Auth exchange runs inside `Session::connect`
//! - One request in flight at a time

mod session;

pub use session::{Session, SessionState};
