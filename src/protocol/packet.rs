//! Packet definitions
//!
//! One framed unit of the RCON protocol.

use crate::error::{RconError, Result};

/// Bytes counted by `size` besides the body: id (4) + type (4) + terminator (2)
pub const SIZE_OVERHEAD: usize = 10;

/// Id the server puts in an auth response when the password is wrong
pub const AUTH_FAILED_ID: i32 = -1;

/// Id used for every request this client sends
pub const REQUEST_ID: i32 = 0;

/// Largest size field this crate will build or decode (16 MB)
pub const MAX_PACKET_SIZE: i32 = 16 * 1024 * 1024;

/// Packet types
///
/// Type 2 is shared: the client sends it to run a command and the
/// server sends it back as the auth response. Values outside the known
/// set are kept as `Other` so that a reply's id can still be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    ResponseValue,
    ExecCommandOrAuthResponse,
    Auth,
    Other(i32),
}

impl From<i32> for PacketType {
    fn from(value: i32) -> Self {
        match value {
            0 => PacketType::ResponseValue,
            2 => PacketType::ExecCommandOrAuthResponse,
            3 => PacketType::Auth,
            other => PacketType::Other(other),
        }
    }
}

impl From<PacketType> for i32 {
    fn from(packet_type: PacketType) -> Self {
        match packet_type {
            PacketType::ResponseValue => 0,
            PacketType::ExecCommandOrAuthResponse => 2,
            PacketType::Auth => 3,
            PacketType::Other(value) => value,
        }
    }
}

/// A single RCON packet
///
/// `size` is always `body.len() + 10`; construction rejects bodies for
/// which that would exceed `MAX_PACKET_SIZE`, so anything built here
/// can also be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    size: i32,
    id: i32,
    packet_type: PacketType,
    body: Vec<u8>,
}

impl Packet {
    /// Build a packet, deriving the size field from the body
    pub fn new(id: i32, packet_type: PacketType, body: impl Into<Vec<u8>>) -> Result<Self> {
        let body = body.into();
        let size = body
            .len()
            .checked_add(SIZE_OVERHEAD)
            .and_then(|n| i32::try_from(n).ok())
            .filter(|&n| n <= MAX_PACKET_SIZE)
            .ok_or_else(|| {
                RconError::Protocol(format!(
                    "Body too large: {} bytes (max packet size {})",
                    body.len(),
                    MAX_PACKET_SIZE
                ))
            })?;

        Ok(Self {
            size,
            id,
            packet_type,
            body,
        })
    }

    /// Auth request carrying the password
    pub fn auth(password: &str) -> Result<Self> {
        Self::new(REQUEST_ID, PacketType::Auth, password.as_bytes())
    }

    /// Command request
    pub fn exec(command: &str) -> Result<Self> {
        Self::new(REQUEST_ID, PacketType::ExecCommandOrAuthResponse, command.as_bytes())
    }

    /// Declared size: id + type + body + terminator
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    /// Body with the wire terminator already stripped
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the packet, keeping only the body
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as text (invalid UTF-8 is replaced)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// True when this is an auth response rejecting the password
    pub fn is_auth_failure(&self) -> bool {
        self.id == AUTH_FAILED_ID
    }
}
