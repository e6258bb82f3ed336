//! RCON Session
//!
//! One authenticated TCP connection to an RCON server.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{RconError, Result};
use crate::protocol::{read_packet, write_packet, Packet};

/// Lifecycle of a session
///
/// A `Session` value only exists once the TCP dial has succeeded, so the
/// unconnected state is represented by not having one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Dialed, auth exchange in progress
    Authenticating,

    /// Authenticated, commands may be executed
    Ready,

    /// Released; no further I/O is possible
    Closed,
}

/// Client side of one RCON connection
///
/// Strictly one request in flight: every call writes one packet and
/// blocks until one packet comes back. There is no internal locking;
/// wrap the session in a mutex to share it.
pub struct Session {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,

    state: SessionState,
}

impl Session {
    /// Dial `address` and authenticate with `password`
    ///
    /// Uses the default 5 second dial timeout and no read/write deadline.
    pub fn connect(address: &str, password: &str) -> Result<Self> {
        let config = Config::builder()
            .address(address)
            .password(password)
            .build();
        Self::connect_with(&config)
    }

    /// Dial and authenticate using an explicit config
    ///
    /// On any failure after the dial, the socket is shut down before the
    /// error is returned; no half-open session is handed out.
    pub fn connect_with(config: &Config) -> Result<Self> {
        config.validate()?;

        let stream = dial(&config.address, config.connect_timeout())?;
        let mut session = Self::from_stream(stream)?;

        let result = session
            .set_timeouts(config.read_timeout_ms, config.write_timeout_ms)
            .and_then(|_| session.authenticate(&config.password));

        if let Err(e) = result {
            session.close_quietly();
            return Err(e);
        }

        session.state = SessionState::Ready;
        Ok(session)
    }

    /// Wrap a freshly dialed stream
    fn from_stream(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Requests are tiny and we always wait on the reply
        stream.set_nodelay(true)?;

        let reply_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(reply_stream),
            writer: BufWriter::new(stream),
            peer_addr,
            state: SessionState::Authenticating,
        })
    }

    /// Configure post-connect timeouts (0 leaves the socket blocking)
    fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.reader
                .get_ref()
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.writer
                .get_ref()
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }
        Ok(())
    }

    /// Send the password and check the server's verdict
    ///
    /// Only the id of the reply matters; its type and body are ignored.
    fn authenticate(&mut self, password: &str) -> Result<()> {
        tracing::debug!("Authenticating with {}", self.peer_addr);

        let request = Packet::auth(password)?;
        let response = self.exchange(&request)?;

        if response.is_auth_failure() {
            tracing::warn!("Authentication rejected by {}", self.peer_addr);
            return Err(RconError::Authentication);
        }

        tracing::debug!("Authenticated with {}", self.peer_addr);
        Ok(())
    }

    /// Execute a command and return the response body as text
    ///
    /// Only the first response packet is read. If the server splits a
    /// long response over several packets, the rest are left unread.
    /// Any I/O or decode failure closes the session.
    pub fn execute(&mut self, command: &str) -> Result<String> {
        if self.state != SessionState::Ready {
            return Err(RconError::SessionClosed);
        }

        let request = Packet::exec(command)?;
        tracing::debug!("Executing command on {}: {}", self.peer_addr, command);

        match self.exchange(&request) {
            Ok(response) => Ok(response.body_text()),
            Err(e) => {
                tracing::warn!("Command failed on {}: {}", self.peer_addr, e);
                self.close_quietly();
                Err(e)
            }
        }
    }

    /// One write followed by one read
    fn exchange(&mut self, request: &Packet) -> Result<Packet> {
        write_packet(&mut self.writer, request)?;
        read_packet(&mut self.reader)
    }

    /// Release the connection
    ///
    /// Idempotent: closing an already closed session is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        self.state = SessionState::Closed;
        tracing::debug!("Closing session with {}", self.peer_addr);

        match self.writer.get_ref().shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // Peer already hung up
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn close_quietly(&mut self) {
        if let Err(e) = self.close() {
            tracing::debug!("Error closing session with {}: {}", self.peer_addr, e);
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Dial every resolved address in turn until one accepts
fn dial(address: &str, timeout: Duration) -> Result<TcpStream> {
    let addrs = address
        .to_socket_addrs()
        .map_err(|source| RconError::Connect {
            address: address.to_string(),
            source,
        })?;

    let mut last_err = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => {
                tracing::debug!("Connected to {}", addr);
                return Ok(stream);
            }
            Err(e) => {
                tracing::debug!("Dial to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(dial_error(address, last_err))
}

/// Map the last dial failure to the error reported to the caller
fn dial_error(address: &str, last_err: Option<std::io::Error>) -> RconError {
    match last_err {
        Some(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
            RconError::ConnectTimeout {
                address: address.to_string(),
            }
        }
        Some(source) => RconError::Connect {
            address: address.to_string(),
            source,
        },
        None => RconError::Connect {
            address: address.to_string(),
            source: std::io::Error::new(
                ErrorKind::AddrNotAvailable,
                "address resolved to no socket addresses",
            ),
        },
    }
}
