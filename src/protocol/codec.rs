//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────────┬──────────┐
//! │ Size (4) │  Id (4)  │ Type (4) │    Body      │ 0x00 0x00│
//! └──────────┴──────────┴──────────┴──────────────┴──────────┘
//! ```
//!
//! All integers are little-endian i32. `Size` counts everything after
//! itself, so it is `body.len() + 10`.

use std::io::{ErrorKind, Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{RconError, Result};
use super::{Packet, PacketType, MAX_PACKET_SIZE, SIZE_OVERHEAD};

/// Header size: size (4) + id (4) + type (4)
pub const HEADER_SIZE: usize = 12;

/// Null terminator following every body
pub const TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Smallest legal size field (empty body)
pub const MIN_PACKET_SIZE: i32 = SIZE_OVERHEAD as i32;

// =============================================================================
// Packet Encoding/Decoding
// =============================================================================

/// Encode a packet to bytes
///
/// Format: size (4) + id (4) + type (4) + body + terminator (2)
pub fn encode_packet(packet: &Packet) -> Bytes {
    let mut buf = BytesMut::with_capacity(4 + packet.size() as usize);
    buf.put_i32_le(packet.size());
    buf.put_i32_le(packet.id());
    buf.put_i32_le(i32::from(packet.packet_type()));
    buf.put_slice(packet.body());
    buf.put_slice(&TERMINATOR);
    buf.freeze()
}

/// Decode a packet from the front of a byte slice
pub fn decode_packet(bytes: &[u8]) -> Result<Packet> {
    let mut reader = bytes;
    read_packet(&mut reader)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete packet from a stream
///
/// Blocks until the whole frame is received or an error occurs. The two
/// terminator bytes are dropped by position, so a body that itself ends
/// in zeros keeps them. Unknown type values decode as `PacketType::Other`.
pub fn read_packet<R: Read>(reader: &mut R) -> Result<Packet> {
    let size = read_i32_le(reader)?;
    let id = read_i32_le(reader)?;
    let packet_type = PacketType::from(read_i32_le(reader)?);

    if size < MIN_PACKET_SIZE {
        return Err(RconError::Protocol(format!(
            "Packet size {} is below the minimum of {}",
            size, MIN_PACKET_SIZE
        )));
    }
    if size > MAX_PACKET_SIZE {
        return Err(RconError::Protocol(format!(
            "Packet too large: {} bytes (max {})",
            size, MAX_PACKET_SIZE
        )));
    }

    // id and type are already consumed
    let region_len = (size - 8) as usize;
    let mut body = vec![0u8; region_len];
    read_full(reader, &mut body)?;
    body.truncate(region_len - TERMINATOR.len());

    tracing::trace!(
        "Decoded packet id={} type={:?} body_len={}",
        id,
        packet_type,
        body.len()
    );

    Packet::new(id, packet_type, body)
}

/// Write a packet to a stream
pub fn write_packet<W: Write>(writer: &mut W, packet: &Packet) -> Result<()> {
    let bytes = encode_packet(packet);
    writer.write_all(&bytes).map_err(RconError::Write)?;
    writer.flush().map_err(RconError::Write)?;
    tracing::trace!(
        "Wrote packet id={} type={:?} ({} bytes)",
        packet.id(),
        packet.packet_type(),
        bytes.len()
    );
    Ok(())
}

fn read_i32_le<R: Read>(reader: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    read_full(reader, &mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Fill `buf` completely, reporting how far we got if the stream ends
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut read = 0;
    while read < buf.len() {
        match reader.read(&mut buf[read..]) {
            Ok(0) => {
                return Err(RconError::ShortRead {
                    expected: buf.len(),
                    read,
                })
            }
            Ok(n) => read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RconError::Io(e)),
        }
    }
    Ok(())
}
