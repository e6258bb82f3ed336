//! Codec Tests
//!
//! Tests for packet encoding/decoding and the stream helpers.

use std::io::{self, Cursor, Write};
use rconkit::RconError;
use rconkit::protocol::{
    Packet, PacketType,
    encode_packet, decode_packet,
    read_packet, write_packet,
    HEADER_SIZE, MAX_PACKET_SIZE,
};

/// Hand-build a frame so malformed headers can be tested
fn raw_frame(size: i32, id: i32, packet_type: i32, rest: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&size.to_le_bytes());
    bytes.extend_from_slice(&id.to_le_bytes());
    bytes.extend_from_slice(&packet_type.to_le_bytes());
    bytes.extend_from_slice(rest);
    bytes
}

// =============================================================================
// Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_auth() {
    let packet = Packet::auth("secret").unwrap();
    let decoded = decode_packet(&encode_packet(&packet)).unwrap();

    assert_eq!(decoded.id(), 0);
    assert_eq!(decoded.packet_type(), PacketType::Auth);
    assert_eq!(decoded.body(), b"secret");
    assert_eq!(decoded, packet);
}

#[test]
fn test_encode_decode_negative_id_and_empty_body() {
    let packet = Packet::new(-1, PacketType::ExecCommandOrAuthResponse, Vec::<u8>::new()).unwrap();
    let decoded = decode_packet(&encode_packet(&packet)).unwrap();

    assert_eq!(decoded.id(), -1);
    assert_eq!(decoded.packet_type(), PacketType::ExecCommandOrAuthResponse);
    assert!(decoded.body().is_empty());
    assert_eq!(decoded.size(), 10);
}

#[test]
fn test_encode_decode_binary_body() {
    let body: Vec<u8> = (0..=255).collect();
    let packet = Packet::new(42, PacketType::ResponseValue, body.clone()).unwrap();
    let decoded = decode_packet(&encode_packet(&packet)).unwrap();

    assert_eq!(decoded.id(), 42);
    assert_eq!(decoded.body(), body.as_slice());
}

#[test]
fn test_terminator_stripped_by_position() {
    // The body's own trailing zeros must survive; only the wire terminator goes
    let body = b"abc\x00\x00".to_vec();
    let packet = Packet::new(7, PacketType::ResponseValue, body.clone()).unwrap();
    let encoded = encode_packet(&packet);
    assert_eq!(&encoded[encoded.len() - 4..], &[0x00, 0x00, 0x00, 0x00]);

    let decoded = decode_packet(&encoded).unwrap();
    assert_eq!(decoded.body(), body.as_slice());
    assert_eq!(decoded.body().len(), 5);
}

// =============================================================================
// Wire Format Verification Tests
// =============================================================================

#[test]
fn test_wire_format_exec() {
    let packet = Packet::exec("help").unwrap();
    let encoded = encode_packet(&packet);

    // Expected: [0e 00 00 00][00 00 00 00][02 00 00 00][h e l p][00 00]
    //           size = 4+10  id           type          body     terminator
    assert_eq!(encoded.len(), HEADER_SIZE + 4 + 2);
    assert_eq!(&encoded[0..4], &[0x0E, 0x00, 0x00, 0x00]);
    assert_eq!(&encoded[4..8], &[0x00, 0x00, 0x00, 0x00]);
    assert_eq!(&encoded[8..12], &[0x02, 0x00, 0x00, 0x00]);
    assert_eq!(&encoded[12..16], b"help");
    assert_eq!(&encoded[16..18], &[0x00, 0x00]);
}

#[test]
fn test_size_field_matches_body_length() {
    for len in [0usize, 1, 9, 100, 4096] {
        let packet = Packet::new(0, PacketType::Auth, vec![b'a'; len]).unwrap();
        let encoded = encode_packet(&packet);

        let size = i32::from_le_bytes([encoded[0], encoded[1], encoded[2], encoded[3]]);
        assert_eq!(size as usize, len + 10);
        assert_eq!(encoded.len(), len + 14);
    }
}

#[test]
fn test_negative_id_little_endian() {
    let packet = Packet::new(-1, PacketType::Auth, b"x".to_vec()).unwrap();
    let encoded = encode_packet(&packet);
    assert_eq!(&encoded[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_short_stream_six_bytes() {
    let bytes = [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00];
    let result = decode_packet(&bytes);

    match result {
        Err(RconError::ShortRead { expected, read }) => {
            assert_eq!(expected, 4);
            assert_eq!(read, 2);
        }
        other => panic!("Expected ShortRead, got {:?}", other),
    }
}

#[test]
fn test_empty_stream() {
    let result = decode_packet(&[]);
    assert!(matches!(result, Err(RconError::ShortRead { expected: 4, read: 0 })));
}

#[test]
fn test_truncated_body() {
    // Declares a 5 byte body but only 3 bytes (no terminator) follow
    let bytes = raw_frame(15, 0, 0, b"hel");
    let result = decode_packet(&bytes);

    match result {
        Err(RconError::ShortRead { expected, read }) => {
            assert_eq!(expected, 7);
            assert_eq!(read, 3);
        }
        other => panic!("Expected ShortRead, got {:?}", other),
    }
}

#[test]
fn test_size_below_minimum() {
    // size - 8 = 1 leaves no room for the terminator
    let bytes = raw_frame(9, 0, 0, &[0x00]);
    let result = decode_packet(&bytes);
    assert!(matches!(result, Err(RconError::Protocol(_))));
    assert!(result.unwrap_err().to_string().contains("below the minimum"));
}

#[test]
fn test_negative_size() {
    let bytes = raw_frame(-20, 0, 0, &[]);
    let result = decode_packet(&bytes);
    assert!(matches!(result, Err(RconError::Protocol(_))));
}

#[test]
fn test_size_too_large() {
    let bytes = raw_frame(MAX_PACKET_SIZE + 1, 0, 0, &[]);
    let result = decode_packet(&bytes);
    assert!(matches!(result, Err(RconError::Protocol(_))));
    assert!(result.unwrap_err().to_string().contains("too large"));
}

#[test]
fn test_unknown_packet_type_is_kept() {
    let bytes = raw_frame(12, -1, 9, b"ok\x00\x00");
    let decoded = decode_packet(&bytes).unwrap();

    assert_eq!(decoded.id(), -1);
    assert_eq!(decoded.packet_type(), PacketType::Other(9));
    assert_eq!(decoded.body(), b"ok");
    assert!(decoded.is_auth_failure());

    // Re-encoding writes the same type value back
    assert_eq!(&encode_packet(&decoded)[..], bytes.as_slice());
}

#[test]
fn test_largest_buildable_packet_decodes() {
    let body = vec![b'z'; MAX_PACKET_SIZE as usize - 10];
    let packet = Packet::new(1, PacketType::ResponseValue, body).unwrap();
    assert_eq!(packet.size(), MAX_PACKET_SIZE);

    let decoded = decode_packet(&encode_packet(&packet)).unwrap();
    assert_eq!(decoded, packet);
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_write_read_packet() {
    let packet = Packet::exec("status").unwrap();

    let mut buffer = Vec::new();
    write_packet(&mut buffer, &packet).unwrap();

    let mut cursor = Cursor::new(buffer);
    let decoded = read_packet(&mut cursor).unwrap();
    assert_eq!(decoded, packet);
}

#[test]
fn test_stream_multiple_packets() {
    let packets = vec![
        Packet::auth("pw").unwrap(),
        Packet::exec("list").unwrap(),
        Packet::new(5, PacketType::ResponseValue, b"there are 0 players".to_vec()).unwrap(),
        Packet::new(6, PacketType::ResponseValue, Vec::<u8>::new()).unwrap(),
    ];

    let mut buffer = Vec::new();
    for packet in &packets {
        write_packet(&mut buffer, packet).unwrap();
    }

    // Each read must consume exactly one frame
    let mut cursor = Cursor::new(buffer);
    for expected in &packets {
        let decoded = read_packet(&mut cursor).unwrap();
        assert_eq!(&decoded, expected);
    }
    assert!(matches!(
        read_packet(&mut cursor),
        Err(RconError::ShortRead { read: 0, .. })
    ));
}

/// Writer that always fails
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_write_error() {
    let packet = Packet::exec("help").unwrap();
    let result = write_packet(&mut BrokenPipe, &packet);

    match result {
        Err(RconError::Write(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("Expected Write error, got {:?}", other),
    }
}
