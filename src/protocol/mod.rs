//! Protocol Module
//!
//! Defines the RCON wire protocol.
//!
//! ## Packet Format
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────────┬──────────┐
//! │ Size (4) │  Id (4)  │ Type (4) │    Body      │ Null (2) │
//! └──────────┴──────────┴──────────┴──────────────┴──────────┘
//! ```
//!
//! ### Packet Types
//! - 0: RESPONSE_VALUE          - command output from the server
//! - 2: EXECCOMMAND / AUTH_RESPONSE
//! - 3: AUTH                    - Payload: password
//!
//! ### Auth Failure
//! The server answers a rejected AUTH with id = -1.
//!
//! ### Limitations
//! Large responses may be split by the server over several packets.
//! Only the first packet is read; fragments are not reassembled.

mod packet;
mod codec;

pub use packet::{
    Packet, PacketType, AUTH_FAILED_ID, MAX_PACKET_SIZE, REQUEST_ID, SIZE_OVERHEAD,
};
pub use codec::{
    encode_packet, decode_packet, read_packet, write_packet,
    HEADER_SIZE, MIN_PACKET_SIZE, TERMINATOR,
};
