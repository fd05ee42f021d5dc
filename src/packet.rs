//! Source RCON wire format.
//!
//! Every packet on the wire is framed as:
//!
//! ```text
//! size:i32le | id:i32le | type:i32le | payload bytes | \x00\x00
//! ```
//!
//! where `size` counts everything after itself (10 bytes of header and
//! terminator plus the payload). All integers are little-endian signed
//! 32-bit. Request ids correlate responses to requests and are drawn at
//! random per packet.

use std::io::{Read, Write};

use rand::Rng;
use tracing::warn;

use crate::error::Result;

/// Authentication request (client -> server).
pub const SERVERDATA_AUTH: i32 = 3;
/// Authentication response (server -> client). Shares the value 2 with
/// [`SERVERDATA_EXECCOMMAND`]; direction disambiguates.
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;
/// Command execution request (client -> server).
pub const SERVERDATA_EXECCOMMAND: i32 = 2;
/// Command response (server -> client).
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Two NUL bytes closing every packet.
const TERMINATOR: [u8; 2] = [0, 0];

/// Generate a random request id in `[0, i32::MAX]`.
pub fn random_request_id() -> i32 {
    rand::thread_rng().gen_range(0..=i32::MAX)
}

/// One RCON packet, request or response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Correlation id. `-1` in an auth response means rejected credentials.
    pub id: i32,
    /// Packet type, one of the `SERVERDATA_*` constants.
    pub ptype: i32,
    /// Raw payload without the terminator.
    pub payload: Vec<u8>,
}

impl Packet {
    /// Create a login packet carrying the password.
    pub fn login(password: &str) -> Self {
        Packet {
            id: random_request_id(),
            ptype: SERVERDATA_AUTH,
            payload: password.as_bytes().to_vec(),
        }
    }

    /// Create a command packet.
    pub fn command(command: &str) -> Self {
        Packet {
            id: random_request_id(),
            ptype: SERVERDATA_EXECCOMMAND,
            payload: command.as_bytes().to_vec(),
        }
    }

    /// Write the packet to a stream, prepending the size field.
    ///
    /// # Errors
    ///
    /// Propagates any write failure from the underlying stream.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let size = 10 + self.payload.len() as i32;
        writer.write_all(&size.to_le_bytes())?;
        writer.write_all(&self.id.to_le_bytes())?;
        writer.write_all(&self.ptype.to_le_bytes())?;
        writer.write_all(&self.payload)?;
        writer.write_all(&TERMINATOR)?;
        writer.flush()?;
        Ok(())
    }

    /// Read one packet from a stream.
    ///
    /// A packet closed by something other than two NUL bytes is logged and
    /// accepted; some servers get the terminator wrong.
    ///
    /// # Errors
    ///
    /// Propagates read failures, including `UnexpectedEof` on a truncated
    /// packet.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let size = read_i32(reader)?;
        let id = read_i32(reader)?;
        let ptype = read_i32(reader)?;

        let payload_len = (size - 10).max(0) as usize;
        let mut payload = vec![0u8; payload_len];
        reader.read_exact(&mut payload)?;

        let mut terminator = [0u8; 2];
        reader.read_exact(&mut terminator)?;
        if terminator != TERMINATOR {
            warn!(?terminator, "unexpected packet terminator");
        }

        Ok(Packet { id, ptype, payload })
    }

    /// The payload decoded as UTF-8, invalid sequences replaced.
    pub fn payload_text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}
