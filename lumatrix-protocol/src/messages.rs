//! JSON control payloads
//!
//! Two payloads travel as text messages:
//!
//! - The **join handshake**, sent node → server once per opened session:
//!   `{"type":"join","role":"matrix","pair":<id>}`. The pair id lets the
//!   server route frames from the paired sender to this panel.
//! - **Server status messages**, server → node. These are informational
//!   only; the node logs them and never acts on them, so only the `type`
//!   discriminator is modeled.

use serde::{Deserialize, Serialize};

/// Role reported in the join handshake
pub const JOIN_ROLE: &str = "matrix";

/// Capacity of the encoded join message buffer
pub const JOIN_CAPACITY: usize = 64;

/// Errors that can occur while encoding or parsing control payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Encoded payload does not fit the output buffer
    Overflow,
    /// Payload is not valid JSON or lacks required fields
    Malformed,
}

/// Join handshake sent once per opened session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoinMessage {
    #[serde(rename = "type")]
    msg_type: &'static str,
    role: &'static str,
    pair: u8,
}

impl JoinMessage {
    pub fn new(pair: u8) -> Self {
        Self {
            msg_type: "join",
            role: JOIN_ROLE,
            pair,
        }
    }

    /// Pair id carried by this handshake
    pub fn pair(&self) -> u8 {
        self.pair
    }

    /// Encode to the exact wire form expected by the server
    pub fn encode(&self) -> Result<heapless::String<JOIN_CAPACITY>, MessageError> {
        serde_json_core::to_string(self).map_err(|_| MessageError::Overflow)
    }
}

/// Control message received from the server
///
/// Payloads carry arbitrary extra fields; only the discriminator matters
/// to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlMessage<'a> {
    #[serde(rename = "type")]
    pub msg_type: &'a str,
}

impl<'a> ControlMessage<'a> {
    /// Parse a received text payload
    pub fn parse(text: &'a str) -> Result<Self, MessageError> {
        serde_json_core::from_str(text)
            .map(|(msg, _)| msg)
            .map_err(|_| MessageError::Malformed)
    }
}
