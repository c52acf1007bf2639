//! Wire format for the Lumatrix display node
//!
//! This crate defines everything that crosses the transport link between the
//! node and its bridge server. The link carries exactly two kinds of
//! application traffic:
//!
//! - **Binary messages**: one pixel-grid snapshot per message, packed RGB565
//!   (two bytes per pixel, big-endian, row-major). Decoded by [`pixel`].
//! - **Text messages**: small UTF-8 JSON payloads. The node sends a single
//!   join handshake per session; the server sends informational status
//!   messages. Defined in [`messages`].
//!
//! Transport framing, keep-alive, and TLS are the transport library's
//! concern and do not appear here.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod messages;
pub mod pixel;

pub use messages::{ControlMessage, JoinMessage, MessageError, JOIN_ROLE};
pub use pixel::{decode_frame, rgb565_to_rgb24, FrameError, Rgb24, BYTES_PER_PIXEL};
