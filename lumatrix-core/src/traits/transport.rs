//! Transport session abstraction
//!
//! Wraps the streaming transport library (handshake, keep-alive framing,
//! TLS) as a duplex message channel. Event-callback APIs are reframed as a
//! synchronous [`Transport::poll`] returning one typed event at a time, so
//! the node loop processes traffic strictly in receipt order with no
//! hidden re-entrancy.

use crate::config::TransportTarget;

/// Errors that can occur on the transport session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Connect attempt failed (resolution, handshake, or timeout inside
    /// the transport library's own bound)
    ConnectFailed,
    /// Send failed; the session should be considered lost
    SendFailed,
}

/// One lifecycle or message event delivered by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportEvent<'a> {
    /// Session became usable
    Opened,
    /// Session closed (peer close, error, or network drop)
    Closed,
    /// Discrete binary message (pixel frame)
    Binary(&'a [u8]),
    /// Discrete text message (UTF-8 JSON control payload)
    Text(&'a str),
    /// Keep-alive ping; the transport answers it itself
    Ping,
    /// Keep-alive pong
    Pong,
}

/// Trait for one logical connection to the remote peer
///
/// Sessions are single-use: after a closure the same object may be asked
/// to `open` again, but the implementation must start a fresh connection,
/// never resume the old one.
pub trait Transport {
    /// Open a connection to `target`.
    ///
    /// Blocks up to the transport library's own connect timeout. On
    /// success an [`TransportEvent::Opened`] event is delivered via
    /// [`Transport::poll`].
    fn open(&mut self, target: &TransportTarget) -> Result<(), SessionError>;

    /// Gracefully close the current connection, if any
    fn close(&mut self);

    /// Whether a session is currently open
    fn is_open(&self) -> bool;

    /// Poll for the next pending event, in receipt order.
    ///
    /// Returns `None` when no event is pending. Payload references are
    /// only valid until the next call.
    fn poll(&mut self) -> Option<TransportEvent<'_>>;

    /// Send a text message on the open session
    fn send_text(&mut self, text: &str) -> Result<(), SessionError>;
}
