//! Transport protocol handler
//!
//! Converts the raw transport event stream into the frame-display pipeline
//! and a control-message sink, and owns the reconnect *policy* layered on
//! the supervisor's reconnect *mechanism*:
//!
//! - a fresh open attempt no earlier than the configured delay after the
//!   previous closure (measured from the closure, not from the previous
//!   attempt, so a flapping link cannot produce a tight retry loop);
//! - after enough consecutive closures, the network attachment is
//!   re-verified before the next attempt, since repeated session failures
//!   usually mean the network went away underneath.

use lumatrix_protocol::{decode_frame, ControlMessage, FrameError};

use crate::config::NodeConfig;
use crate::link::{LinkState, Supervisor};
use crate::traits::{Canvas, TransportEvent};

/// What the node loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandlerAction {
    /// Nothing further
    None,
    /// The session just opened; send the join handshake
    SendJoin,
}

/// What the reconnect policy asks for on this iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReconnectAction {
    /// Session open or opening, or network not up: nothing to do
    None,
    /// Closure delay still running
    Wait,
    /// Open a fresh session now
    Reconnect {
        /// Re-verify network attachment before opening
        verify_network: bool,
    },
}

/// Protocol handler state
#[derive(Debug, Clone)]
pub struct ProtocolHandler {
    /// Closures (and failed opens) since the last successful open
    consecutive_failures: u8,
    /// When the session last closed (or an open attempt last failed)
    last_close_ms: Option<u32>,
    /// Successfully displayed frames since boot
    frames_shown: u32,
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolHandler {
    pub fn new() -> Self {
        Self {
            consecutive_failures: 0,
            last_close_ms: None,
            frames_shown: 0,
        }
    }

    /// Successfully displayed frames since boot
    pub fn frames_shown(&self) -> u32 {
        self.frames_shown
    }

    /// Closures since the last successful open
    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive_failures
    }

    /// Process one transport event.
    ///
    /// Messages are handled strictly in receipt order. Malformed traffic
    /// is absorbed here: an undersized or oversized frame is dropped with
    /// a diagnostic, a malformed control message is logged and ignored,
    /// and neither touches the display or the connection.
    pub fn on_event<C>(
        &mut self,
        event: &TransportEvent<'_>,
        canvas: &mut C,
        supervisor: &mut Supervisor,
        now_ms: u32,
    ) -> HandlerAction
    where
        C: Canvas,
    {
        match event {
            TransportEvent::Opened => {
                supervisor.on_session_opened();
                self.consecutive_failures = 0;
                info!("session open");
                HandlerAction::SendJoin
            }
            TransportEvent::Closed => {
                supervisor.on_session_closed();
                self.record_failure(now_ms);
                warn!("session closed, {} consecutive", self.consecutive_failures);
                HandlerAction::None
            }
            TransportEvent::Binary(wire) => {
                self.display_frame(wire, canvas);
                HandlerAction::None
            }
            TransportEvent::Text(text) => {
                match ControlMessage::parse(text) {
                    Ok(msg) => info!("control message: {}", msg.msg_type),
                    Err(_) => warn!("malformed control message dropped"),
                }
                HandlerAction::None
            }
            // Keep-alive is answered by the transport layer itself
            TransportEvent::Ping | TransportEvent::Pong => HandlerAction::None,
        }
    }

    /// Decode one wire frame into the back buffer and present it.
    ///
    /// The swap happens only after the entire buffer is populated; a frame
    /// of the wrong size performs no writes at all, so the front buffer
    /// always holds a complete previously swapped frame.
    fn display_frame<C>(&mut self, wire: &[u8], canvas: &mut C)
    where
        C: Canvas,
    {
        match decode_frame(wire, canvas.back_buffer()) {
            Ok(()) => {
                canvas.swap();
                self.frames_shown = self.frames_shown.wrapping_add(1);
                debug!("frame {} displayed", self.frames_shown);
            }
            Err(FrameError::SizeMismatch { got, expected }) => {
                warn!("frame size mismatch: got {}, expected {}", got, expected);
            }
        }
    }

    /// Record a failed open attempt (no `Closed` event is delivered for
    /// a connect that never succeeded).
    pub fn record_failure(&mut self, now_ms: u32) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.last_close_ms = Some(now_ms);
    }

    /// Decide whether a reconnect is due on this iteration.
    ///
    /// Idempotent with respect to an open or opening session: the policy
    /// reads the current link state and never re-enters an in-flight
    /// attempt. The delay is measured from the closure time.
    pub fn reconnect_action(
        &self,
        state: LinkState,
        now_ms: u32,
        config: &NodeConfig,
    ) -> ReconnectAction {
        if !state.can_open_session() {
            return ReconnectAction::None;
        }

        match self.last_close_ms {
            // No closure recorded: first connect after attach
            None => ReconnectAction::Reconnect {
                verify_network: false,
            },
            Some(closed_at) => {
                if now_ms.wrapping_sub(closed_at) >= config.reconnect_delay_ms {
                    ReconnectAction::Reconnect {
                        verify_network: self.consecutive_failures
                            >= config.session_failure_threshold,
                    }
                } else {
                    ReconnectAction::Wait
                }
            }
        }
    }
}
