//! Connectivity supervisor
//!
//! Owns the link state and performs the attach/open/teardown mechanics
//! against the platform traits. Reconnect *policy* (when to retry) lives
//! in the protocol handler; the supervisor only provides the operations
//! and keeps the state machine honest.

use crate::config::{Credentials, TransportTarget};
use crate::traits::{AttachError, NetworkInterface, SessionError, Transport};

use super::{LinkEvent, LinkState};

/// Errors the core cannot recover from
///
/// The outer driver is expected to respond with a full process restart;
/// no partial-state recovery is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FatalError {
    /// Network association did not complete within the attach timeout
    NetworkAttachTimeout,
}

/// Connectivity supervisor state
#[derive(Debug, Clone)]
pub struct Supervisor {
    state: LinkState,
    /// Timestamp of the last successful attach
    last_attach_ms: Option<u32>,
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            state: LinkState::Idle,
            last_attach_ms: None,
        }
    }

    /// Current link state
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Check if a session is currently usable
    pub fn session_usable(&self) -> bool {
        self.state.session_usable()
    }

    /// Timestamp of the last successful attach, if any
    pub fn last_attach_ms(&self) -> Option<u32> {
        self.last_attach_ms
    }

    fn apply(&mut self, event: LinkEvent) {
        let next = self.state.transition(event);
        if next != self.state {
            debug!("link {} -> {}", self.state, next);
            self.state = next;
        }
    }

    /// Associate with the configured network (blocking).
    ///
    /// Any open session is torn down first; a session cannot outlive its
    /// network attachment. A timeout is fatal — the radio stack is assumed
    /// unrecoverable after a stuck association attempt. Any other failure
    /// leaves the state in `AttachingNetwork` for a rate-limited retry.
    pub fn attach_network<N, T>(
        &mut self,
        network: &mut N,
        transport: &mut T,
        credentials: &Credentials,
        timeout_ms: u32,
        now_ms: u32,
    ) -> Result<(), FatalError>
    where
        N: NetworkInterface,
        T: Transport,
    {
        if transport.is_open() {
            transport.close();
        }
        self.apply(LinkEvent::AttachStarted);

        // Reset any stale association before a fresh attempt
        network.detach();

        info!("attaching network, {} mode", credentials.mode_name());
        match network.attach(credentials, timeout_ms) {
            Ok(()) => {
                self.last_attach_ms = Some(now_ms);
                self.apply(LinkEvent::NetworkUp);
                info!("network attached");
                Ok(())
            }
            Err(AttachError::Timeout) => {
                warn!("network attach timed out");
                Err(FatalError::NetworkAttachTimeout)
            }
            Err(AttachError::Failed) => {
                warn!("network attach failed");
                self.apply(LinkEvent::NetworkDown);
                Ok(())
            }
        }
    }

    /// Open a fresh transport session to `target`.
    ///
    /// Any prior session object is closed and discarded first; sessions
    /// are never reused or pooled. The state stays `OpeningSession` until
    /// the transport delivers its open event.
    pub fn open_session<T>(
        &mut self,
        transport: &mut T,
        target: &TransportTarget,
    ) -> Result<(), SessionError>
    where
        T: Transport,
    {
        if transport.is_open() {
            transport.close();
        }
        self.apply(LinkEvent::SessionOpening);

        match transport.open(target) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.apply(LinkEvent::SessionClosed);
                Err(e)
            }
        }
    }

    /// The transport reported the session usable
    pub fn on_session_opened(&mut self) {
        self.apply(LinkEvent::SessionOpened);
    }

    /// The transport reported the session closed
    pub fn on_session_closed(&mut self) {
        self.apply(LinkEvent::SessionClosed);
    }

    /// The network association was lost; tear down the session with it
    pub fn on_network_lost<T>(&mut self, transport: &mut T)
    where
        T: Transport,
    {
        if transport.is_open() {
            transport.close();
        }
        self.apply(LinkEvent::NetworkDown);
    }
}
