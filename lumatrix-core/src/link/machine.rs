//! Link state machine definition
//!
//! Connectivity is a function of the current state and an event. There is
//! no terminal state: the node runs indefinitely and every loss feeds back
//! into `AttachingNetwork`.

use super::events::LinkEvent;

/// Link states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Pre-boot; nothing attempted yet
    Idle,
    /// Network association in progress (or awaiting retry)
    AttachingNetwork,
    /// Associated, no session yet
    NetworkAttached,
    /// Transport connect in progress, open event not yet seen
    OpeningSession,
    /// Session usable; frames flow
    SessionOpen,
    /// Session closed; awaiting the reconnect policy
    SessionLost,
    /// Association lost; session torn down, re-attach pending
    NetworkLost,
}

impl LinkState {
    /// Check if a session is currently usable
    pub fn session_usable(&self) -> bool {
        matches!(self, LinkState::SessionOpen)
    }

    /// Check if the network association is believed healthy
    pub fn network_attached(&self) -> bool {
        matches!(
            self,
            LinkState::NetworkAttached
                | LinkState::OpeningSession
                | LinkState::SessionOpen
                | LinkState::SessionLost
        )
    }

    /// Check if the reconnect path may open a session from this state
    pub fn can_open_session(&self) -> bool {
        matches!(self, LinkState::NetworkAttached | LinkState::SessionLost)
    }

    /// Process an event and return the next state
    ///
    /// This is the core transition logic. A session cannot outlive its
    /// network attachment, so `NetworkDown` pulls every session-bearing
    /// state into `NetworkLost`.
    pub fn transition(self, event: LinkEvent) -> Self {
        use LinkEvent::*;
        use LinkState::*;

        match (self, event) {
            // Boot
            (Idle, AttachStarted) => AttachingNetwork,

            // Attaching
            (AttachingNetwork, NetworkUp) => NetworkAttached,
            // Failed attempt: stay and retry
            (AttachingNetwork, NetworkDown) => AttachingNetwork,

            // Session lifecycle
            (NetworkAttached, SessionOpening) => OpeningSession,
            (OpeningSession, SessionOpened) => SessionOpen,
            (OpeningSession, SessionClosed) => SessionLost,
            (SessionOpen, SessionClosed) => SessionLost,
            (SessionLost, SessionOpening) => OpeningSession,

            // Network loss from any session-bearing state
            (NetworkAttached, NetworkDown) => NetworkLost,
            (OpeningSession, NetworkDown) => NetworkLost,
            (SessionOpen, NetworkDown) => NetworkLost,
            (SessionLost, NetworkDown) => NetworkLost,

            // Recovery
            (NetworkLost, AttachStarted) => AttachingNetwork,

            // Default: stay in current state
            _ => self,
        }
    }
}
