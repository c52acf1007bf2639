//! Events that trigger link state transitions

/// Events that can trigger link state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// An attach attempt is starting
    AttachStarted,
    /// Network association completed
    NetworkUp,
    /// Network association failed or was lost
    NetworkDown,
    /// A session open attempt is starting
    SessionOpening,
    /// The transport reported the session usable
    SessionOpened,
    /// The transport reported the session closed
    SessionClosed,
}

impl LinkEvent {
    /// Check if this event comes from the network layer
    pub fn is_network_event(&self) -> bool {
        matches!(
            self,
            LinkEvent::AttachStarted | LinkEvent::NetworkUp | LinkEvent::NetworkDown
        )
    }

    /// Check if this event comes from the transport layer
    pub fn is_session_event(&self) -> bool {
        matches!(
            self,
            LinkEvent::SessionOpening | LinkEvent::SessionOpened | LinkEvent::SessionClosed
        )
    }
}
