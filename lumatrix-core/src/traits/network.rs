//! Network attach abstraction
//!
//! Wraps the platform's association/credential-negotiation primitives.
//! The core only ever needs "attach with these credentials", a health
//! check, and a teardown.

use crate::config::Credentials;

/// Errors that can occur during network attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttachError {
    /// Association did not complete within the timeout. The radio stack
    /// is assumed unrecoverable afterwards.
    Timeout,
    /// Association was rejected or failed outright
    Failed,
}

/// Trait for the wireless network interface
pub trait NetworkInterface {
    /// Associate with the configured network.
    ///
    /// Blocks the calling context until attached or `timeout_ms` elapses.
    /// There is no mid-attempt cancellation; the call completes, times
    /// out, or the process restarts.
    fn attach(&mut self, credentials: &Credentials, timeout_ms: u32) -> Result<(), AttachError>;

    /// Current attachment health, suitable for periodic polling
    fn is_attached(&self) -> bool;

    /// Drop the current association and reset the interface
    fn detach(&mut self);
}
