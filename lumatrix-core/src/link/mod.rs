//! Connectivity state machine and supervisor
//!
//! The link layer is the authority on network-attach and transport-session
//! lifecycle. The state machine is explicit, finite, and deterministic;
//! every failure except an attach timeout is recoverable by re-entering
//! `AttachingNetwork`.

pub mod events;
pub mod machine;
pub mod supervisor;

pub use events::LinkEvent;
pub use machine::LinkState;
pub use supervisor::{FatalError, Supervisor};
