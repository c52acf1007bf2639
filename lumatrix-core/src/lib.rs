//! Board-agnostic core logic for the Lumatrix display node
//!
//! This crate contains all application logic that does not depend on a
//! specific platform:
//!
//! - Hardware abstraction traits (network interface, transport, canvas)
//! - Connectivity state machine and supervisor
//! - Transport protocol handler (frame display, reconnect policy)
//! - The cooperative node loop tying everything together
//! - Compiled-in configuration type definitions
//!
//! Platform code implements the traits, builds a [`node::MatrixNode`], and
//! calls [`node::MatrixNode::poll`] from its main loop. The only error that
//! ever escapes the loop is [`link::FatalError::NetworkAttachTimeout`];
//! the expected response is a full process restart.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod handler;
pub mod link;
pub mod node;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use link::FatalError;
pub use node::MatrixNode;
