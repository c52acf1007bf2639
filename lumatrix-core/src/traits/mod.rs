//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic and
//! platform-specific implementations: the radio/association stack, the
//! transport library, and the panel driver.

pub mod canvas;
pub mod network;
pub mod transport;

pub use canvas::Canvas;
pub use network::{AttachError, NetworkInterface};
pub use transport::{SessionError, Transport, TransportEvent};
