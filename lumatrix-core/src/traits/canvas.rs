//! Display canvas abstraction
//!
//! Wraps the panel driver's double-buffered surface. The driver owns both
//! buffers and its own refresh timing; the core only writes the back
//! buffer and requests atomic swaps, so a partially written frame is never
//! visible.

use lumatrix_protocol::Rgb24;

/// Trait for the double-buffered panel surface
pub trait Canvas {
    /// The back buffer, one RGB triple per panel pixel in row-major order.
    ///
    /// The slice length is the panel pixel count and fixes the expected
    /// wire frame size.
    fn back_buffer(&mut self) -> &mut [Rgb24];

    /// Atomically present the back buffer.
    ///
    /// Must only be called once the back buffer holds a fully written
    /// frame. Blocks until the swap is effective; after it returns the
    /// previous front buffer contents are available for writing again.
    fn swap(&mut self);
}
