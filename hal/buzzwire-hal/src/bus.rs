//! Course bus abstractions
//!
//! Provides the slave-side trait for the shared command bus linking
//! course nodes to the master controller.

/// Errors that can occur on the slave bus transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The peripheral could not be brought up in slave mode
    Unavailable,
    /// The receive queue overflowed and command bytes were dropped
    Overrun,
}

/// Slave side of the course bus
///
/// Implementations wrap the platform's bus peripheral (I2C slave or
/// similar). Received command bytes are queued FIFO per physical link
/// and handed out one at a time via [`try_recv`](SlaveBus::try_recv).
pub trait SlaveBus {
    /// Join the bus as a slave under the given 7-bit address
    fn listen(&mut self, address: u8) -> Result<(), BusError>;

    /// Pop the next queued command byte, if any
    ///
    /// Must never block; returns `None` when the queue is empty.
    fn try_recv(&mut self) -> Option<u8>;
}
