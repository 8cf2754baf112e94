//! Error types for node setup and polling

use buzzwire_hal::bus::BusError;
use buzzwire_protocol::AddressError;

/// Errors surfaced by node setup and the detection poll
///
/// Unknown command bytes are not represented here: they are logged and
/// ignored where they are drained, with no state change. Nothing in
/// this crate retries on its own; the driver loop decides whether to
/// call again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The configured slave address is not usable on the bus
    Address(AddressError),
    /// A condition is predicate-detected but no predicate was supplied
    UnboundPredicate,
    /// The bus transport could not be brought up
    Transport(BusError),
}

impl From<AddressError> for Error {
    fn from(error: AddressError) -> Self {
        Error::Address(error)
    }
}

impl From<BusError> for Error {
    fn from(error: BusError) -> Self {
        Error::Transport(error)
    }
}
