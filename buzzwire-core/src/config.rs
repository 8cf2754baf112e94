//! Node configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a single course node
///
/// The address is stored raw, as read from board wiring or a config
/// blob; it is validated when the node joins the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeConfig {
    /// Slave address on the course bus
    pub address: u8,
    /// Goal sensor is wired active-low
    pub goal_active_low: bool,
    /// Hit sensor is wired active-low
    pub hit_active_low: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            address: 0x10,
            goal_active_low: false,
            hit_active_low: false,
        }
    }
}

impl NodeConfig {
    /// Configuration for a node at the given address, active-high sensors
    pub fn at_address(address: u8) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }
}
