//! Board-agnostic slave-node logic for a Buzzwire course
//!
//! This crate contains the logic of one course node that does not
//! depend on specific hardware implementations:
//!
//! - Event detection strategies (sense pin or external predicate)
//! - Notify-line management (direction and level transitions)
//! - Slave side of the bus session (state machine + receive drain)
//! - Periodic detection polling
//! - Node configuration and error types

#![no_std]
#![deny(unsafe_code)]

// This mod must go first so the others see its macros.
mod fmt;

pub mod config;
pub mod detect;
pub mod error;
pub mod lines;
pub mod link;
pub mod slave;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::NodeConfig;
pub use detect::{Condition, EventSource, Predicate};
pub use error::Error;
pub use lines::NotifyLines;
pub use link::{LinkState, SharedLink, SlaveLink, RX_BUDGET};
pub use slave::SlaveCommunicator;
