//! Buzzwire Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. This enables the same node logic to run on
//! different hardware platforms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Node logic (buzzwire-core)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  buzzwire-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Board crate (chip GPIO + bus slave     │
//! │  peripheral behind these traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`bus::SlaveBus`] - Slave side of the course bus

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use bus::{BusError, SlaveBus};
pub use gpio::{FlexPin, InputPin, NoPin};
