//! Course Bus Command Protocol
//!
//! This crate defines the wire vocabulary between the master controller
//! and the slave nodes of a course: single-byte commands with no
//! payload, and the node address space.
//!
//! # Protocol Overview
//!
//! ```text
//! master ──[command byte]──▶ slave   (this crate: decode + dispatch)
//! slave  ──[notify lines]──▶ master  (plain digital levels, no framing)
//! ```
//!
//! Commands are deliberately payload-free so a receive interrupt can
//! dispatch them without buffering. Anything a node has to say back
//! travels on its notify lines, not on the bus.

#![no_std]
#![deny(unsafe_code)]

pub mod address;
pub mod commands;

pub use address::{AddressError, SlaveAddress, MAX_ADDRESS};
pub use commands::Command;
