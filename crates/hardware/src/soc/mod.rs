//! System-on-Chip (SoC) components.
//!
//! This module organizes the memory-mapped side of the machine: the device
//! capability trait, the concrete devices, and the interconnect that routes
//! CPU accesses to them.

/// Memory-mapped device implementations.
pub mod devices;

/// Bus interconnect and address routing.
pub mod interconnect;

/// Device trait definitions.
pub mod traits;

pub use interconnect::Interconnect;
