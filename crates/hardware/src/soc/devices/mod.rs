//! Memory-mapped devices.
//!
//! This module contains the devices the interconnect routes to: the boot ROM
//! and the memory-control register bank.

/// BIOS boot ROM.
pub mod bios;

/// Memory-control register bank.
pub mod mem_control;

pub use bios::{Bios, BiosError};
pub use mem_control::MemControl;

pub use crate::soc::traits::Device;
