//! Common types and constants shared across the emulator.
//!
//! This module provides the building blocks used by the CPU, the bus, and the
//! devices:
//! 1. **Address Types:** Address windows and segment masking.
//! 2. **Constants:** The fixed memory map and reset values.
//! 3. **Error Handling:** Fatal faults and non-fatal diagnostics.

/// Address windows and segment translation.
pub mod addr;

/// Machine-wide constants.
pub mod constants;

/// Fault and diagnostic types.
pub mod error;

pub use addr::{AddressRange, mask_region};
pub use error::{Diagnostic, Fault, Severity};
