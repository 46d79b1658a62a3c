//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait implemented by every bus-attached component. It provides:
//! 1. **Identification:** `name` and `range` for bus routing and diagnostics.
//! 2. **Access:** Word read/write at device-relative offsets.
//!
//! The interconnect only depends on this capability; what a device does with a
//! word is its own business.

use thiserror::Error;

use crate::common::addr::AddressRange;

/// Returned by devices that do not accept writes (e.g., ROM).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{device} does not accept writes (offset {offset:#x})")]
pub struct WriteUnsupported {
    /// Name of the device that refused the write.
    pub device: &'static str,
    /// Device-relative offset of the rejected write.
    pub offset: u32,
}

/// Trait for memory-mapped devices attached to the interconnect.
pub trait Device: Send {
    /// Returns a short name for this device (e.g., `"BIOS"`).
    fn name(&self) -> &'static str;

    /// Returns the physical window this device answers to.
    fn range(&self) -> AddressRange;

    /// Reads a little-endian word at the given device-relative offset.
    fn read_u32(&self, offset: u32) -> u32;

    /// Writes a word at the given device-relative offset.
    ///
    /// Read-only devices keep the default, which refuses every write.
    fn write_u32(&mut self, offset: u32, _val: u32) -> Result<(), WriteUnsupported> {
        Err(WriteUnsupported {
            device: self.name(),
            offset,
        })
    }
}
