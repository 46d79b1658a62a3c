//! Address windows and segment translation.
//!
//! This module defines the types the interconnect uses to route an access to a device:
//! 1. **Address Ranges:** A base + length window answering "is this mine, and at what offset?".
//! 2. **Segment Masking:** Stripping the KUSEG/KSEG0/KSEG1 segment bits from a CPU address.

/// Per-segment masks indexed by the top three address bits.
///
/// KUSEG (2 GiB) passes through, KSEG0 drops bit 31, KSEG1 drops bits 31..29,
/// and KSEG2 is left untouched.
const REGION_MASK: [u32; 8] = [
    // KUSEG
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    // KSEG0
    0x7FFF_FFFF,
    // KSEG1
    0x1FFF_FFFF,
    // KSEG2
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// Maps a CPU (virtual) address onto the physical bus address it aliases.
#[inline(always)]
pub fn mask_region(addr: u32) -> u32 {
    addr & REGION_MASK[(addr >> 29) as usize]
}

/// A contiguous physical address window owned by one device.
///
/// `contains` never overflows, so a range may end exactly at the top of the
/// 32-bit address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressRange {
    base: u32,
    length: u32,
}

impl AddressRange {
    /// Creates a window covering `base..base + length`.
    pub const fn new(base: u32, length: u32) -> Self {
        Self { base, length }
    }

    /// Returns the first address of the window.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Returns the window size in bytes.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Returns the device-relative offset of `addr` if the window contains it.
    ///
    /// # Returns
    ///
    /// `Some(addr - base)` when `base <= addr < base + length`, otherwise `None`.
    pub fn contains(&self, addr: u32) -> Option<u32> {
        addr.checked_sub(self.base)
            .filter(|offset| *offset < self.length)
    }
}
