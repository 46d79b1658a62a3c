//! Memory-control register bank.
//!
//! The BIOS programs expansion base addresses and bus delays here early in
//! boot. The registers are latched so a debugger can inspect them, but none of
//! them change how the bus behaves.

use crate::common::addr::AddressRange;
use crate::soc::traits::{Device, WriteUnsupported};

/// Memory-control register bank (one word per register).
#[derive(Clone, Debug)]
pub struct MemControl {
    base: u32,
    regs: Vec<u32>,
}

impl MemControl {
    /// Creates a bank of `size` bytes at physical address `base`, all registers zeroed.
    pub fn new(base: u32, size: u32) -> Self {
        Self {
            base,
            regs: vec![0; (size / 4) as usize],
        }
    }

    /// Returns the last value written at `offset`, if the offset is inside the bank.
    pub fn register(&self, offset: u32) -> Option<u32> {
        self.regs.get((offset / 4) as usize).copied()
    }
}

impl Device for MemControl {
    fn name(&self) -> &'static str {
        "MemControl"
    }

    fn range(&self) -> AddressRange {
        AddressRange::new(self.base, (self.regs.len() * 4) as u32)
    }

    fn read_u32(&self, offset: u32) -> u32 {
        self.register(offset).unwrap_or(0)
    }

    fn write_u32(&mut self, offset: u32, val: u32) -> Result<(), WriteUnsupported> {
        match self.regs.get_mut((offset / 4) as usize) {
            Some(reg) => {
                *reg = val;
                Ok(())
            }
            None => Err(WriteUnsupported {
                device: self.name(),
                offset,
            }),
        }
    }
}
