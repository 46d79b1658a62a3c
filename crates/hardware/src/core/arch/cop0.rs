//! System control coprocessor (COP0).
//!
//! Only the register bank is modeled: `MTC0` latches values here, and the
//! status register is readable by the host. No execution path consults these
//! registers yet.

/// Index of the status register (SR) in the COP0 bank.
pub const SR: usize = 12;

/// Number of COP0 registers addressable by `MTC0`.
pub const COP0_REG_COUNT: usize = 32;

/// COP0 register bank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cop0 {
    regs: [u32; COP0_REG_COUNT],
}

impl Cop0 {
    /// Creates a bank with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches `val` into register `idx` (as written by `MTC0`).
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Reads register `idx`.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Returns the status register.
    pub fn status(&self) -> u32 {
        self.regs[SR]
    }
}
