//! MIPS general-purpose register file.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains registers `$0`-`$31` as plain 32-bit words.
//! 2. **Invariant Enforcement:** `$0` is forced back to zero once per cycle by
//!    `clear_zero`, rather than by filtering writes. A handler may target `$0`
//!    freely; the value it leaves there is visible until the next cycle boundary.

use crate::common::constants::GPR_COUNT;

/// General-purpose register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; GPR_COUNT],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Loads `value` into `$1..$31` and zero into `$0`.
    pub fn fill(&mut self, value: u32) {
        self.regs = [value; GPR_COUNT];
        self.regs[0] = 0;
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The stored word. For `$0` this is zero whenever `clear_zero` has run
    /// since the last write to it.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a register, including `$0`.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Forces `$0` back to zero. Called at the start of every cycle.
    #[inline(always)]
    pub fn clear_zero(&mut self) {
        self.regs[0] = 0;
    }

    /// Returns a copy of all registers, for inspection by debuggers.
    pub fn snapshot(&self) -> [u32; GPR_COUNT] {
        self.regs
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
