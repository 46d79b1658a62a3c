//! CPU core definition and reset.
//!
//! This module defines the `Cpu` structure, the explicit aggregate of all
//! processor state:
//! 1. **Registers:** General-purpose registers and the COP0 bank.
//! 2. **Fetch State:** The program counter and the one-deep pending-instruction latch
//!    that implements the branch delay slot.
//! 3. **System Integration:** The exclusively owned interconnect.
//!
//! Nothing is global, so independent `Cpu` instances never interfere.

/// Per-cycle fetch/execute sequencing.
pub mod execution;

/// Opcode handler implementations.
pub mod handlers;

use tracing::info;

use crate::common::constants::{GPR_COUNT, NOP_INSTRUCTION};
use crate::config::Config;
use crate::core::arch::{Cop0, Gpr};
use crate::isa::{Instruction, decode_at};
use crate::soc::Interconnect;
use crate::soc::devices::Bios;

pub use execution::CycleEvent;

/// Processor state plus the bus it owns.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Address of the next word to fetch.
    pub pc: u32,
    /// Instruction fetched last cycle, due to execute this cycle.
    pub next_instruction: Instruction,
    /// System control coprocessor registers.
    pub cop0: Cop0,
    /// Memory bus and mapped devices.
    pub bus: Interconnect,
    reset_pc: u32,
    register_fill: u32,
}

impl Cpu {
    /// Creates a CPU wired to a bus holding `bios`, already in its reset state.
    pub fn new(config: &Config, bios: Bios) -> Self {
        let mut cpu = Self {
            regs: Gpr::new(),
            pc: config.general.reset_pc,
            next_instruction: decode_at(config.general.reset_pc, NOP_INSTRUCTION),
            cop0: Cop0::new(),
            bus: Interconnect::new(&config.memory_map, bios),
            reset_pc: config.general.reset_pc,
            register_fill: config.general.register_fill,
        };
        cpu.reset();
        cpu
    }

    /// Returns the processor to its power-on state.
    ///
    /// Registers are refilled, the PC points at the reset vector, and the
    /// latch holds a NOP. The bus and its devices are kept.
    pub fn reset(&mut self) {
        info!("Resetting CPU, PC={:#010x}", self.reset_pc);
        self.regs.fill(self.register_fill);
        self.pc = self.reset_pc;
        self.next_instruction = decode_at(self.reset_pc, NOP_INSTRUCTION);
        self.cop0 = Cop0::new();
    }

    /// Reads general-purpose register `idx`.
    pub fn register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Returns a copy of every general-purpose register.
    pub fn registers(&self) -> [u32; GPR_COUNT] {
        self.regs.snapshot()
    }
}
