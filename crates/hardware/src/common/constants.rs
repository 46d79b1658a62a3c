//! Global machine constants.
//!
//! This module defines the fixed values of the emulated MIPS R3000A machine:
//! 1. **Memory Map:** Boot vector and the physical windows of the built-in devices.
//! 2. **Instruction Constants:** Word size and the canonical NOP encoding.
//! 3. **Reset State:** The recognizable value loaded into registers at reset.

/// Reset vector: the BIOS as seen through the uncached KSEG1 segment.
pub const RESET_VECTOR: u32 = 0xBFC0_0000;

/// Physical base address of the BIOS ROM.
pub const BIOS_BASE: u32 = 0x1FC0_0000;

/// Size of a BIOS ROM image in bytes (512 KiB).
pub const BIOS_SIZE: u32 = 512 * 1024;

/// Physical base address of the memory-control register bank.
pub const MEM_CONTROL_BASE: u32 = 0x1F80_1000;

/// Size of the memory-control register bank in bytes.
pub const MEM_CONTROL_SIZE: u32 = 36;

/// Physical address of the `RAM_SIZE` configuration register.
pub const RAM_SIZE_REGISTER: u32 = 0x1F80_1060;

/// Size of one instruction (and of every bus access) in bytes.
pub const WORD_SIZE: u32 = 4;

/// `sll $zero, $zero, 0`: the all-zero word the pending latch holds after reset.
pub const NOP_INSTRUCTION: u32 = 0x0000_0000;

/// Value loaded into `$1..$31` at reset so reads of uninitialized registers stand out.
pub const REGISTER_FILL: u32 = 0xDEAD_BEEF;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Mask selecting the segment (top four bits) kept by a `J` instruction.
pub const JUMP_SEGMENT_MASK: u32 = 0xF000_0000;
