//! SPECIAL group sub-opcodes.
//!
//! Defines the `funct` values (bits 5-0) selecting an operation when the primary
//! opcode is `OP_SPECIAL`.

/// Shift Left Logical (SLL).
pub const FUNCT_SLL: u32 = 0x00;

/// Bitwise OR (OR).
pub const FUNCT_OR: u32 = 0x25;
