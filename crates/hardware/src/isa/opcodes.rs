//! MIPS I primary opcodes.
//!
//! Defines the primary opcode values (bits 31-26) the interpreter dispatches on.

/// SPECIAL group: the operation is selected by the `funct` field.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add Immediate Unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// OR Immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Coprocessor 0 operations; the `rs` field selects the operation.
pub const OP_COP0: u32 = 0x10;

/// `rs` value of a COP0 instruction selecting Move To Coprocessor (MTC0).
pub const COP0_MT: usize = 0x04;

/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;
