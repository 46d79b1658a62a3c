//! Instruction encoding and field extraction.
//!
//! Provides bit extraction functions and the decoded `Instruction` view for
//! 32-bit MIPS I encodings. All three formats share the same fixed field
//! positions, so extraction never depends on the opcode.
//!
//! ```text
//! R-type: | opcode:6 | rs:5 | rt:5 | rd:5 | shamt:5 | funct:6 |
//! I-type: | opcode:6 | rs:5 | rt:5 |         imm:16          |
//! J-type: | opcode:6 |              target:26                |
//! ```

/// Bit shift for the primary opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the primary opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for the SPECIAL sub-opcode field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for any 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit shift for the source register field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the target register field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the destination register field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the shift-amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for the 16-bit immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the SPECIAL sub-opcode (bits 0-5).
    ///
    /// Meaningful only when the primary opcode selects the SPECIAL group.
    fn funct(&self) -> u32;

    /// Extracts the source register index (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the target register index (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the destination register index (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the 16-bit immediate, zero-extended to 32 bits.
    fn imm(&self) -> u32;

    /// Extracts the 16-bit immediate, sign-extended to 32 bits.
    fn imm_se(&self) -> u32;

    /// Extracts the 26-bit jump target (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    /// Reinterprets the low half-word as `i16` and widens it, replicating bit 15.
    #[inline(always)]
    fn imm_se(&self) -> u32 {
        (*self as u16 as i16) as i32 as u32
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A decoded instruction together with the address it was fetched from.
///
/// Lives for one cycle: it is produced when a word is latched and consumed
/// when that latch executes on the following cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Fetch address of the word.
    pub address: u32,
    /// Raw 32-bit encoding.
    pub raw: u32,
    /// Primary opcode.
    pub opcode: u32,
    /// SPECIAL sub-opcode.
    pub funct: u32,
    /// Source register index.
    pub rs: usize,
    /// Target register index.
    pub rt: usize,
    /// Destination register index.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// Zero-extended immediate.
    pub imm: u32,
    /// Sign-extended immediate.
    pub imm_se: u32,
    /// 26-bit jump target.
    pub target: u32,
}
