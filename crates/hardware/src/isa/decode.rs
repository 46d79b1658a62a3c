//! MIPS instruction decoder.
//!
//! This module turns a raw 32-bit word into the `Instruction` view used by every
//! opcode handler. Decoding is total: every word yields an `Instruction`, and
//! whether its opcode is implemented is decided later by dispatch.

use crate::isa::instruction::{Instruction, InstructionBits};

/// Decodes a word whose fetch address is unknown or irrelevant (recorded as 0).
pub fn decode(word: u32) -> Instruction {
    decode_at(0, word)
}

/// Decodes a word fetched from `address`.
///
/// # Arguments
///
/// * `address` - Address the word was fetched from, kept for diagnostics.
/// * `word` - The 32-bit instruction encoding.
pub fn decode_at(address: u32, word: u32) -> Instruction {
    Instruction {
        address,
        raw: word,
        opcode: word.opcode(),
        funct: word.funct(),
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        shamt: word.shamt(),
        imm: word.imm(),
        imm_se: word.imm_se(),
        target: word.target(),
    }
}
