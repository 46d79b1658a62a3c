//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the opcode values, field extraction, and decoding logic for the
//! MIPS I instruction encodings handled by the interpreter.

/// Instruction decoding from raw words.
pub mod decode;

/// SPECIAL group sub-opcodes.
pub mod funct;

/// Instruction field extraction and the decoded `Instruction` view.
pub mod instruction;

/// Primary opcodes.
pub mod opcodes;

pub use decode::{decode, decode_at};
pub use instruction::{Instruction, InstructionBits};
