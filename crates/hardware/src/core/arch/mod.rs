//! MIPS architectural state.
//!
//! This module contains the programmer-visible register storage:
//! 1. **GPRs:** The 32-entry general-purpose register file.
//! 2. **COP0:** The system control coprocessor register bank.

/// System control coprocessor registers.
pub mod cop0;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use cop0::Cop0;
pub use gpr::Gpr;
