//! Core processor implementation.
//!
//! This module contains the CPU state aggregate, the architectural register
//! storage, and the opcode dispatch tables.

/// Architectural register storage (GPRs, COP0).
pub mod arch;

/// CPU state, cycle sequencing, and opcode handlers.
pub mod cpu;

/// Primary and SPECIAL opcode dispatch tables.
pub mod dispatch;

pub use self::cpu::{Cpu, CycleEvent};
pub use self::dispatch::{DispatchTable, Op};
