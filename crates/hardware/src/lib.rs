//! MIPS R3000A interpreter library.
//!
//! This crate implements the instruction interpreter and memory-bus dispatch engine
//! of a 32-bit MIPS I processor:
//! 1. **ISA:** Total decoding of instruction words into their semantic fields.
//! 2. **Core:** Register file, COP0, the delayed-fetch pipeline, and opcode dispatch.
//! 3. **SoC:** Interconnect with alignment checks, segment masking, and device routing.
//! 4. **Simulation:** The run loop, pause control, and per-cycle observers.

/// Common types and constants (address ranges, faults, diagnostics).
pub mod common;
/// Emulator configuration (reset state, memory map).
pub mod config;
/// CPU core (registers, cycle sequencing, handlers, dispatch).
pub mod core;
/// Instruction set (opcodes, field extraction, decode).
pub mod isa;
/// Interpreter run loop and cycle observers.
pub mod sim;
/// System-on-chip (interconnect, device trait, devices).
pub mod soc;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Architectural faults and non-fatal diagnostics.
pub use crate::common::{Diagnostic, Fault};
/// CPU state aggregate.
pub use crate::core::Cpu;
/// Top-level interpreter; construct with `Interpreter::new`.
pub use crate::sim::Interpreter;
/// Boot ROM device.
pub use crate::soc::devices::Bios;
