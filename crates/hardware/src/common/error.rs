//! Fault and diagnostic definitions.
//!
//! This module separates the two ways the machine can report unhandled state:
//! 1. **Faults:** Fatal architectural conditions that abort the current cycle and
//!    propagate to whoever drives the interpreter.
//! 2. **Diagnostics:** Non-fatal reports (a store to a known but unmodeled device)
//!    that are logged and handed back without changing control flow.

use std::fmt;

use thiserror::Error;

use crate::soc::traits::WriteUnsupported;

/// Fatal architectural faults.
///
/// Every variant carries enough context (address, opcode, device) to diagnose a
/// BIOS bring-up failure without re-running the machine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A 32-bit access whose address is not a multiple of 4.
    #[error("unaligned 32-bit access at {address:#010x}")]
    UnalignedAccess {
        /// The offending CPU address.
        address: u32,
    },

    /// A read outside every routable device.
    #[error("{address:#010x} is out of {device} range")]
    UnmappedRead {
        /// The CPU address that was requested.
        address: u32,
        /// Name of the device that was consulted.
        device: &'static str,
    },

    /// A write to an address no device or special register claims.
    #[error("unhandled store of {value:#010x} to {address:#010x}")]
    UnmappedWrite {
        /// The CPU address that was written.
        address: u32,
        /// The value being stored.
        value: u32,
    },

    /// An opcode (or SPECIAL sub-opcode) with no registered handler.
    #[error("unhandled instruction {word:#010x} at {address:#010x} ({})", opcode_label(*.opcode, *.funct))]
    UnhandledInstruction {
        /// Fetch address of the instruction.
        address: u32,
        /// The raw instruction word.
        word: u32,
        /// Primary opcode (bits 31..26).
        opcode: u32,
        /// Sub-opcode, present only when the primary opcode selects the SPECIAL group.
        funct: Option<u32>,
    },

    /// A conditional branch whose condition held; the taken path is not modeled.
    #[error("taken branch at {address:#010x} (offset {offset:+}) is not implemented")]
    UnimplementedBranch {
        /// Fetch address of the branch.
        address: u32,
        /// Sign-extended word offset encoded in the branch.
        offset: i32,
    },

    /// A device rejected a write routed to it.
    ///
    /// The built-in memory map never produces this: `MemControl` accepts
    /// every offset inside its window and BIOS stores are unmapped. It is
    /// the path for `Device` implementations that refuse some writes.
    #[error(transparent)]
    ReadOnlyDevice(#[from] WriteUnsupported),
}

fn opcode_label(opcode: u32, funct: Option<u32>) -> String {
    match funct {
        Some(funct) => format!("opcode {opcode:#04x}, funct {funct:#04x}"),
        None => format!("opcode {opcode:#04x}"),
    }
}

/// How loudly a diagnostic should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Expected during bring-up; the store is known to be harmless.
    Warning,
    /// The store reached a register bank whose behavior matters but is not modeled.
    Error,
}

/// Non-fatal reports produced while executing an instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A store was accepted by a device whose semantics are not modeled yet.
    UnimplementedStore {
        /// The CPU address that was written.
        address: u32,
        /// The value being stored.
        value: u32,
        /// Which device or register accepted the store.
        target: &'static str,
        /// Reporting level.
        severity: Severity,
    },
}

impl Diagnostic {
    /// Returns the reporting level of this diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnimplementedStore { severity, .. } => *severity,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnimplementedStore {
                address,
                value,
                target,
                ..
            } => write!(
                f,
                "unimplemented {target} store of {value:#010x} to {address:#010x}"
            ),
        }
    }
}
