//! Opcode dispatch tables.
//!
//! Two immutable tables are built once when the interpreter is constructed:
//! the primary table, indexed by the 6-bit opcode, and the SPECIAL table,
//! indexed by the 6-bit `funct` field. A missing entry is the only way to get
//! an `UnhandledInstruction` fault; every hit resolves to a closed set of
//! handlers (`Op`).

use crate::common::error::Fault;
use crate::isa::funct::{FUNCT_OR, FUNCT_SLL};
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::{
    COP0_MT, OP_ADDIU, OP_BNE, OP_COP0, OP_J, OP_LUI, OP_ORI, OP_SPECIAL, OP_SW,
};

/// Number of entries in each table (6-bit index).
const TABLE_SIZE: usize = 64;

/// Every handler the interpreter implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Load Upper Immediate.
    Lui,
    /// OR Immediate.
    Ori,
    /// Add Immediate Unsigned.
    Addiu,
    /// Store Word.
    Sw,
    /// Jump.
    J,
    /// Branch on Not Equal.
    Bne,
    /// Move To Coprocessor 0.
    Mtc0,
    /// Shift Left Logical (SPECIAL).
    Sll,
    /// Bitwise OR (SPECIAL).
    Or,
}

impl Op {
    /// Assembler mnemonic, for trace output.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Lui => "LUI",
            Op::Ori => "ORI",
            Op::Addiu => "ADDIU",
            Op::Sw => "SW",
            Op::J => "J",
            Op::Bne => "BNE",
            Op::Mtc0 => "MTC0",
            Op::Sll => "SLL",
            Op::Or => "OR",
        }
    }
}

/// A primary-table entry: a handler, a redirect into the SPECIAL table, or
/// the COP0 group, where only the MTC0 form of `rs` is implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Direct(Op),
    Special,
    Cop0,
}

/// Primary and SPECIAL opcode tables.
#[derive(Clone, Debug)]
pub struct DispatchTable {
    primary: [Option<Route>; TABLE_SIZE],
    special: [Option<Op>; TABLE_SIZE],
}

impl DispatchTable {
    /// Builds both tables with every implemented opcode registered.
    pub fn new() -> Self {
        let mut primary = [None; TABLE_SIZE];
        primary[OP_SPECIAL as usize] = Some(Route::Special);
        primary[OP_J as usize] = Some(Route::Direct(Op::J));
        primary[OP_BNE as usize] = Some(Route::Direct(Op::Bne));
        primary[OP_ADDIU as usize] = Some(Route::Direct(Op::Addiu));
        primary[OP_ORI as usize] = Some(Route::Direct(Op::Ori));
        primary[OP_LUI as usize] = Some(Route::Direct(Op::Lui));
        primary[OP_COP0 as usize] = Some(Route::Cop0);
        primary[OP_SW as usize] = Some(Route::Direct(Op::Sw));

        let mut special = [None; TABLE_SIZE];
        special[FUNCT_SLL as usize] = Some(Op::Sll);
        special[FUNCT_OR as usize] = Some(Op::Or);

        Self { primary, special }
    }

    /// Resolves an instruction to its handler.
    ///
    /// # Errors
    ///
    /// `UnhandledInstruction` when the opcode, or the `funct` of a SPECIAL
    /// instruction, has no entry. `funct` is set only in the latter case.
    /// COP0 instructions other than MTC0 (MFC0, RFE, ...) fault the same way.
    pub fn resolve(&self, instr: &Instruction) -> Result<Op, Fault> {
        match self.primary[instr.opcode as usize] {
            Some(Route::Direct(op)) => Ok(op),
            Some(Route::Special) => {
                self.special[instr.funct as usize].ok_or(Fault::UnhandledInstruction {
                    address: instr.address,
                    word: instr.raw,
                    opcode: instr.opcode,
                    funct: Some(instr.funct),
                })
            }
            Some(Route::Cop0) if instr.rs == COP0_MT => Ok(Op::Mtc0),
            Some(Route::Cop0) | None => Err(Fault::UnhandledInstruction {
                address: instr.address,
                word: instr.raw,
                opcode: instr.opcode,
                funct: None,
            }),
        }
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}
