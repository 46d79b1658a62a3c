//! Fetch/execute sequencing.
//!
//! Each cycle executes the instruction latched on the previous cycle while the
//! word at the current PC is fetched into the latch. That one-cycle skew is the
//! branch delay slot: when a jump executes, the instruction after it is already
//! latched and runs before the new PC is fetched from.

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::error::{Diagnostic, Fault};
use crate::core::dispatch::{DispatchTable, Op};
use crate::isa::{Instruction, decode_at};

/// Report of one executed instruction, handed to cycle observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleEvent {
    /// Fetch address of the executed instruction.
    pub address: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Handler that ran.
    pub op: Op,
    /// `true` for an `SLL` whose result is zero; affects reporting only.
    pub nop: bool,
    /// Non-fatal report produced by the instruction, if any.
    pub diagnostic: Option<Diagnostic>,
}

impl CycleEvent {
    /// Assembler mnemonic of the executed instruction.
    pub fn mnemonic(&self) -> &'static str {
        self.op.mnemonic()
    }
}

impl Cpu {
    /// Runs one fetch/execute cycle.
    ///
    /// 1. `$0` is forced to zero.
    /// 2. The latched instruction is taken for execution.
    /// 3. The word at `pc` is fetched, decoded, and latched for the next cycle.
    /// 4. `pc` advances by one word.
    /// 5. The taken instruction is dispatched.
    ///
    /// # Errors
    ///
    /// Any fault from the fetch or from the instruction. Either way the PC
    /// and latch are left as they were before the cycle, so the next cycle
    /// retries the same instruction.
    pub fn emulate_cycle(&mut self, table: &DispatchTable) -> Result<CycleEvent, Fault> {
        self.regs.clear_zero();

        let pc = self.pc;
        let instr = self.next_instruction;

        let word = self.bus.read32(pc)?;
        self.next_instruction = decode_at(pc, word);
        self.pc = pc.wrapping_add(WORD_SIZE);

        let result = self.execute(table, instr);
        if result.is_err() {
            self.pc = pc;
            self.next_instruction = instr;
        }
        result
    }

    /// Dispatches a single instruction.
    ///
    /// # Errors
    ///
    /// `UnhandledInstruction` if no handler is registered, or any fault the
    /// handler raises. Nothing is executed when dispatch fails.
    pub fn execute(&mut self, table: &DispatchTable, instr: Instruction) -> Result<CycleEvent, Fault> {
        let op = table.resolve(&instr)?;
        let nop = self.is_nop(op, &instr);
        let diagnostic = self.apply(op, &instr)?;

        Ok(CycleEvent {
            address: instr.address,
            word: instr.raw,
            op,
            nop,
            diagnostic,
        })
    }

    /// Classifies an `SLL` that leaves its destination zero as a NOP.
    ///
    /// Evaluated before the handler runs, since `rd` may alias `rt`.
    fn is_nop(&self, op: Op, instr: &Instruction) -> bool {
        op == Op::Sll && self.regs.read(instr.rt) << instr.shamt == 0
    }

    fn apply(&mut self, op: Op, instr: &Instruction) -> Result<Option<Diagnostic>, Fault> {
        match op {
            Op::Lui => self.op_lui(instr),
            Op::Ori => self.op_ori(instr),
            Op::Addiu => self.op_addiu(instr),
            Op::J => self.op_j(instr),
            Op::Mtc0 => self.op_mtc0(instr),
            Op::Sll => self.op_sll(instr),
            Op::Or => self.op_or(instr),
            Op::Bne => self.op_bne(instr)?,
            Op::Sw => return self.op_sw(instr),
        }
        Ok(None)
    }
}
