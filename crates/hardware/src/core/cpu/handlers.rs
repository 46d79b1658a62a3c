//! Opcode handlers.
//!
//! Each handler reads its operands from the register file and applies its
//! effect directly. Writes to `$0` are not filtered here; the cycle-start
//! reset takes care of that.

use super::Cpu;
use crate::common::constants::JUMP_SEGMENT_MASK;
use crate::common::error::{Diagnostic, Fault};
use crate::isa::Instruction;

impl Cpu {
    /// LUI: `rt = imm << 16`.
    pub(super) fn op_lui(&mut self, i: &Instruction) {
        self.regs.write(i.rt, i.imm << 16);
    }

    /// ORI: `rt = rs | imm`.
    pub(super) fn op_ori(&mut self, i: &Instruction) {
        let v = self.regs.read(i.rs) | i.imm;
        self.regs.write(i.rt, v);
    }

    /// ADDIU: `rt = rs + imm_se`, wrapping, never traps.
    pub(super) fn op_addiu(&mut self, i: &Instruction) {
        let v = self.regs.read(i.rs).wrapping_add(i.imm_se);
        self.regs.write(i.rt, v);
    }

    /// SW: `mem[rs + imm_se] = rt`.
    pub(super) fn op_sw(&mut self, i: &Instruction) -> Result<Option<Diagnostic>, Fault> {
        let addr = self.regs.read(i.rs).wrapping_add(i.imm_se);
        let v = self.regs.read(i.rt);
        self.bus.write32(addr, v)
    }

    /// J: replaces the low 28 bits of `pc` (the delay slot's successor) with `target << 2`.
    pub(super) fn op_j(&mut self, i: &Instruction) {
        self.pc = (self.pc & JUMP_SEGMENT_MASK) | (i.target << 2);
    }

    /// MTC0: latches `rt` into COP0 register `rd`.
    pub(super) fn op_mtc0(&mut self, i: &Instruction) {
        let v = self.regs.read(i.rt);
        self.cop0.write(i.rd, v);
    }

    /// SLL (SPECIAL): `rd = rt << shamt`.
    pub(super) fn op_sll(&mut self, i: &Instruction) {
        let v = self.regs.read(i.rt) << i.shamt;
        self.regs.write(i.rd, v);
    }

    /// OR (SPECIAL): `rd = rs | rt`.
    pub(super) fn op_or(&mut self, i: &Instruction) {
        let v = self.regs.read(i.rs) | self.regs.read(i.rt);
        self.regs.write(i.rd, v);
    }

    /// BNE: falls through when `rs == rt`.
    ///
    /// The taken path is not modeled yet and surfaces as `UnimplementedBranch`
    /// instead of guessing at its semantics.
    pub(super) fn op_bne(&mut self, i: &Instruction) -> Result<(), Fault> {
        if self.regs.read(i.rs) != self.regs.read(i.rt) {
            return self.branch(i);
        }
        Ok(())
    }

    /// Shared taken-branch hook for the conditional branches.
    fn branch(&mut self, i: &Instruction) -> Result<(), Fault> {
        Err(Fault::UnimplementedBranch {
            address: i.address,
            offset: i.imm_se as i32,
        })
    }
}
