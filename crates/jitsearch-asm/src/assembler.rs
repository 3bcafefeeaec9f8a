//! Two-pass assembler state.
//!
//! Emission appends templates to a `CodeBuffer` and records where labels are
//! defined and where they are used. Nothing is resolved until `link`, because
//! branch targets and the constant pool sit after the code that refers to
//! them.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::buffer::CodeBuffer;
use crate::encoding::{Cond, Opcode, PLACEHOLDER_SIZE};
use crate::label::{Label, LabelUsage};

/// Emission state threaded through a codegen walk.
#[derive(Debug, Default)]
pub struct Assembler {
    buf: CodeBuffer,
    definitions: BTreeMap<Label, usize>,
    usages: Vec<LabelUsage>,
    redefined: Vec<Label>,
    pool_start: Option<usize>,
}

/// Emitted bytes plus the label bookkeeping the link pass needs.
#[derive(Clone, Debug)]
pub struct Unlinked {
    pub code: Vec<u8>,
    pub definitions: BTreeMap<Label, usize>,
    pub usages: Vec<LabelUsage>,
    /// Labels defined more than once. `link` rejects a non-empty list.
    pub redefined: Vec<Label>,
    /// Offset where instructions end and the constant pool begins.
    pub code_len: usize,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current emission offset.
    pub fn offset(&self) -> usize {
        self.buf.len()
    }

    /// Bind `label` to the current offset.
    ///
    /// The first definition wins; later ones are recorded for `link` to report.
    pub fn define(&mut self, label: Label) {
        match self.definitions.entry(label) {
            Entry::Vacant(slot) => {
                slot.insert(self.buf.len());
            }
            Entry::Occupied(_) => self.redefined.push(label),
        }
    }

    /// `comiss xmm0, [slot]`, comparing the float query against a pool constant.
    pub fn comiss_xmm0(&mut self, slot: Label) {
        self.reference(Opcode::ComissXmm0Rip, slot);
    }

    /// Conditional near branch to `target`.
    pub fn jcc(&mut self, cond: Cond, target: Label) {
        self.reference(cond.opcode(), target);
    }

    /// `cmp edi, imm32`, comparing the integer query against a key.
    pub fn cmp_edi(&mut self, imm: i32) {
        self.buf.push_bytes(Opcode::CmpEdiImm32.prefix());
        self.buf.push_i32(imm);
    }

    pub fn mov_eax(&mut self, imm: i32) {
        self.buf.push_bytes(Opcode::MovEaxImm32.prefix());
        self.buf.push_i32(imm);
    }

    pub fn mov_rax(&mut self, imm: u64) {
        self.buf.push_bytes(Opcode::MovRaxImm64.prefix());
        self.buf.push_u64(imm);
    }

    pub fn ret(&mut self) {
        self.buf.push_bytes(Opcode::Ret.prefix());
    }

    /// Mark the end of instructions. Everything after is constant-pool data.
    pub fn begin_pool(&mut self) {
        self.pool_start = Some(self.buf.len());
    }

    /// Append a pool constant and define `slot` at the end of it.
    pub fn pool_f32(&mut self, slot: Label, value: f32) {
        debug_assert!(self.pool_start.is_some(), "pool data before begin_pool");
        self.buf.push_f32(value);
        self.define(slot);
    }

    pub fn finish(self) -> Unlinked {
        let code_len = self.pool_start.unwrap_or(self.buf.len());
        Unlinked {
            code: self.buf.into_bytes(),
            definitions: self.definitions,
            usages: self.usages,
            redefined: self.redefined,
            code_len,
        }
    }

    fn reference(&mut self, opcode: Opcode, label: Label) {
        let operand = opcode.operand();
        let Some(kind) = operand.usage_kind() else {
            unreachable!("{opcode:?} has no label operand");
        };
        debug_assert_eq!(operand.size(), PLACEHOLDER_SIZE);

        self.buf.push_bytes(opcode.prefix());
        let offset = self.buf.push_zeros(PLACEHOLDER_SIZE);
        self.usages.push(LabelUsage {
            offset,
            label,
            kind,
        });
    }
}
