//! Interval search: `f32` query in, interval index out.
//!
//! Each tree node becomes `comiss xmm0, [slot]; jae ge`. The fall-through is
//! the `x < b` side, the label is the `x >= b` side. An unordered compare sets
//! CF, so NaN never takes a branch and ends in the leftmost gap.

use jitsearch_asm::{Assembler, Cond, Label, Unlinked};
use jitsearch_core::{Breakpoint, Node, Shape};

use super::{CodegenCtx, Turns};

/// Returned for queries outside `[first, last)`.
pub const INTERVAL_MISS: i32 = -1;

/// Emit the search routine for a tree of `count` breakpoints.
///
/// Pool slots take labels `0..count`, so jump labels start at `count`.
pub fn emit_interval(root: &Node<Breakpoint>, count: usize) -> Unlinked {
    let mut codegen = IntervalCodegen {
        asm: Assembler::new(),
        ctx: CodegenCtx::new(count as u32),
        pool: Vec::with_capacity(count),
    };
    codegen.node(root, Turns::ROOT);
    codegen.finish()
}

struct IntervalCodegen {
    asm: Assembler,
    ctx: CodegenCtx,
    /// Breakpoint values in first-use order; the position is the slot label.
    pool: Vec<f32>,
}

impl IntervalCodegen {
    fn node(&mut self, node: &Node<Breakpoint>, turns: Turns) {
        let Breakpoint { value, index } = *node.item();
        let slot = Label(self.pool.len() as u32);
        self.pool.push(value);
        let ge = self.ctx.fresh_label();

        self.asm.comiss_xmm0(slot);
        self.asm.jcc(Cond::AboveOrEqual, ge);

        match node.shape() {
            Shape::Leaf => {
                self.below_gap(turns, index);
                self.asm.define(ge);
                self.above_gap(turns, index);
            }
            Shape::LeftOnly(left) => {
                self.node(left, turns.go_left());
                self.asm.define(ge);
                self.above_gap(turns, index);
            }
            Shape::RightOnly(right) => {
                self.below_gap(turns, index);
                self.asm.define(ge);
                self.node(right, turns.go_right());
            }
            Shape::Both(left, right) => {
                self.node(left, turns.go_left());
                self.asm.define(ge);
                self.node(right, turns.go_right());
            }
        }
    }

    /// Missing child on the `<` side of breakpoint `index`, i.e. `[b[index - 1], b[index])`.
    /// Below everything on the far-left spine.
    fn below_gap(&mut self, turns: Turns, index: u32) {
        let id = if turns.right == 0 {
            INTERVAL_MISS
        } else {
            let id = self.ctx.next_return();
            debug_assert_eq!(id as u32 + 1, index);
            id
        };
        self.ret(id);
    }

    /// Missing child on the `>=` side of breakpoint `index`, i.e. `[b[index], b[index + 1])`.
    /// Past the last breakpoint on the far-right spine.
    fn above_gap(&mut self, turns: Turns, index: u32) {
        let id = if turns.left == 0 {
            INTERVAL_MISS
        } else {
            let id = self.ctx.next_return();
            debug_assert_eq!(id as u32, index);
            id
        };
        self.ret(id);
    }

    fn ret(&mut self, id: i32) {
        self.asm.mov_eax(id);
        self.asm.ret();
    }

    fn finish(mut self) -> Unlinked {
        self.asm.begin_pool();
        for (slot, &value) in self.pool.iter().enumerate() {
            self.asm.pool_f32(Label(slot as u32), value);
        }
        self.asm.finish()
    }
}
