//! Key table: `i32` key in, payload out, 0 on a miss.

use jitsearch_asm::{Assembler, Cond, Unlinked};
use jitsearch_core::{Entry, Node, Shape};

use super::CodegenCtx;

/// Returned for keys with no entry.
pub const TABLE_MISS: u64 = 0;

/// Emit the lookup routine for a tree of table entries.
pub fn emit_table(root: &Node<Entry>) -> Unlinked {
    let mut codegen = TableCodegen {
        asm: Assembler::new(),
        ctx: CodegenCtx::new(0),
    };
    codegen.node(root);
    codegen.asm.finish()
}

struct TableCodegen {
    asm: Assembler,
    ctx: CodegenCtx,
}

impl TableCodegen {
    fn node(&mut self, node: &Node<Entry>) {
        let entry = *node.item();
        match node.shape() {
            Shape::Leaf => self.leaf(entry),
            Shape::LeftOnly(left) => self.branch(entry, Some(left), None),
            Shape::RightOnly(right) => self.branch(entry, None, Some(right)),
            Shape::Both(left, right) => self.branch(entry, Some(left), Some(right)),
        }
    }

    /// `cmp; jne miss; hit; miss:`
    fn leaf(&mut self, entry: Entry) {
        let miss = self.ctx.fresh_label();
        self.asm.cmp_edi(entry.key);
        self.asm.jcc(Cond::NotEqual, miss);
        self.hit(entry);
        self.asm.define(miss);
        self.miss();
    }

    /// `cmp; jge ge; <left>; ge: jne gt; hit; gt: <right>`
    fn branch(&mut self, entry: Entry, left: Option<&Node<Entry>>, right: Option<&Node<Entry>>) {
        let ge = self.ctx.fresh_label();
        self.asm.cmp_edi(entry.key);
        self.asm.jcc(Cond::GreaterOrEqual, ge);
        self.subtree(left);

        self.asm.define(ge);
        let gt = self.ctx.fresh_label();
        self.asm.jcc(Cond::NotEqual, gt);
        self.hit(entry);

        self.asm.define(gt);
        self.subtree(right);
    }

    fn subtree(&mut self, node: Option<&Node<Entry>>) {
        match node {
            Some(node) => self.node(node),
            None => self.miss(),
        }
    }

    fn hit(&mut self, entry: Entry) {
        self.asm.mov_rax(entry.value.get() as u64);
        self.asm.ret();
    }

    fn miss(&mut self) {
        self.asm.mov_rax(TABLE_MISS);
        self.asm.ret();
    }
}
