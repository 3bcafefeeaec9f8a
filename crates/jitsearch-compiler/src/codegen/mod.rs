//! Tree walks that turn decision trees into assembler calls.
//!
//! Both walks dispatch on `Shape` and thread one `Assembler` plus a
//! `CodegenCtx` by `&mut`. The result is unlinked: jump targets and pool slots
//! are still symbolic.

mod interval;
mod table;


use jitsearch_asm::Label;

pub use interval::{INTERVAL_MISS, emit_interval};
pub use table::{TABLE_MISS, emit_table};

/// Counters shared across one codegen walk.
#[derive(Debug)]
pub(crate) struct CodegenCtx {
    next_label: u32,
    next_return: i32,
}

impl CodegenCtx {
    /// Start handing out jump labels at `first_label`.
    pub(crate) fn new(first_label: u32) -> Self {
        Self {
            next_label: first_label,
            next_return: 0,
        }
    }

    pub(crate) fn fresh_label(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;
        label
    }

    /// Next interval identifier. Called in in-order traversal order.
    pub(crate) fn next_return(&mut self) -> i32 {
        let id = self.next_return;
        self.next_return += 1;
        id
    }
}

/// Left and right turns taken on the way down from the root.
///
/// A node with no right turns lies on the far-left spine; one with no left
/// turns lies on the far-right spine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Turns {
    pub(crate) left: u32,
    pub(crate) right: u32,
}

impl Turns {
    pub(crate) const ROOT: Self = Self { left: 0, right: 0 };

    pub(crate) fn go_left(self) -> Self {
        Self {
            left: self.left + 1,
            ..self
        }
    }

    pub(crate) fn go_right(self) -> Self {
        Self {
            right: self.right + 1,
            ..self
        }
    }
}
