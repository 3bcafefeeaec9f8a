//! Symbolic labels and the placeholder fields that refer to them.

use crate::encoding::PLACEHOLDER_SIZE;

/// Symbolic reference to a byte offset that is unknown at emission time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Label(pub u32);

/// How a placeholder field encodes the distance to its label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UsageKind {
    /// Near conditional branch. The displacement is relative to the byte
    /// right after the placeholder.
    Jump,
    /// `comiss` rip-relative operand pointing at a constant-pool slot.
    ///
    /// Pool labels are defined at the end of their 4-byte slot, so the
    /// correction covers the slot width on top of the placeholder width.
    Dereference,
}

impl UsageKind {
    /// Bytes subtracted from `definition - usage` to get the displacement.
    ///
    /// Tied to the templates in `encoding`: change a template, change this.
    pub fn correction(self) -> i64 {
        match self {
            Self::Jump => PLACEHOLDER_SIZE as i64,
            Self::Dereference => 2 * PLACEHOLDER_SIZE as i64,
        }
    }
}

/// A 4-byte placeholder awaiting its label's final offset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LabelUsage {
    /// Offset of the first placeholder byte.
    pub offset: usize,
    pub label: Label,
    pub kind: UsageKind,
}
