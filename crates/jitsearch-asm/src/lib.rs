#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Machine-code assembly for jitsearch.
//!
//! This crate contains:
//! - Fixed-width x86-64 instruction templates (`Opcode`, `Cond`)
//! - A growing byte buffer with little-endian scalar helpers (`CodeBuffer`)
//! - Symbolic labels recorded during emission (`Label`, `LabelUsage`)
//! - The two-pass `Assembler` and the `link` pass that patches placeholders
//! - A human-readable listing of linked code (`dump`)

mod assembler;
mod buffer;
mod dump;
mod encoding;
mod label;
mod link;

#[cfg(test)]
mod dump_tests;

pub use assembler::{Assembler, Unlinked};
pub use buffer::CodeBuffer;
pub use dump::dump;
pub use encoding::{Cond, Opcode, Operand, PLACEHOLDER_SIZE};
pub use label::{Label, LabelUsage, UsageKind};
pub use link::{LinkError, Linked, link};
