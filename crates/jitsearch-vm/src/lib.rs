#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime side of jitsearch.
//!
//! Linked code is copied into a page-rounded anonymous mapping, flipped from
//! read-write to read-execute, and exposed through a typed
//! `extern "sysv64"` entry point.

#[cfg(not(target_arch = "x86_64"))]
compile_error!("jitsearch-vm runs x86-64 machine code and only builds for x86_64 targets");

mod lookup;
mod memory;

#[cfg(test)]
mod memory_tests;

pub use lookup::{CompiledLookup, IntervalSearch, KeyTable};
pub use memory::{ExecutableMemory, MemoryError, page_size};
