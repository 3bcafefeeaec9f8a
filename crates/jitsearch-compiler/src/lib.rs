#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! jitsearch compiler: decision trees to linked x86-64 code.
//!
//! This crate provides:
//! - `codegen` - tree walks for the interval search and the key table
//! - `emitter` - input validation and the build, emit, link pipeline
//! - `limits` - configurable bounds on input and output size

pub mod codegen;
mod emitter;
mod error;
mod limits;

#[cfg(test)]
mod emitter_tests;

pub use codegen::{INTERVAL_MISS, TABLE_MISS};
pub use emitter::{emit_interval_search, emit_key_table};
pub use error::EmitError;
pub use limits::CompileLimits;
