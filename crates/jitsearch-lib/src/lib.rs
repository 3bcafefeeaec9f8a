//! jitsearch: interval searches and key tables compiled to native code.
//!
//! # Example
//!
//! ```
//! let search = jitsearch::compile_interval_search(&[-3.0, 0.0, 1.0, 3.0]).unwrap();
//! assert_eq!(search.invoke(0.5), 1);
//! assert_eq!(search.invoke(3.0), -1);
//!
//! let table = jitsearch::compile_key_table([(1, 10), (-3, 30)]).unwrap();
//! assert_eq!(table.invoke(-3), 30);
//! assert_eq!(table.invoke(2), 0);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod compile;
mod error;
pub mod oracle;


pub use compile::{Compiler, compile_interval_search, compile_key_table};
pub use error::{Error, Result};

pub use jitsearch_asm::{Linked, dump};
pub use jitsearch_compiler::{CompileLimits, INTERVAL_MISS};
pub use jitsearch_core::Colors;
pub use jitsearch_vm::{CompiledLookup, IntervalSearch, KeyTable, MemoryError};

/// Returned by a key table for keys it does not hold.
pub const TABLE_MISS: usize = jitsearch_compiler::TABLE_MISS as usize;
