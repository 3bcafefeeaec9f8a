#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for jitsearch.
//!
//! - `tree`: height-balanced decision trees built by median split
//! - `colors`: ANSI styles for the parts of a code listing

mod colors;
pub mod tree;

#[cfg(test)]
mod colors_tests;

pub use colors::Colors;
pub use tree::{Breakpoint, Entry, MAX_KEYS, Node, Shape, TreeError, breakpoints, build_tree};
