//! Compile entry points.

use jitsearch_asm::Linked;
use jitsearch_compiler::{CompileLimits, emit_interval_search, emit_key_table};
use jitsearch_vm::{CompiledLookup, ExecutableMemory, IntervalSearch, KeyTable};

use crate::error::Result;

/// Compiles lookups under a set of limits.
///
/// ```
/// use jitsearch::{CompileLimits, Compiler};
///
/// let compiler = Compiler::with_limits(CompileLimits::new().max_keys(4));
/// assert!(compiler.interval_search(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler {
    limits: CompileLimits,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: CompileLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &CompileLimits {
        &self.limits
    }

    /// Emit and link an interval search without mapping it.
    pub fn emit_interval_search(&self, breakpoints: &[f32]) -> Result<Linked> {
        Ok(emit_interval_search(breakpoints, &self.limits)?)
    }

    /// Emit and link a key table without mapping it.
    pub fn emit_key_table(&self, entries: impl IntoIterator<Item = (i32, usize)>) -> Result<Linked> {
        let entries: Vec<_> = entries.into_iter().collect();
        Ok(emit_key_table(&entries, &self.limits)?)
    }

    /// Compile breakpoints into a callable that returns the interval index of
    /// a query, or -1 outside `[first, last)`.
    ///
    /// Breakpoints must be strictly increasing and free of NaN.
    pub fn interval_search(&self, breakpoints: &[f32]) -> Result<IntervalSearch> {
        let linked = self.emit_interval_search(breakpoints)?;
        // SAFETY: the interval emitter produces a sysv64 `fn(f32) -> i32`
        // whose only memory reads are its own pool slots.
        unsafe { load(&linked) }
    }

    /// Compile key/payload pairs into a callable that returns the payload of
    /// a key, or 0 for a missing key.
    ///
    /// Keys must be unique and payloads non-zero. Order does not matter.
    pub fn key_table(&self, entries: impl IntoIterator<Item = (i32, usize)>) -> Result<KeyTable> {
        let linked = self.emit_key_table(entries)?;
        // SAFETY: the table emitter produces a sysv64 `fn(i32) -> usize`
        // that reads no memory.
        unsafe { load(&linked) }
    }
}

/// Compile an interval search with default limits.
pub fn compile_interval_search(breakpoints: &[f32]) -> Result<IntervalSearch> {
    Compiler::new().interval_search(breakpoints)
}

/// Compile a key table with default limits.
pub fn compile_key_table(entries: impl IntoIterator<Item = (i32, usize)>) -> Result<KeyTable> {
    Compiler::new().key_table(entries)
}

/// # Safety
///
/// `linked` must hold a routine matching `fn(Q) -> R` under System V AMD64.
unsafe fn load<Q, R>(linked: &Linked) -> Result<CompiledLookup<Q, R>> {
    let memory = ExecutableMemory::new(linked.as_bytes())?;
    tracing::debug!(
        code = memory.len(),
        mapped = memory.mapped_len(),
        "lookup compiled"
    );
    // SAFETY: forwarded from the caller.
    Ok(unsafe { CompiledLookup::from_memory(memory) })
}
