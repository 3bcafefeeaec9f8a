//! Typed callables over executable memory.

use std::fmt;

use crate::memory::ExecutableMemory;

/// Compiled interval search: `f32` query, interval index or -1.
pub type IntervalSearch = CompiledLookup<f32, i32>;

/// Compiled key table: `i32` key, payload or 0.
pub type KeyTable = CompiledLookup<i32, usize>;

/// A routine in executable memory, callable as `fn(Q) -> R`.
///
/// Owns its mapping. The code is released on drop or by `dispose`; both
/// consume the value, so a released routine cannot be called.
pub struct CompiledLookup<Q, R> {
    entry: unsafe extern "sysv64" fn(Q) -> R,
    memory: ExecutableMemory,
}

impl<Q, R> CompiledLookup<Q, R> {
    /// Wrap mapped code whose first byte is the entry point.
    ///
    /// # Safety
    ///
    /// `memory` must begin with a complete routine that follows the System V
    /// AMD64 calling convention for `fn(Q) -> R`, and only reads memory
    /// inside the mapping.
    pub unsafe fn from_memory(memory: ExecutableMemory) -> Self {
        let ptr = memory.as_ptr();
        // SAFETY: function pointers and data pointers have the same size and
        // representation on x86-64; the caller vouches for the code.
        let entry = unsafe {
            std::mem::transmute_copy::<*const u8, unsafe extern "sysv64" fn(Q) -> R>(&ptr)
        };
        Self { entry, memory }
    }

    /// Run the compiled routine.
    pub fn invoke(&self, query: Q) -> R {
        // SAFETY: `from_memory` established that the entry point is a valid
        // routine for this signature, and the mapping lives as long as `self`.
        unsafe { (self.entry)(query) }
    }

    /// Release the generated code.
    ///
    /// Takes the lookup by value, so a disposed routine cannot be invoked:
    ///
    /// ```compile_fail,E0382
    /// use jitsearch_vm::{CompiledLookup, ExecutableMemory};
    ///
    /// // mov eax, 7; ret
    /// let memory = ExecutableMemory::new(&[0xB8, 0x07, 0x00, 0x00, 0x00, 0xC3]).unwrap();
    /// let lookup: CompiledLookup<i32, i32> = unsafe { CompiledLookup::from_memory(memory) };
    /// lookup.dispose();
    /// lookup.invoke(1);
    /// ```
    pub fn dispose(self) {
        tracing::trace!(code = self.memory.len(), "lookup disposed");
    }

    /// Bytes of generated code, constant pool included.
    pub fn code_len(&self) -> usize {
        self.memory.len()
    }

    /// Bytes mapped for the code, rounded to whole pages.
    pub fn mapped_len(&self) -> usize {
        self.memory.mapped_len()
    }

    /// The generated code as mapped.
    pub fn code(&self) -> &[u8] {
        self.memory.as_bytes()
    }
}

impl<Q, R> fmt::Debug for CompiledLookup<Q, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledLookup")
            .field("entry", &self.memory.as_ptr())
            .field("code_len", &self.code_len())
            .field("mapped_len", &self.mapped_len())
            .finish()
    }
}
