//! Page-aligned executable mappings.

use std::io;

use memmap2::{Mmap, MmapMut};

/// Page size assumed where the OS is not asked.
const FALLBACK_PAGE_SIZE: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("failed to map {len} bytes: {source}")]
    Map {
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to make {len} bytes executable: {source}")]
    Protect {
        len: usize,
        #[source]
        source: io::Error,
    },
}

/// System page size.
#[cfg(unix)]
pub fn page_size() -> usize {
    // SAFETY: sysconf reads a configuration value and has no preconditions.
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    usize::try_from(size)
        .ok()
        .filter(|&size| size > 0)
        .unwrap_or(FALLBACK_PAGE_SIZE)
}

/// System page size.
#[cfg(not(unix))]
pub fn page_size() -> usize {
    FALLBACK_PAGE_SIZE
}

/// Round `len` up to whole pages. Always at least one page.
pub(crate) fn round_to_page(len: usize, page: usize) -> usize {
    len.div_ceil(page).max(1) * page
}

/// Read-execute mapping holding a copy of linked code.
///
/// The mapping is never writable and executable at the same time: it is
/// filled while read-write, then reprotected. Dropping it unmaps it.
pub struct ExecutableMemory {
    map: Mmap,
    len: usize,
}

impl ExecutableMemory {
    pub fn new(code: &[u8]) -> Result<Self, MemoryError> {
        let len = round_to_page(code.len(), page_size());

        let mut map = MmapMut::map_anon(len).map_err(|source| MemoryError::Map { len, source })?;
        map[..code.len()].copy_from_slice(code);
        let map = map
            .make_exec()
            .map_err(|source| MemoryError::Protect { len, source })?;

        tracing::debug!(code = code.len(), mapped = len, "code mapped");

        Ok(Self {
            map,
            len: code.len(),
        })
    }

    /// Address of the first code byte.
    pub fn as_ptr(&self) -> *const u8 {
        self.map.as_ptr()
    }

    /// The copied code, without page padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.map[..self.len]
    }

    /// Bytes of code copied in.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes actually mapped, a whole number of pages.
    pub fn mapped_len(&self) -> usize {
        self.map.len()
    }
}

impl Drop for ExecutableMemory {
    fn drop(&mut self) {
        tracing::trace!(mapped = self.map.len(), "code unmapped");
    }
}

impl std::fmt::Debug for ExecutableMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableMemory")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len)
            .field("mapped_len", &self.mapped_len())
            .finish()
    }
}
