//! Size bounds applied while compiling.

use jitsearch_core::MAX_KEYS;

/// Default ceiling on emitted bytes (64 MiB).
pub const DEFAULT_MAX_CODE_SIZE: usize = 64 << 20;

/// Bounds checked before and after emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileLimits {
    /// Maximum number of breakpoints or table entries (default: `i32::MAX`).
    pub(crate) max_keys: usize,
    /// Maximum size of the emitted buffer in bytes, pool included (default: 64 MiB).
    pub(crate) max_code_size: usize,
}

impl Default for CompileLimits {
    fn default() -> Self {
        Self {
            max_keys: MAX_KEYS,
            max_code_size: DEFAULT_MAX_CODE_SIZE,
        }
    }
}

impl CompileLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key limit. Values above `i32::MAX` are clamped.
    pub fn max_keys(mut self, limit: usize) -> Self {
        self.max_keys = limit.min(MAX_KEYS);
        self
    }

    /// Set the code size limit.
    pub fn max_code_size(mut self, limit: usize) -> Self {
        self.max_code_size = limit;
        self
    }

    pub fn get_max_keys(&self) -> usize {
        self.max_keys
    }
    pub fn get_max_code_size(&self) -> usize {
        self.max_code_size
    }
}
