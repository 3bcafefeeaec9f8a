//! Growing byte buffer for emitted code and data.

/// Append-only code buffer with little-endian scalar helpers.
///
/// Each `push_*` returns the offset the value was written at.
#[derive(Clone, Debug, Default)]
pub struct CodeBuffer {
    bytes: Vec<u8>,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn push_bytes(&mut self, data: &[u8]) -> usize {
        let offset = self.bytes.len();
        self.bytes.extend_from_slice(data);
        offset
    }

    /// Reserve `len` zero bytes to be patched later.
    pub fn push_zeros(&mut self, len: usize) -> usize {
        let offset = self.bytes.len();
        self.bytes.resize(offset + len, 0);
        offset
    }

    pub fn push_i32(&mut self, value: i32) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_u64(&mut self, value: u64) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_f32(&mut self, value: f32) -> usize {
        self.push_bytes(&value.to_le_bytes())
    }
}
