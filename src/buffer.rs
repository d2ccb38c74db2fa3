//! Bounded staging buffer between content generators and the sink.

/// One mebibyte, the unit test sizes are configured in.
pub const MIB: usize = 1024 * 1024;

/// Upper bound for the staging buffer regardless of the per-test size.
pub const MAX_BUFFER_MB: usize = 64;

/// Byte accumulator that never grows past its capacity.
///
/// Generators call [`Buffer::write`] repeatedly and stop once it reports
/// that the buffer is full. Bytes past the capacity are dropped.
#[derive(Debug, Clone)]
pub struct Buffer {
    data: Vec<u8>,
    capacity: usize,
}

impl Buffer {
    /// Create a buffer holding at most `capacity` bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Create the staging buffer for a run streaming `test_size_mb` per test
    ///
    /// The capacity is `min(64, test_size_mb)` MiB.
    #[must_use]
    pub fn for_test_size(test_size_mb: usize) -> Self {
        Self::with_capacity(test_size_mb.min(MAX_BUFFER_MB) * MIB)
    }

    /// Append as much of `chunk` as fits and report whether more writes are accepted
    #[inline]
    pub fn write(&mut self, chunk: &[u8]) -> bool {
        let room = self.capacity.saturating_sub(self.data.len());
        let n = chunk.len().min(room);
        if n > 0 {
            self.data.extend_from_slice(&chunk[..n]);
        }
        self.good()
    }

    /// Append a single byte
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        if self.data.len() < self.capacity {
            self.data.push(byte);
        }
        self.good()
    }

    #[inline]
    #[must_use]
    pub fn good(&self) -> bool {
        self.data.len() < self.capacity
    }

    /// Bytes written so far
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.data
    }

    /// Forget the content but keep the allocation for the next test
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
