//! Fixed-capacity circular buffer device.

use tracing::warn;

use crate::category::{Category, Device, HasEof, HasSize, Input, Output};
use crate::types::{AccessMode, Result, StreamError};

/// Ring buffer with a compile-time capacity, used as the backing store for
/// framing protocols over raw transport bytes.
///
/// Supports read, write and [`peek`](Self::peek) but not seeking. A write
/// larger than the remaining free capacity is rejected whole with
/// [`StreamError::CapacityExceeded`]; unread bytes are never silently
/// overwritten.
#[derive(Debug, Clone)]
pub struct RingBufferDevice<const N: usize> {
    buffer: [u8; N],
    tail: usize,
    head: usize,
    len: usize,
    mode: AccessMode,
}

impl<const N: usize> RingBufferDevice<N> {
    pub fn new() -> Self {
        Self::with_mode(AccessMode::READ_WRITE)
    }

    pub fn with_mode(mode: AccessMode) -> Self {
        Self {
            buffer: [0; N],
            tail: 0,
            head: 0,
            len: 0,
            mode,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free capacity remaining for writes.
    pub const fn available(&self) -> usize {
        N - self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies up to `data.len()` buffered bytes without consuming them.
    pub fn peek(&self, data: &mut [u8]) -> usize {
        let count = self.len.min(data.len());
        let first = count.min(N - self.tail);
        data[..first].copy_from_slice(&self.buffer[self.tail..self.tail + first]);
        if first < count {
            data[first..count].copy_from_slice(&self.buffer[..count - first]);
        }
        count
    }
}

impl<const N: usize> Default for RingBufferDevice<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Device for RingBufferDevice<N> {
    const CATEGORY: Category = Category::INPUT
        .union(Category::OUTPUT)
        .union(Category::HAS_EOF)
        .union(Category::HAS_SIZE);

    type Root = Self;

    fn device(&self) -> &Self {
        self
    }

    fn device_mut(&mut self) -> &mut Self {
        self
    }

    fn into_device(self) -> Self {
        self
    }
}

impl<const N: usize> Input for RingBufferDevice<N> {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        if !self.mode.is_readable() {
            return Err(StreamError::AccessDenied { operation: "read" });
        }

        let count = self.len.min(data.len());
        let first = count.min(N - self.tail);
        data[..first].copy_from_slice(&self.buffer[self.tail..self.tail + first]);
        if first < count {
            data[first..count].copy_from_slice(&self.buffer[..count - first]);
        }
        self.tail = (self.tail + count) % N;
        self.len -= count;
        Ok(count)
    }
}

impl<const N: usize> Output for RingBufferDevice<N> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if !self.mode.is_writable() {
            return Err(StreamError::AccessDenied { operation: "write" });
        }

        if data.len() > self.available() {
            warn!(
                requested = data.len(),
                available = self.available(),
                "ring buffer write rejected"
            );
            return Err(StreamError::CapacityExceeded {
                requested: data.len() as u64,
                available: self.available() as u64,
            });
        }

        let first = data.len().min(N - self.head);
        self.buffer[self.head..self.head + first].copy_from_slice(&data[..first]);
        if first < data.len() {
            self.buffer[..data.len() - first].copy_from_slice(&data[first..]);
        }
        self.head = (self.head + data.len()) % N;
        self.len += data.len();
        Ok(data.len())
    }
}

impl<const N: usize> HasEof for RingBufferDevice<N> {
    /// True when every buffered byte has been consumed.
    fn eof(&mut self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> HasSize for RingBufferDevice<N> {
    /// Number of buffered, not yet consumed bytes.
    fn size(&mut self) -> u64 {
        self.len as u64
    }
}
