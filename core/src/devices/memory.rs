//! Growable in-memory device with independent read and write cursors.

use crate::category::{
    Category, Device, HasEof, HasSize, Input, InputSeekable, Output, OutputSeekable,
};
use crate::types::{AccessMode, Result, SeekDirection, StreamError};

/// Byte buffer device. `size()` is the write high-water mark; writes past
/// the end grow the buffer and zero-fill any gap, and seeks outside
/// `[0, size]` fail by returning `false`.
#[derive(Debug, Clone)]
pub struct MemoryDevice {
    buffer: Vec<u8>,
    read_index: usize,
    write_index: usize,
    mode: AccessMode,
}

impl MemoryDevice {
    /// Empty read/write device.
    pub fn new() -> Self {
        Self::with_mode(AccessMode::READ_WRITE)
    }

    pub fn with_mode(mode: AccessMode) -> Self {
        Self {
            buffer: Vec::new(),
            read_index: 0,
            write_index: 0,
            mode,
        }
    }

    /// Read/write device over an existing buffer. The initial contents
    /// count toward `size()`.
    pub fn from_vec(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            read_index: 0,
            write_index: 0,
            mode: AccessMode::READ_WRITE,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    fn seek_target(cursor: usize, end: usize, offset: i64, direction: SeekDirection) -> Option<usize> {
        let base = match direction {
            SeekDirection::Begin => 0i64,
            SeekDirection::Current => cursor as i64,
            SeekDirection::End => end as i64,
        };
        let target = base.checked_add(offset)?;
        if target < 0 || target > end as i64 {
            return None;
        }
        Some(target as usize)
    }
}

impl Device for MemoryDevice {
    const CATEGORY: Category = Category::INPUT
        .union(Category::INPUT_SEEKABLE)
        .union(Category::OUTPUT)
        .union(Category::OUTPUT_SEEKABLE)
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

impl Input for MemoryDevice {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        if !self.mode.is_readable() {
            return Err(StreamError::AccessDenied { operation: "read" });
        }

        let available = self.buffer.len().saturating_sub(self.read_index);
        let count = available.min(data.len());
        data[..count].copy_from_slice(&self.buffer[self.read_index..self.read_index + count]);
        self.read_index += count;
        Ok(count)
    }
}

impl InputSeekable for MemoryDevice {
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        match Self::seek_target(self.read_index, self.buffer.len(), offset, direction) {
            Some(target) => {
                self.read_index = target;
                true
            }
            None => false,
        }
    }

    fn tellg(&mut self) -> u64 {
        self.read_index as u64
    }
}

impl Output for MemoryDevice {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if !self.mode.is_writable() {
            return Err(StreamError::AccessDenied { operation: "write" });
        }

        let end = self.write_index + data.len();
        if end > self.buffer.len() {
            self.buffer.resize(end, 0);
        }
        self.buffer[self.write_index..end].copy_from_slice(data);
        self.write_index = end;
        Ok(data.len())
    }
}

impl OutputSeekable for MemoryDevice {
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        match Self::seek_target(self.write_index, self.buffer.len(), offset, direction) {
            Some(target) => {
                self.write_index = target;
                true
            }
            None => false,
        }
    }

    fn tellp(&mut self) -> u64 {
        self.write_index as u64
    }
}

impl HasEof for MemoryDevice {
    fn eof(&mut self) -> bool {
        self.read_index >= self.buffer.len()
    }
}

impl HasSize for MemoryDevice {
    fn size(&mut self) -> u64 {
        self.buffer.len() as u64
    }
}
