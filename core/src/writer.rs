//! Typed write accessors over any stage with the output capability.

use bytemuck::Pod;

use crate::category::Output;
use crate::length_prefix::LengthPrefix;
use crate::types::{Result, StreamError};
use crate::varint;

/// Borrowing writer over a stage. Works over concrete devices, composed
/// pipelines, and the erased `dyn DynStream`.
#[derive(Debug)]
pub struct StreamWriter<'a, S: ?Sized> {
    stage: &'a mut S,
}

impl<'a, S: Output + ?Sized> StreamWriter<'a, S> {
    pub fn new(stage: &'a mut S) -> Self {
        Self { stage }
    }

    pub fn stage(&mut self) -> &mut S {
        self.stage
    }

    /// Writes all of `data` or fails with `ShortWrite`.
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let mut remaining = data;
        while !remaining.is_empty() {
            let written = self.stage.write(remaining)?;
            if written == 0 {
                return Err(StreamError::ShortWrite {
                    expected: data.len(),
                    written: data.len() - remaining.len(),
                });
            }
            remaining = &remaining[written..];
        }
        Ok(())
    }

    /// Writes `size_of::<T>()` bytes as a raw byte copy of `value`.
    pub fn write_pod<T: Pod>(&mut self, value: &T) -> Result<()> {
        self.write_all(bytemuck::bytes_of(value))
    }

    /// Raw string bytes, no delimiter.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        self.write_all(value.as_bytes())
    }

    /// LEB128 varint encoding, minimal length.
    pub fn write_varint(&mut self, value: u64) -> Result<()> {
        let mut buf = [0u8; varint::MAX_VARINT_LEN];
        let len = varint::encode(value, &mut buf);
        self.write_all(&buf[..len])
    }

    /// Writes `[len: L (LE)][raw bytes]`. Fails with `LengthOverflow` when
    /// the string's byte length does not fit `L`; round-trips exactly with
    /// no delimiter scanning.
    pub fn write_prefixed_str<L: LengthPrefix>(&mut self, value: &str) -> Result<()> {
        let length = value.len() as u64;
        if length > L::MAX {
            return Err(StreamError::LengthOverflow {
                length,
                max: L::MAX,
            });
        }

        let mut prefix = [0u8; 8];
        L::encode(length, &mut prefix[..L::SIZE]);
        self.write_all(&prefix[..L::SIZE])?;
        self.write_all(value.as_bytes())
    }

    /// Writes a varint-prefixed string.
    pub fn write_varint_prefixed_str(&mut self, value: &str) -> Result<()> {
        self.write_varint(value.len() as u64)?;
        self.write_all(value.as_bytes())
    }
}
