//! Typed read accessors over any stage with the input capability.

use std::io;

use bytemuck::Pod;

use crate::category::{HasSize, Input, InputSeekable};
use crate::length_prefix::LengthPrefix;
use crate::types::{Result, SeekDirection, StreamError};
use crate::varint;

const READ_BLOCK_SIZE: usize = 64;

/// Borrowing reader over a stage. Works over concrete devices, composed
/// pipelines, and the erased `dyn DynStream`.
#[derive(Debug)]
pub struct StreamReader<'a, S: ?Sized> {
    stage: &'a mut S,
}

impl<'a, S: Input + ?Sized> StreamReader<'a, S> {
    pub fn new(stage: &'a mut S) -> Self {
        Self { stage }
    }

    pub fn stage(&mut self) -> &mut S {
        self.stage
    }

    /// Fills `data` completely or fails with `UnexpectedEof`.
    pub fn read_exact(&mut self, data: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < data.len() {
            let count = self.stage.read(&mut data[filled..])?;
            if count == 0 {
                return Err(StreamError::UnexpectedEof {
                    expected: data.len(),
                    actual: filled,
                });
            }
            filled += count;
        }
        Ok(())
    }

    /// Reads `size_of::<T>()` bytes as a raw byte copy of `T`.
    pub fn read_pod<T: Pod>(&mut self) -> Result<T> {
        let mut value = T::zeroed();
        self.read_exact(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Read-to-count into a fresh buffer.
    pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut data = vec![0u8; len];
        self.read_exact(&mut data)?;
        Ok(data)
    }

    /// Read-to-count as UTF-8.
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        Ok(String::from_utf8(self.read_vec(len)?)?)
    }

    /// Read-to-end: drains the stage until it reports no more bytes.
    pub fn read_to_vec(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        let mut block = [0u8; READ_BLOCK_SIZE];
        loop {
            let count = self.stage.read(&mut block)?;
            if count == 0 {
                return Ok(data);
            }
            data.extend_from_slice(&block[..count]);
        }
    }

    /// Read-to-end as UTF-8.
    pub fn read_to_string(&mut self) -> Result<String> {
        Ok(String::from_utf8(self.read_to_vec()?)?)
    }

    /// Decodes one LEB128 varint.
    pub fn read_varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        let mut shift = 0u32;

        for _ in 0..varint::MAX_VARINT_LEN {
            let mut byte = [0u8; 1];
            self.read_exact(&mut byte)?;
            let byte = byte[0];

            if shift == 63 && byte > 1 {
                return Err(StreamError::MalformedVarint);
            }
            value |= u64::from(byte & 0x7f) << shift;

            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }

        Err(StreamError::MalformedVarint)
    }

    /// Reads a `[len: L (LE)][raw bytes]` value written by
    /// [`write_prefixed_str`](crate::writer::StreamWriter::write_prefixed_str).
    pub fn read_prefixed_string<L: LengthPrefix>(&mut self) -> Result<String> {
        let mut prefix = [0u8; 8];
        self.read_exact(&mut prefix[..L::SIZE])?;
        let len = L::decode(&prefix[..L::SIZE]);
        self.read_string(len as usize)
    }

    /// Reads a varint-prefixed string.
    pub fn read_varint_prefixed_string(&mut self) -> Result<String> {
        let len = self.read_varint()?;
        self.read_string(len as usize)
    }
}

impl<'a, S: InputSeekable + ?Sized> StreamReader<'a, S> {
    /// Reads up to the next `\n`, consuming the terminator but not
    /// returning it; a trailing `\r` is stripped. Bytes read past the
    /// terminator are seeked back.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line: Vec<u8> = Vec::new();
        let mut block = [0u8; READ_BLOCK_SIZE];

        loop {
            let count = self.stage.read(&mut block)?;
            if count == 0 {
                break;
            }

            match block[..count].iter().position(|&byte| byte == b'\n') {
                None => line.extend_from_slice(&block[..count]),
                Some(position) => {
                    line.extend_from_slice(&block[..position]);

                    let overshoot = (count - position - 1) as i64;
                    if overshoot > 0
                        && !self.stage.seekg(-overshoot, SeekDirection::Current)
                    {
                        return Err(StreamError::Io(io::Error::other(
                            "failed to seek back past line terminator",
                        )));
                    }
                    break;
                }
            }
        }

        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(String::from_utf8(line)?)
    }
}

impl<'a, S: Input + HasSize + ?Sized> StreamReader<'a, S> {
    /// Remaining stage size as reported by the stage itself, handy for
    /// pre-sizing read-to-end buffers.
    pub fn stage_size(&mut self) -> u64 {
        self.stage.size()
    }
}
