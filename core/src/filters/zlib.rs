//! Zlib compression and decompression filters over flate2's streaming
//! codec state.

use std::fmt;

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use thiserror::Error;

use crate::category::{Category, Filter, Flushable, HasEof, HasStatus, Input, Output};
use crate::filters::{
    write_exact, EofFilter, FlushableFilter, InputFilter, OutputFilter, StatusFilter,
};
use crate::types::Result;

/// Codec failure surfaced by either zlib filter.
#[derive(Debug, Error)]
pub enum ZlibError {
    #[error("zlib compress failed: {0}")]
    Compress(String),

    #[error("zlib decompress failed: {0}")]
    Decompress(String),
}

/// Compression effort, mapped onto zlib levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZlibCompressionLevel {
    Fastest = 1,
    Balanced = 5,
    Best = 9,
}

/// Streams writes incrementally through a zlib deflate state to the sink.
///
/// Every write is sync-flushed through the codec, so the sink always holds
/// a decodable prefix of the data written so far. `BUF` is the staging
/// buffer for compressed output between codec and sink.
pub struct ZlibCompressFilter<const BUF: usize = 256> {
    compress: Compress,
    output_buffer: [u8; BUF],
}

impl<const BUF: usize> fmt::Debug for ZlibCompressFilter<BUF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZlibCompressFilter")
            .field("total_in", &self.compress.total_in())
            .field("total_out", &self.compress.total_out())
            .finish()
    }
}

impl<const BUF: usize> ZlibCompressFilter<BUF> {
    pub fn new(level: ZlibCompressionLevel) -> Self {
        Self {
            compress: Compress::new(Compression::new(level as u32), true),
            output_buffer: [0; BUF],
        }
    }
}

impl<const BUF: usize> Default for ZlibCompressFilter<BUF> {
    fn default() -> Self {
        Self::new(ZlibCompressionLevel::Best)
    }
}

impl<const BUF: usize> Filter for ZlibCompressFilter<BUF> {
    const CATEGORY: Category = Category::OUTPUT
        .union(Category::FLUSHABLE)
        .union(Category::HAS_STATUS);
}

impl<const BUF: usize, Next: Output> OutputFilter<Next> for ZlibCompressFilter<BUF> {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        let mut input = data;
        loop {
            let before_in = self.compress.total_in();
            let before_out = self.compress.total_out();

            self.compress
                .compress(input, &mut self.output_buffer, FlushCompress::Sync)
                .map_err(|e| ZlibError::Compress(e.to_string()))?;

            let consumed = (self.compress.total_in() - before_in) as usize;
            let produced = (self.compress.total_out() - before_out) as usize;

            if produced > 0 {
                write_exact(next, &self.output_buffer[..produced])?;
            }
            input = &input[consumed..];

            // The codec is drained once it stops filling the whole staging
            // buffer and has eaten all input.
            if produced < BUF && input.is_empty() {
                break;
            }
        }
        Ok(data.len())
    }
}

impl<const BUF: usize, Next: HasStatus> StatusFilter<Next> for ZlibCompressFilter<BUF> {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}

impl<const BUF: usize, Next: Flushable> FlushableFilter<Next> for ZlibCompressFilter<BUF> {
    /// Codec state is already sync-flushed on every write; this only
    /// forwards the flush to the sink.
    fn flush(&mut self, next: &mut Next) -> Result<()> {
        next.flush()
    }
}

/// Streams reads incrementally through a zlib inflate state.
///
/// One pull from the source may decompress into several caller reads: the
/// filter buffers raw source bytes internally (`BUF` bytes at a time) and
/// feeds the codec until the caller's buffer is full or the source is dry.
pub struct ZlibDecompressFilter<const BUF: usize = 256> {
    decompress: Decompress,
    input_buffer: [u8; BUF],
    buffered: usize,
    consumed: usize,
}

impl<const BUF: usize> fmt::Debug for ZlibDecompressFilter<BUF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZlibDecompressFilter")
            .field("total_in", &self.decompress.total_in())
            .field("total_out", &self.decompress.total_out())
            .field("buffered", &(self.buffered - self.consumed))
            .finish()
    }
}

impl<const BUF: usize> ZlibDecompressFilter<BUF> {
    pub fn new() -> Self {
        Self {
            decompress: Decompress::new(true),
            input_buffer: [0; BUF],
            buffered: 0,
            consumed: 0,
        }
    }
}

impl<const BUF: usize> Default for ZlibDecompressFilter<BUF> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BUF: usize> Filter for ZlibDecompressFilter<BUF> {
    const CATEGORY: Category = Category::INPUT
        .union(Category::HAS_EOF)
        .union(Category::HAS_STATUS);
}

impl<const BUF: usize, Next: Input> InputFilter<Next> for ZlibDecompressFilter<BUF> {
    fn read(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        let mut filled = 0;

        while filled < data.len() {
            if self.consumed == self.buffered {
                let pulled = next.read(&mut self.input_buffer)?;
                if pulled == 0 {
                    break;
                }
                self.buffered = pulled;
                self.consumed = 0;
            }

            let before_in = self.decompress.total_in();
            let before_out = self.decompress.total_out();

            let status = self
                .decompress
                .decompress(
                    &self.input_buffer[self.consumed..self.buffered],
                    &mut data[filled..],
                    FlushDecompress::Sync,
                )
                .map_err(|e| ZlibError::Decompress(e.to_string()))?;

            self.consumed += (self.decompress.total_in() - before_in) as usize;
            filled += (self.decompress.total_out() - before_out) as usize;

            if matches!(status, Status::StreamEnd | Status::BufError) {
                break;
            }
        }

        Ok(filled)
    }
}

impl<const BUF: usize, Next: HasEof> EofFilter<Next> for ZlibDecompressFilter<BUF> {
    fn eof(&mut self, next: &mut Next) -> bool {
        self.consumed == self.buffered && next.eof()
    }
}

impl<const BUF: usize, Next: HasStatus> StatusFilter<Next> for ZlibDecompressFilter<BUF> {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}
