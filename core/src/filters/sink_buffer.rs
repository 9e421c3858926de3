//! Write-side buffering filter.

use tracing::trace;

use crate::category::{Category, Filter, HasStatus, Output, OutputSeekable};
use crate::filters::{
    write_exact, FlushableFilter, OutputFilter, OutputSeekableFilter, StatusFilter,
};
use crate::types::{Result, SeekDirection};

/// Accumulates writes up to `N` bytes and forwards them to the sink in one
/// write once full. An explicit `flush()` forces out any partial remainder
/// and does not require the sink itself to be flushable.
///
/// Bytes are never reordered: a forwarded seek flushes the buffer first.
/// The filter does not forward the input capability: while it holds
/// unflushed bytes, a reader routed around it would observe stale data, so
/// route all access through the pipeline or flush before any alternate
/// path reads the device.
#[derive(Debug, Clone)]
pub struct SinkBufferFilter<const N: usize> {
    buffer: [u8; N],
    filled: usize,
}

impl<const N: usize> SinkBufferFilter<N> {
    pub fn new() -> Self {
        Self {
            buffer: [0; N],
            filled: 0,
        }
    }

    /// Bytes currently held back from the sink.
    pub const fn buffered(&self) -> usize {
        self.filled
    }

    fn drain<Next: Output>(&mut self, next: &mut Next) -> Result<()> {
        if self.filled > 0 {
            trace!(bytes = self.filled, "sink buffer flush");
            write_exact(next, &self.buffer[..self.filled])?;
            self.filled = 0;
        }
        Ok(())
    }
}

impl<const N: usize> Default for SinkBufferFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Filter for SinkBufferFilter<N> {
    const CATEGORY: Category = Category::OUTPUT
        .union(Category::OUTPUT_SEEKABLE)
        .union(Category::FLUSHABLE)
        .union(Category::HAS_STATUS);

    // Flushing drains this filter's own buffer, so the sink only has to be
    // writable, not flushable.
    const REQUIREMENTS: [Category; Category::TAG_COUNT] = {
        let mut requirements = Category::IDENTITY_REQUIREMENTS;
        requirements[Category::FLUSHABLE.index()] = Category::OUTPUT;
        requirements
    };
}

impl<const N: usize, Next: Output> OutputFilter<Next> for SinkBufferFilter<N> {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        let mut remaining = data;
        while !remaining.is_empty() {
            let take = (N - self.filled).min(remaining.len());
            self.buffer[self.filled..self.filled + take].copy_from_slice(&remaining[..take]);
            self.filled += take;
            remaining = &remaining[take..];

            if self.filled == N {
                self.drain(next)?;
            }
        }
        Ok(data.len())
    }
}

impl<const N: usize, Next: OutputSeekable> OutputSeekableFilter<Next> for SinkBufferFilter<N> {
    /// Flushes buffered bytes before moving the cursor so byte ordering is
    /// preserved. Returns `false` if the flush itself fails.
    fn seekp(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        if self.drain(next).is_err() {
            return false;
        }
        next.seekp(offset, direction)
    }

    /// Logical write position: sink position plus buffered byte count.
    fn tellp(&mut self, next: &mut Next) -> u64 {
        next.tellp() + self.filled as u64
    }
}

impl<const N: usize, Next: Output> FlushableFilter<Next> for SinkBufferFilter<N> {
    fn flush(&mut self, next: &mut Next) -> Result<()> {
        self.drain(next)
    }
}

impl<const N: usize, Next: HasStatus> StatusFilter<Next> for SinkBufferFilter<N> {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}
