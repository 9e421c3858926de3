//! Ring-buffered framing filter over an arbitrary byte source.

use crate::category::{Category, Filter, Flushable, HasEof, HasStatus, Input, Output};
use crate::filters::{
    EofFilter, FlushableFilter, InputFilter, InputSeekableFilter, OutputFilter, SizeFilter,
    StatusFilter,
};
use crate::types::{Result, SeekDirection};

/// Adapts a source that delivers bytes in arbitrary chunk sizes (a raw
/// socket, typically) behind a fixed ring buffer, so one underlying pull
/// can serve many caller reads. Bytes come out in exactly the order they
/// went in, and a partially received logical frame stays buffered until
/// the layer above decides it is complete; [`peek`](Self::peek) inspects
/// it without consuming.
///
/// Writes pass through to the next stage untouched.
#[derive(Debug, Clone)]
pub struct CircularBufferFilter<const N: usize> {
    buffer: [u8; N],
    tail: usize,
    head: usize,
    len: usize,
    consumed: u64,
}

impl<const N: usize> CircularBufferFilter<N> {
    pub fn new() -> Self {
        Self {
            buffer: [0; N],
            tail: 0,
            head: 0,
            len: 0,
            consumed: 0,
        }
    }

    /// Bytes buffered and not yet consumed.
    pub const fn buffered(&self) -> usize {
        self.len
    }

    /// Pulls one chunk from the source into the ring's free space.
    /// Returns the number of bytes pulled; zero when the ring is full or
    /// the source is dry.
    pub fn fill<S: Input>(&mut self, source: &mut S) -> Result<usize> {
        if self.len == N {
            return Ok(0);
        }

        // Largest contiguous free region starting at head.
        let end = if self.tail > self.head { self.tail } else { N };
        let pulled = source.read(&mut self.buffer[self.head..end])?;
        self.head = (self.head + pulled) % N;
        self.len += pulled;
        Ok(pulled)
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

    fn consume(&mut self, count: usize) {
        self.tail = (self.tail + count) % N;
        self.len -= count;
        self.consumed += count as u64;
    }
}

impl<const N: usize> Default for CircularBufferFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Filter for CircularBufferFilter<N> {
    const CATEGORY: Category = Category::INPUT
        .union(Category::INPUT_SEEKABLE)
        .union(Category::OUTPUT)
        .union(Category::HAS_EOF)
        .union(Category::HAS_SIZE)
        .union(Category::HAS_STATUS)
        .union(Category::FLUSHABLE);

    // Seeking and size are answered from the ring itself: a current-only
    // skip needs nothing more than a readable source, and the buffered
    // count needs nothing at all.
    const REQUIREMENTS: [Category; Category::TAG_COUNT] = {
        let mut requirements = Category::IDENTITY_REQUIREMENTS;
        requirements[Category::INPUT_SEEKABLE.index()] = Category::INPUT;
        requirements[Category::HAS_SIZE.index()] = Category::empty();
        requirements
    };
}

impl<const N: usize, Next: Input> InputFilter<Next> for CircularBufferFilter<N> {
    fn read(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        if self.len == 0 {
            self.fill(next)?;
        }

        let count = self.peek(data);
        self.consume(count);
        Ok(count)
    }
}

impl<const N: usize, Next: Input> InputSeekableFilter<Next> for CircularBufferFilter<N> {
    /// Only `Current` seeks are meaningful here: a non-negative offset
    /// skips forward over buffered bytes (at most `buffered()`). Consumed
    /// bytes are gone, so rewinding and absolute seeks return `false`.
    fn seekg(&mut self, _next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        if direction != SeekDirection::Current {
            return false;
        }
        if offset < 0 || offset as usize > self.len {
            return false;
        }
        self.consume(offset as usize);
        true
    }

    /// Total bytes consumed through this filter.
    fn tellg(&mut self, _next: &mut Next) -> u64 {
        self.consumed
    }
}

impl<const N: usize, Next: Output> OutputFilter<Next> for CircularBufferFilter<N> {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        next.write(data)
    }
}

impl<const N: usize, Next: HasEof> EofFilter<Next> for CircularBufferFilter<N> {
    fn eof(&mut self, next: &mut Next) -> bool {
        self.len == 0 && next.eof()
    }
}

impl<const N: usize, Next> SizeFilter<Next> for CircularBufferFilter<N> {
    /// Buffered byte count, not the size of the source below.
    fn size(&mut self, _next: &mut Next) -> u64 {
        self.len as u64
    }
}

impl<const N: usize, Next: HasStatus> StatusFilter<Next> for CircularBufferFilter<N> {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}

impl<const N: usize, Next: Flushable> FlushableFilter<Next> for CircularBufferFilter<N> {
    fn flush(&mut self, next: &mut Next) -> Result<()> {
        next.flush()
    }
}
