//! Byte-budget sandbox filter.

use crate::category::{
    Category, Filter, Flushable, HasEof, HasSize, HasStatus, Input, InputSeekable, Output,
    OutputSeekable,
};
use crate::filters::{
    EofFilter, FlushableFilter, InputFilter, InputSeekableFilter, OutputFilter,
    OutputSeekableFilter, SizeFilter, StatusFilter,
};
use crate::types::{Result, SeekDirection, StreamError};

/// Caps readable and writable bytes at `N`. An operation that would cross
/// the cap fails with [`StreamError::CapacityExceeded`]; nothing is
/// silently truncated. Used to sandbox an embedded sub-stream inside a
/// container format; pair with
/// [`SeekOffsetFilter`](crate::filters::SeekOffsetFilter) when the
/// sub-stream does not start at offset 0 of the stage below.
#[derive(Debug, Clone, Default)]
pub struct SizeLimitFilter<const N: u64> {
    read_pos: u64,
    write_pos: u64,
}

impl<const N: u64> SizeLimitFilter<N> {
    pub fn new() -> Self {
        Self {
            read_pos: 0,
            write_pos: 0,
        }
    }

    fn bounded_target(position: u64, offset: i64, direction: SeekDirection) -> Option<u64> {
        let base = match direction {
            SeekDirection::Begin => 0i64,
            SeekDirection::Current => position as i64,
            SeekDirection::End => N as i64,
        };
        let target = base.checked_add(offset)?;
        if target < 0 || target as u64 > N {
            return None;
        }
        Some(target as u64)
    }
}

impl<const N: u64> Filter for SizeLimitFilter<N> {
    const CATEGORY: Category = Category::all();
}

impl<const N: u64, Next: Input> InputFilter<Next> for SizeLimitFilter<N> {
    fn read(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        let remaining = N - self.read_pos;
        if data.len() as u64 > remaining {
            return Err(StreamError::CapacityExceeded {
                requested: data.len() as u64,
                available: remaining,
            });
        }

        let count = next.read(data)?;
        self.read_pos += count as u64;
        Ok(count)
    }
}

impl<const N: u64, Next: InputSeekable> InputSeekableFilter<Next> for SizeLimitFilter<N> {
    fn seekg(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        let Some(target) = Self::bounded_target(self.read_pos, offset, direction) else {
            return false;
        };
        if !next.seekg(target as i64, SeekDirection::Begin) {
            return false;
        }
        self.read_pos = target;
        true
    }

    fn tellg(&mut self, _next: &mut Next) -> u64 {
        self.read_pos
    }
}

impl<const N: u64, Next: Output> OutputFilter<Next> for SizeLimitFilter<N> {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        let remaining = N - self.write_pos;
        if data.len() as u64 > remaining {
            return Err(StreamError::CapacityExceeded {
                requested: data.len() as u64,
                available: remaining,
            });
        }

        let count = next.write(data)?;
        self.write_pos += count as u64;
        Ok(count)
    }
}

impl<const N: u64, Next: OutputSeekable> OutputSeekableFilter<Next> for SizeLimitFilter<N> {
    fn seekp(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        let Some(target) = Self::bounded_target(self.write_pos, offset, direction) else {
            return false;
        };
        if !next.seekp(target as i64, SeekDirection::Begin) {
            return false;
        }
        self.write_pos = target;
        true
    }

    fn tellp(&mut self, _next: &mut Next) -> u64 {
        self.write_pos
    }
}

impl<const N: u64, Next: HasEof> EofFilter<Next> for SizeLimitFilter<N> {
    fn eof(&mut self, next: &mut Next) -> bool {
        self.read_pos >= N || next.eof()
    }
}

impl<const N: u64, Next: HasSize> SizeFilter<Next> for SizeLimitFilter<N> {
    fn size(&mut self, next: &mut Next) -> u64 {
        N.min(next.size())
    }
}

impl<const N: u64, Next: HasStatus> StatusFilter<Next> for SizeLimitFilter<N> {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}

impl<const N: u64, Next: Flushable> FlushableFilter<Next> for SizeLimitFilter<N> {
    fn flush(&mut self, next: &mut Next) -> Result<()> {
        next.flush()
    }
}
