//! Absolute-seek remapping filter.

use crate::category::{
    Category, Filter, Flushable, HasEof, HasSize, HasStatus, Input, InputSeekable, Output,
    OutputSeekable,
};
use crate::filters::{
    EofFilter, FlushableFilter, InputFilter, InputSeekableFilter, OutputFilter,
    OutputSeekableFilter, SizeFilter, StatusFilter,
};
use crate::types::{Result, SeekDirection};

/// Remaps begin-relative seeks by `OFFSET` bytes so the stage below appears
/// to start at offset 0, the sub-region view used for embedded streams.
/// Current- and end-relative seeks, reads and writes pass straight through;
/// `tellg`/`tellp`/`size` subtract the offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekOffsetFilter<const OFFSET: u64>;

impl<const OFFSET: u64> SeekOffsetFilter<OFFSET> {
    pub fn new() -> Self {
        Self
    }
}

impl<const OFFSET: u64> Filter for SeekOffsetFilter<OFFSET> {
    const CATEGORY: Category = Category::all();
}

impl<const OFFSET: u64, Next: Input> InputFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn read(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        next.read(data)
    }
}

impl<const OFFSET: u64, Next: InputSeekable> InputSeekableFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn seekg(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        match direction {
            SeekDirection::Begin => match (OFFSET as i64).checked_add(offset) {
                Some(target) => next.seekg(target, SeekDirection::Begin),
                None => false,
            },
            _ => next.seekg(offset, direction),
        }
    }

    fn tellg(&mut self, next: &mut Next) -> u64 {
        next.tellg().saturating_sub(OFFSET)
    }
}

impl<const OFFSET: u64, Next: Output> OutputFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        next.write(data)
    }
}

impl<const OFFSET: u64, Next: OutputSeekable> OutputSeekableFilter<Next>
    for SeekOffsetFilter<OFFSET>
{
    fn seekp(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        match direction {
            SeekDirection::Begin => match (OFFSET as i64).checked_add(offset) {
                Some(target) => next.seekp(target, SeekDirection::Begin),
                None => false,
            },
            _ => next.seekp(offset, direction),
        }
    }

    fn tellp(&mut self, next: &mut Next) -> u64 {
        next.tellp().saturating_sub(OFFSET)
    }
}

impl<const OFFSET: u64, Next: HasEof> EofFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn eof(&mut self, next: &mut Next) -> bool {
        next.eof()
    }
}

impl<const OFFSET: u64, Next: HasSize> SizeFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn size(&mut self, next: &mut Next) -> u64 {
        next.size().saturating_sub(OFFSET)
    }
}

impl<const OFFSET: u64, Next: HasStatus> StatusFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}

impl<const OFFSET: u64, Next: Flushable> FlushableFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn flush(&mut self, next: &mut Next) -> Result<()> {
        next.flush()
    }
}
