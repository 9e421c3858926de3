//! Pipeline composition: `device | filter1 | filter2 | ...`.
//!
//! Composition is left to right and produces one aggregate value owning the
//! device and every filter, innermost first. Every operation enters at the
//! outermost filter and recurses inward; the order is load-bearing and
//! non-commutative (compression before buffering is not the reverse).
//!
//! The aggregate's capability set is computed per tag from the device's
//! category and every filter's forwarding requirements (see
//! [`composed_category`]): a pipeline implements a capability trait only
//! when its outer filter implements the matching forwarding trait over the
//! inner stage, recursively. Invoking an operation the composed type does
//! not support fails to compile.

use std::ops::BitOr;

use crate::category::{
    composed_category, Category, Device, Filter, Flushable, HasEof, HasSize, HasStatus, Input,
    InputSeekable, Output, OutputSeekable,
};
use crate::devices::{FileDevice, MemoryDevice, RingBufferDevice, StdioDevice};
use crate::filters::{
    EofFilter, FlushableFilter, InputFilter, InputSeekableFilter, OutputFilter,
    OutputSeekableFilter, SizeFilter, StatusFilter,
};
use crate::types::{Result, SeekDirection};

/// One filter stacked on an inner stage (a device or another pipeline).
#[derive(Debug, Clone)]
pub struct Pipeline<F, Next> {
    pub(crate) filter: F,
    pub(crate) next: Next,
}

impl<F: Filter, Next: Device> Pipeline<F, Next> {
    pub fn new(filter: F, next: Next) -> Self {
        Self { filter, next }
    }

    /// The outermost filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// The stage below the outermost filter. Nested `next()` calls reach
    /// any filter in the stack by position.
    pub fn next(&self) -> &Next {
        &self.next
    }

    pub fn next_mut(&mut self) -> &mut Next {
        &mut self.next
    }

    pub const fn filter_count(&self) -> usize {
        Self::FILTER_COUNT
    }

    /// Pops the outermost filter WITHOUT flushing it, returning the filter
    /// and the pipeline that starts one stage further in. Applied
    /// repeatedly this reaches any stage, so a raw device can be re-wrapped
    /// in a different outer chain.
    pub fn split(self) -> (F, Next) {
        (self.filter, self.next)
    }
}

impl<F: Filter, Next: Device> Device for Pipeline<F, Next> {
    const CATEGORY: Category = composed_category(F::CATEGORY, F::REQUIREMENTS, Next::CATEGORY);
    const FILTER_COUNT: usize = Next::FILTER_COUNT + 1;

    type Root = Next::Root;

    fn device(&self) -> &Self::Root {
        self.next.device()
    }

    fn device_mut(&mut self) -> &mut Self::Root {
        self.next.device_mut()
    }

    fn into_device(self) -> Self::Root {
        self.next.into_device()
    }
}

// ---------------------------------------------------------------------------
// Capability forwarding. Each impl exists exactly when the outer filter can
// forward the operation over the inner stage.
// ---------------------------------------------------------------------------

impl<F: InputFilter<Next>, Next> Input for Pipeline<F, Next> {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        self.filter.read(&mut self.next, data)
    }
}

impl<F: InputSeekableFilter<Next>, Next> InputSeekable for Pipeline<F, Next> {
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        self.filter.seekg(&mut self.next, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        self.filter.tellg(&mut self.next)
    }
}

impl<F: OutputFilter<Next>, Next> Output for Pipeline<F, Next> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.filter.write(&mut self.next, data)
    }
}

impl<F: OutputSeekableFilter<Next>, Next> OutputSeekable for Pipeline<F, Next> {
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        self.filter.seekp(&mut self.next, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        self.filter.tellp(&mut self.next)
    }
}

impl<F: EofFilter<Next>, Next> HasEof for Pipeline<F, Next> {
    fn eof(&mut self) -> bool {
        self.filter.eof(&mut self.next)
    }
}

impl<F: StatusFilter<Next>, Next> HasStatus for Pipeline<F, Next> {
    fn good(&mut self) -> bool {
        self.filter.good(&mut self.next)
    }

    fn fail(&mut self) -> bool {
        self.filter.fail(&mut self.next)
    }
}

impl<F: SizeFilter<Next>, Next> HasSize for Pipeline<F, Next> {
    fn size(&mut self) -> u64 {
        self.filter.size(&mut self.next)
    }
}

impl<F: FlushableFilter<Next>, Next> Flushable for Pipeline<F, Next> {
    fn flush(&mut self) -> Result<()> {
        self.filter.flush(&mut self.next)
    }
}

// ---------------------------------------------------------------------------
// Composition operator. `BitOr` cannot be blanket-implemented over every
// device type, so each device gets its own impl; pipelines compose further.
// ---------------------------------------------------------------------------

impl<F: Filter> BitOr<F> for MemoryDevice {
    type Output = Pipeline<F, MemoryDevice>;

    fn bitor(self, filter: F) -> Self::Output {
        Pipeline::new(filter, self)
    }
}

impl<F: Filter> BitOr<F> for FileDevice {
    type Output = Pipeline<F, FileDevice>;

    fn bitor(self, filter: F) -> Self::Output {
        Pipeline::new(filter, self)
    }
}

impl<F: Filter> BitOr<F> for StdioDevice {
    type Output = Pipeline<F, StdioDevice>;

    fn bitor(self, filter: F) -> Self::Output {
        Pipeline::new(filter, self)
    }
}

impl<const N: usize, F: Filter> BitOr<F> for RingBufferDevice<N> {
    type Output = Pipeline<F, RingBufferDevice<N>>;

    fn bitor(self, filter: F) -> Self::Output {
        Pipeline::new(filter, self)
    }
}

impl<F0: Filter, N0: Device, F: Filter> BitOr<F> for Pipeline<F0, N0> {
    type Output = Pipeline<F, Pipeline<F0, N0>>;

    fn bitor(self, filter: F) -> Self::Output {
        Pipeline::new(filter, self)
    }
}
