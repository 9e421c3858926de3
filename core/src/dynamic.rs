//! Runtime type erasure: one uniform interface over any concrete stage.
//!
//! [`DynStream`] exposes every operation plus one boolean `is_*()` query
//! per capability tag. The queries are authoritative: callers must check
//! the matching query before invoking a capability-dependent operation.
//! Calling anyway is a documented contract violation: the operation
//! degrades to a neutral sentinel instead of panicking, but nothing more
//! is promised. The sentinels are uniform across the crate:
//!
//! | operation           | sentinel  |
//! |---------------------|-----------|
//! | `read` / `write`    | `Ok(0)`   |
//! | `seekg` / `seekp`   | `false`   |
//! | `tellg` / `tellp`   | `0`       |
//! | `eof`               | `false`   |
//! | `good`              | `false`   |
//! | `fail`              | `true`    |
//! | `flush`             | `Ok(())`  |
//! | `size`              | `0`       |
//!
//! [`DynamicStream`] owns the wrapped stage; [`DynamicStreamView`] borrows
//! one for transient erasure without moving or copying the device.

use crate::category::{
    composed_category, Category, Device, Filter, Flushable, HasEof, HasSize, HasStatus, Input,
    InputSeekable, Output, OutputSeekable,
};
use crate::devices::{FileDevice, MemoryDevice, RingBufferDevice, StdioDevice};
use crate::filters::{
    CircularBufferFilter, EofFilter, FlushableFilter, InputFilter, InputSeekableFilter,
    OutputFilter, OutputSeekableFilter, SeekOffsetFilter, Sha256Filter, SinkBufferFilter,
    SizeFilter, SizeLimitFilter, StatusFilter, ZlibCompressFilter, ZlibDecompressFilter,
};
use crate::pipeline::Pipeline;
use crate::types::{Result, SeekDirection};

/// Uniform runtime interface over a concrete pipeline or device.
pub trait DynStream {
    fn read(&mut self, data: &mut [u8]) -> Result<usize>;
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool;
    fn tellg(&mut self) -> u64;
    fn write(&mut self, data: &[u8]) -> Result<usize>;
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool;
    fn tellp(&mut self) -> u64;
    fn eof(&mut self) -> bool;
    fn good(&mut self) -> bool;
    fn fail(&mut self) -> bool;
    fn flush(&mut self) -> Result<()>;
    fn size(&mut self) -> u64;

    fn is_input(&self) -> bool;
    fn is_input_seekable(&self) -> bool;
    fn is_output(&self) -> bool;
    fn is_output_seekable(&self) -> bool;
    fn has_eof(&self) -> bool;
    fn has_status(&self) -> bool;
    fn has_size(&self) -> bool;
    fn is_flushable(&self) -> bool;
}

/// Degradation layer behind [`DynamicStream`]: every erasable stage
/// implements this, overriding exactly the operations its category
/// advertises and leaving the rest on the sentinel defaults.
///
/// This is an implementation surface; use [`DynamicStream`] or
/// [`DynamicStreamView`] rather than calling it directly.
pub trait ErasedStage {
    fn category(&self) -> Category;

    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        let _ = data;
        Ok(0)
    }

    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        let _ = (offset, direction);
        false
    }

    fn tellg(&mut self) -> u64 {
        0
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let _ = data;
        Ok(0)
    }

    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        let _ = (offset, direction);
        false
    }

    fn tellp(&mut self) -> u64 {
        0
    }

    fn eof(&mut self) -> bool {
        false
    }

    fn good(&mut self) -> bool {
        false
    }

    fn fail(&mut self) -> bool {
        !self.good()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&mut self) -> u64 {
        0
    }
}

/// Per-filter erased forwarding. Defaults are the sentinels, so a filter
/// that does not forward a capability degrades it; supported operations
/// are overridden to reuse the filter's statically typed logic through an
/// internal adapter.
pub trait DynFilter<Next: ErasedStage>: Filter {
    fn read_dyn(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        let _ = (next, data);
        Ok(0)
    }

    fn seekg_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        let _ = (next, offset, direction);
        false
    }

    fn tellg_dyn(&mut self, next: &mut Next) -> u64 {
        let _ = next;
        0
    }

    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        let _ = (next, data);
        Ok(0)
    }

    fn seekp_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        let _ = (next, offset, direction);
        false
    }

    fn tellp_dyn(&mut self, next: &mut Next) -> u64 {
        let _ = next;
        0
    }

    fn eof_dyn(&mut self, next: &mut Next) -> bool {
        let _ = next;
        false
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        let _ = next;
        false
    }

    fn fail_dyn(&mut self, next: &mut Next) -> bool {
        !self.good_dyn(next)
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        let _ = next;
        Ok(())
    }

    fn size_dyn(&mut self, next: &mut Next) -> u64 {
        let _ = next;
        0
    }
}

/// Adapter giving an erased stage the statically typed capability traits,
/// with every operation degrading per the sentinel table. Lets a filter's
/// erased path share the statically typed implementation.
struct ErasedRef<'a, T: ?Sized>(&'a mut T);

impl<T: ErasedStage + ?Sized> Input for ErasedRef<'_, T> {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        ErasedStage::read(self.0, data)
    }
}

impl<T: ErasedStage + ?Sized> InputSeekable for ErasedRef<'_, T> {
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        ErasedStage::seekg(self.0, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        ErasedStage::tellg(self.0)
    }
}

impl<T: ErasedStage + ?Sized> Output for ErasedRef<'_, T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        ErasedStage::write(self.0, data)
    }
}

impl<T: ErasedStage + ?Sized> OutputSeekable for ErasedRef<'_, T> {
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        ErasedStage::seekp(self.0, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        ErasedStage::tellp(self.0)
    }
}

impl<T: ErasedStage + ?Sized> HasEof for ErasedRef<'_, T> {
    fn eof(&mut self) -> bool {
        ErasedStage::eof(self.0)
    }
}

impl<T: ErasedStage + ?Sized> HasStatus for ErasedRef<'_, T> {
    fn good(&mut self) -> bool {
        ErasedStage::good(self.0)
    }

    fn fail(&mut self) -> bool {
        ErasedStage::fail(self.0)
    }
}

impl<T: ErasedStage + ?Sized> HasSize for ErasedRef<'_, T> {
    fn size(&mut self) -> u64 {
        ErasedStage::size(self.0)
    }
}

impl<T: ErasedStage + ?Sized> Flushable for ErasedRef<'_, T> {
    fn flush(&mut self) -> Result<()> {
        ErasedStage::flush(self.0)
    }
}

// ---------------------------------------------------------------------------
// Devices
// ---------------------------------------------------------------------------

impl ErasedStage for MemoryDevice {
    fn category(&self) -> Category {
        Self::CATEGORY
    }

    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        Input::read(self, data)
    }

    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        InputSeekable::seekg(self, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        InputSeekable::tellg(self)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Output::write(self, data)
    }

    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        OutputSeekable::seekp(self, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        OutputSeekable::tellp(self)
    }

    fn eof(&mut self) -> bool {
        HasEof::eof(self)
    }

    fn size(&mut self) -> u64 {
        HasSize::size(self)
    }
}

impl ErasedStage for FileDevice {
    fn category(&self) -> Category {
        Self::CATEGORY
    }

    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        Input::read(self, data)
    }

    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        InputSeekable::seekg(self, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        InputSeekable::tellg(self)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Output::write(self, data)
    }

    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        OutputSeekable::seekp(self, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        OutputSeekable::tellp(self)
    }

    fn eof(&mut self) -> bool {
        HasEof::eof(self)
    }

    fn good(&mut self) -> bool {
        HasStatus::good(self)
    }

    fn fail(&mut self) -> bool {
        HasStatus::fail(self)
    }

    fn flush(&mut self) -> Result<()> {
        Flushable::flush(self)
    }

    fn size(&mut self) -> u64 {
        HasSize::size(self)
    }
}

impl ErasedStage for StdioDevice {
    fn category(&self) -> Category {
        Self::CATEGORY
    }

    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        Input::read(self, data)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Output::write(self, data)
    }

    fn eof(&mut self) -> bool {
        HasEof::eof(self)
    }

    fn good(&mut self) -> bool {
        HasStatus::good(self)
    }

    fn fail(&mut self) -> bool {
        HasStatus::fail(self)
    }

    fn flush(&mut self) -> Result<()> {
        Flushable::flush(self)
    }
}

impl<const N: usize> ErasedStage for RingBufferDevice<N> {
    fn category(&self) -> Category {
        Self::CATEGORY
    }

    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        Input::read(self, data)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Output::write(self, data)
    }

    fn eof(&mut self) -> bool {
        HasEof::eof(self)
    }

    fn size(&mut self) -> u64 {
        HasSize::size(self)
    }
}

// ---------------------------------------------------------------------------
// Pipelines: forward through the outer filter's erased ops, intersecting
// capability sets layer by layer.
// ---------------------------------------------------------------------------

impl<F, Next> ErasedStage for Pipeline<F, Next>
where
    F: DynFilter<Next>,
    Next: ErasedStage,
{
    fn category(&self) -> Category {
        composed_category(F::CATEGORY, F::REQUIREMENTS, self.next.category())
    }

    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        self.filter.read_dyn(&mut self.next, data)
    }

    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        self.filter.seekg_dyn(&mut self.next, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        self.filter.tellg_dyn(&mut self.next)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.filter.write_dyn(&mut self.next, data)
    }

    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        self.filter.seekp_dyn(&mut self.next, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        self.filter.tellp_dyn(&mut self.next)
    }

    fn eof(&mut self) -> bool {
        self.filter.eof_dyn(&mut self.next)
    }

    fn good(&mut self) -> bool {
        self.filter.good_dyn(&mut self.next)
    }

    fn fail(&mut self) -> bool {
        self.filter.fail_dyn(&mut self.next)
    }

    fn flush(&mut self) -> Result<()> {
        self.filter.flush_dyn(&mut self.next)
    }

    fn size(&mut self) -> u64 {
        self.filter.size_dyn(&mut self.next)
    }
}

// ---------------------------------------------------------------------------
// Filters: erased forwarding reuses the statically typed logic.
// ---------------------------------------------------------------------------

impl<const N: usize, Next: ErasedStage> DynFilter<Next> for SinkBufferFilter<N> {
    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        OutputFilter::write(self, &mut ErasedRef(next), data)
    }

    fn seekp_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        OutputSeekableFilter::seekp(self, &mut ErasedRef(next), offset, direction)
    }

    fn tellp_dyn(&mut self, next: &mut Next) -> u64 {
        OutputSeekableFilter::tellp(self, &mut ErasedRef(next))
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        FlushableFilter::flush(self, &mut ErasedRef(next))
    }
}

impl<const N: usize, Next: ErasedStage> DynFilter<Next> for CircularBufferFilter<N> {
    fn read_dyn(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        InputFilter::read(self, &mut ErasedRef(next), data)
    }

    fn seekg_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        InputSeekableFilter::seekg(self, &mut ErasedRef(next), offset, direction)
    }

    fn tellg_dyn(&mut self, next: &mut Next) -> u64 {
        InputSeekableFilter::tellg(self, &mut ErasedRef(next))
    }

    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        OutputFilter::write(self, &mut ErasedRef(next), data)
    }

    fn eof_dyn(&mut self, next: &mut Next) -> bool {
        EofFilter::eof(self, &mut ErasedRef(next))
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        FlushableFilter::flush(self, &mut ErasedRef(next))
    }

    fn size_dyn(&mut self, next: &mut Next) -> u64 {
        SizeFilter::size(self, &mut ErasedRef(next))
    }
}

impl<const N: u64, Next: ErasedStage> DynFilter<Next> for SizeLimitFilter<N> {
    fn read_dyn(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        InputFilter::read(self, &mut ErasedRef(next), data)
    }

    fn seekg_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        InputSeekableFilter::seekg(self, &mut ErasedRef(next), offset, direction)
    }

    fn tellg_dyn(&mut self, next: &mut Next) -> u64 {
        InputSeekableFilter::tellg(self, &mut ErasedRef(next))
    }

    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        OutputFilter::write(self, &mut ErasedRef(next), data)
    }

    fn seekp_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        OutputSeekableFilter::seekp(self, &mut ErasedRef(next), offset, direction)
    }

    fn tellp_dyn(&mut self, next: &mut Next) -> u64 {
        OutputSeekableFilter::tellp(self, &mut ErasedRef(next))
    }

    fn eof_dyn(&mut self, next: &mut Next) -> bool {
        EofFilter::eof(self, &mut ErasedRef(next))
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        FlushableFilter::flush(self, &mut ErasedRef(next))
    }

    fn size_dyn(&mut self, next: &mut Next) -> u64 {
        SizeFilter::size(self, &mut ErasedRef(next))
    }
}

impl<const OFFSET: u64, Next: ErasedStage> DynFilter<Next> for SeekOffsetFilter<OFFSET> {
    fn read_dyn(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        InputFilter::read(self, &mut ErasedRef(next), data)
    }

    fn seekg_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        InputSeekableFilter::seekg(self, &mut ErasedRef(next), offset, direction)
    }

    fn tellg_dyn(&mut self, next: &mut Next) -> u64 {
        InputSeekableFilter::tellg(self, &mut ErasedRef(next))
    }

    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        OutputFilter::write(self, &mut ErasedRef(next), data)
    }

    fn seekp_dyn(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool {
        OutputSeekableFilter::seekp(self, &mut ErasedRef(next), offset, direction)
    }

    fn tellp_dyn(&mut self, next: &mut Next) -> u64 {
        OutputSeekableFilter::tellp(self, &mut ErasedRef(next))
    }

    fn eof_dyn(&mut self, next: &mut Next) -> bool {
        EofFilter::eof(self, &mut ErasedRef(next))
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        FlushableFilter::flush(self, &mut ErasedRef(next))
    }

    fn size_dyn(&mut self, next: &mut Next) -> u64 {
        SizeFilter::size(self, &mut ErasedRef(next))
    }
}

impl<const BUF: usize, Next: ErasedStage> DynFilter<Next> for ZlibCompressFilter<BUF> {
    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        OutputFilter::write(self, &mut ErasedRef(next), data)
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        FlushableFilter::flush(self, &mut ErasedRef(next))
    }
}

impl<const BUF: usize, Next: ErasedStage> DynFilter<Next> for ZlibDecompressFilter<BUF> {
    fn read_dyn(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize> {
        InputFilter::read(self, &mut ErasedRef(next), data)
    }

    fn eof_dyn(&mut self, next: &mut Next) -> bool {
        EofFilter::eof(self, &mut ErasedRef(next))
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }
}

impl<Next: ErasedStage> DynFilter<Next> for Sha256Filter {
    fn write_dyn(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        OutputFilter::write(self, &mut ErasedRef(next), data)
    }

    fn good_dyn(&mut self, next: &mut Next) -> bool {
        StatusFilter::good(self, &mut ErasedRef(next))
    }

    fn flush_dyn(&mut self, next: &mut Next) -> Result<()> {
        FlushableFilter::flush(self, &mut ErasedRef(next))
    }
}

// ---------------------------------------------------------------------------
// Owning and borrowing wrappers
// ---------------------------------------------------------------------------

/// Owns a concrete stage behind the uniform [`DynStream`] interface.
#[derive(Debug)]
pub struct DynamicStream<T> {
    inner: T,
}

impl<T: ErasedStage> DynamicStream<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Erases the concrete type entirely.
    pub fn boxed(self) -> Box<dyn DynStream>
    where
        T: 'static,
    {
        Box::new(self)
    }

    /// Borrow as the trait object, e.g. to hand to a typed accessor.
    pub fn as_dyn(&mut self) -> &mut dyn DynStream {
        self
    }
}

impl<T: ErasedStage> DynStream for DynamicStream<T> {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        ErasedStage::read(&mut self.inner, data)
    }

    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        ErasedStage::seekg(&mut self.inner, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        ErasedStage::tellg(&mut self.inner)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        ErasedStage::write(&mut self.inner, data)
    }

    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        ErasedStage::seekp(&mut self.inner, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        ErasedStage::tellp(&mut self.inner)
    }

    fn eof(&mut self) -> bool {
        ErasedStage::eof(&mut self.inner)
    }

    fn good(&mut self) -> bool {
        ErasedStage::good(&mut self.inner)
    }

    fn fail(&mut self) -> bool {
        ErasedStage::fail(&mut self.inner)
    }

    fn flush(&mut self) -> Result<()> {
        ErasedStage::flush(&mut self.inner)
    }

    fn size(&mut self) -> u64 {
        ErasedStage::size(&mut self.inner)
    }

    fn is_input(&self) -> bool {
        self.inner.category().contains(Category::INPUT)
    }

    fn is_input_seekable(&self) -> bool {
        self.inner.category().contains(Category::INPUT_SEEKABLE)
    }

    fn is_output(&self) -> bool {
        self.inner.category().contains(Category::OUTPUT)
    }

    fn is_output_seekable(&self) -> bool {
        self.inner.category().contains(Category::OUTPUT_SEEKABLE)
    }

    fn has_eof(&self) -> bool {
        self.inner.category().contains(Category::HAS_EOF)
    }

    fn has_status(&self) -> bool {
        self.inner.category().contains(Category::HAS_STATUS)
    }

    fn has_size(&self) -> bool {
        self.inner.category().contains(Category::HAS_SIZE)
    }

    fn is_flushable(&self) -> bool {
        self.inner.category().contains(Category::FLUSHABLE)
    }
}

/// Borrows a concrete stage behind the uniform [`DynStream`] interface,
/// for transient erasure without moving the device.
#[derive(Debug)]
pub struct DynamicStreamView<'a, T: ?Sized> {
    inner: &'a mut T,
}

impl<'a, T: ErasedStage + ?Sized> DynamicStreamView<'a, T> {
    pub fn new(inner: &'a mut T) -> Self {
        Self { inner }
    }

    pub fn as_dyn(&mut self) -> &mut dyn DynStream {
        self
    }
}

impl<T: ErasedStage + ?Sized> DynStream for DynamicStreamView<'_, T> {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        ErasedStage::read(self.inner, data)
    }

    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        ErasedStage::seekg(self.inner, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        ErasedStage::tellg(self.inner)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        ErasedStage::write(self.inner, data)
    }

    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        ErasedStage::seekp(self.inner, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        ErasedStage::tellp(self.inner)
    }

    fn eof(&mut self) -> bool {
        ErasedStage::eof(self.inner)
    }

    fn good(&mut self) -> bool {
        ErasedStage::good(self.inner)
    }

    fn fail(&mut self) -> bool {
        ErasedStage::fail(self.inner)
    }

    fn flush(&mut self) -> Result<()> {
        ErasedStage::flush(self.inner)
    }

    fn size(&mut self) -> u64 {
        ErasedStage::size(self.inner)
    }

    fn is_input(&self) -> bool {
        self.inner.category().contains(Category::INPUT)
    }

    fn is_input_seekable(&self) -> bool {
        self.inner.category().contains(Category::INPUT_SEEKABLE)
    }

    fn is_output(&self) -> bool {
        self.inner.category().contains(Category::OUTPUT)
    }

    fn is_output_seekable(&self) -> bool {
        self.inner.category().contains(Category::OUTPUT_SEEKABLE)
    }

    fn has_eof(&self) -> bool {
        self.inner.category().contains(Category::HAS_EOF)
    }

    fn has_status(&self) -> bool {
        self.inner.category().contains(Category::HAS_STATUS)
    }

    fn has_size(&self) -> bool {
        self.inner.category().contains(Category::HAS_SIZE)
    }

    fn is_flushable(&self) -> bool {
        self.inner.category().contains(Category::FLUSHABLE)
    }
}

// ---------------------------------------------------------------------------
// The erased interface itself satisfies the capability traits (degrading
// per the sentinel table), so typed accessors work over `dyn DynStream`.
// ---------------------------------------------------------------------------

impl<'a> Input for dyn DynStream + 'a {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        DynStream::read(self, data)
    }
}

impl<'a> InputSeekable for dyn DynStream + 'a {
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        DynStream::seekg(self, offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        DynStream::tellg(self)
    }
}

impl<'a> Output for dyn DynStream + 'a {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        DynStream::write(self, data)
    }
}

impl<'a> OutputSeekable for dyn DynStream + 'a {
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        DynStream::seekp(self, offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        DynStream::tellp(self)
    }
}

impl<'a> HasEof for dyn DynStream + 'a {
    fn eof(&mut self) -> bool {
        DynStream::eof(self)
    }
}

impl<'a> HasStatus for dyn DynStream + 'a {
    fn good(&mut self) -> bool {
        DynStream::good(self)
    }

    fn fail(&mut self) -> bool {
        DynStream::fail(self)
    }
}

impl<'a> HasSize for dyn DynStream + 'a {
    fn size(&mut self) -> u64 {
        DynStream::size(self)
    }
}

impl<'a> Flushable for dyn DynStream + 'a {
    fn flush(&mut self) -> Result<()> {
        DynStream::flush(self)
    }
}
