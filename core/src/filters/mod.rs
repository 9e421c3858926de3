//! Transformation stages and the filter-form forwarding traits.
//!
//! A filter never owns the stage beneath it: every operation receives the
//! next stage (device or inner pipeline) as its first parameter and
//! recurses inward. A filter implements one forwarding trait per capability
//! tag it is able to forward; missing impls remove the capability from any
//! pipeline the filter participates in, even when the device below supports
//! it.

pub mod circular;
pub mod hash;
pub mod seek_offset;
pub mod sink_buffer;
pub mod size_limit;
pub mod zlib;

pub use circular::CircularBufferFilter;
pub use hash::Sha256Filter;
pub use seek_offset::SeekOffsetFilter;
pub use sink_buffer::SinkBufferFilter;
pub use size_limit::SizeLimitFilter;
pub use zlib::{ZlibCompressFilter, ZlibCompressionLevel, ZlibDecompressFilter};

use crate::category::{Filter, Output};
use crate::types::{Result, SeekDirection, StreamError};

/// Read forwarding.
pub trait InputFilter<Next>: Filter {
    fn read(&mut self, next: &mut Next, data: &mut [u8]) -> Result<usize>;
}

/// Read-cursor seek forwarding.
pub trait InputSeekableFilter<Next>: InputFilter<Next> {
    fn seekg(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool;

    fn tellg(&mut self, next: &mut Next) -> u64;
}

/// Write forwarding.
pub trait OutputFilter<Next>: Filter {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize>;
}

/// Write-cursor seek forwarding.
pub trait OutputSeekableFilter<Next>: OutputFilter<Next> {
    fn seekp(&mut self, next: &mut Next, offset: i64, direction: SeekDirection) -> bool;

    fn tellp(&mut self, next: &mut Next) -> u64;
}

/// End-of-stream forwarding.
pub trait EofFilter<Next>: Filter {
    fn eof(&mut self, next: &mut Next) -> bool;
}

/// Status forwarding.
pub trait StatusFilter<Next>: Filter {
    fn good(&mut self, next: &mut Next) -> bool;

    fn fail(&mut self, next: &mut Next) -> bool {
        !self.good(next)
    }
}

/// Size forwarding.
pub trait SizeFilter<Next>: Filter {
    fn size(&mut self, next: &mut Next) -> u64;
}

/// Flush forwarding.
pub trait FlushableFilter<Next>: Filter {
    fn flush(&mut self, next: &mut Next) -> Result<()>;
}

/// Writes all of `data`, failing if the sink stops accepting bytes.
pub(crate) fn write_exact<S: Output + ?Sized>(sink: &mut S, data: &[u8]) -> Result<()> {
    let mut remaining = data;
    while !remaining.is_empty() {
        let written = sink.write(remaining)?;
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
