//! stream-core
//!
//! Composable byte-stream pipelines: primitive devices, forwarding filters,
//! typed accessors, and a runtime type-erasure boundary.
//!
//! A pipeline is built left to right, `device | filter1 | filter2`, and
//! supports exactly the operations every stage in the chain can forward;
//! invoking anything else fails to compile. The same pipeline can be
//! wrapped in [`dynamic::DynamicStream`] for a uniform runtime interface
//! whose capability queries must be checked before use.

#![forbid(unsafe_code)]

// Shared and top level
pub mod category;
pub mod types;

// Stages
pub mod devices;
pub mod filters;
pub mod pipeline;

// Typed accessors and wire formats
pub mod length_prefix;
pub mod reader;
pub mod varint;
pub mod writer;

// Runtime erasure
pub mod dynamic;

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::category::{
        Category, Device, Filter, Flushable, HasEof, HasSize, HasStatus, Input, InputSeekable,
        Output, OutputSeekable,
    };
    pub use crate::devices::{Color, FileDevice, MemoryDevice, RingBufferDevice, StdioDevice, Weight};
    pub use crate::dynamic::{DynStream, DynamicStream, DynamicStreamView};
    pub use crate::filters::{
        CircularBufferFilter, EofFilter, FlushableFilter, InputFilter, InputSeekableFilter,
        OutputFilter, OutputSeekableFilter, SeekOffsetFilter, Sha256Filter, SinkBufferFilter,
        SizeFilter, SizeLimitFilter, StatusFilter, ZlibCompressFilter, ZlibCompressionLevel,
        ZlibDecompressFilter,
    };
    pub use crate::length_prefix::LengthPrefix;
    pub use crate::pipeline::Pipeline;
    pub use crate::reader::StreamReader;
    pub use crate::types::{AccessMode, Result, SeekDirection, StreamError};
    pub use crate::writer::StreamWriter;
}
