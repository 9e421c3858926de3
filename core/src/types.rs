//! Shared core types: the unified stream error, seek directions, and the
//! access-mode flag set used by device constructors.

use std::io;
use std::path::PathBuf;

use bitflags::bitflags;
use thiserror::Error;

use crate::filters::zlib::ZlibError;

/// Unified stream error covering device I/O, capacity limits, codec state,
/// and typed-accessor wire decoding.
///
/// `From` impls enable `?` across the whole pipeline. Out-of-range seeks are
/// deliberately *not* represented here: seeking returns `bool` because
/// callers routinely probe seek bounds speculatively.
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O failure from the operating system (read, write, flush, seek).
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A device could not be constructed from the given path.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Operation rejected by the access mode the device was created with.
    #[error("{operation} not permitted by access mode")]
    AccessDenied { operation: &'static str },

    /// A write or read would exceed a fixed-capacity stage. The stage's
    /// contents are untouched; nothing is silently truncated or overwritten.
    #[error("{requested} bytes exceed remaining capacity of {available}")]
    CapacityExceeded { requested: u64, available: u64 },

    /// A length-prefixed value does not fit its prefix integer type.
    #[error("length {length} exceeds prefix maximum {max}")]
    LengthOverflow { length: u64, max: u64 },

    /// Compression codec failure.
    #[error(transparent)]
    Zlib(#[from] ZlibError),

    /// A sink accepted fewer bytes than required.
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },

    /// A source ran out of bytes mid-value.
    #[error("unexpected end of stream: got {actual} of {expected} bytes")]
    UnexpectedEof { expected: usize, actual: usize },

    /// A varint continuation ran past the maximum encoded length.
    #[error("malformed varint: continuation past the maximum of 10 bytes")]
    MalformedVarint,

    /// String data read from the stream was not valid UTF-8.
    #[error("invalid utf-8 in stream data: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;

/// Reference point for a seek offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    /// Forward from the beginning of the stream.
    Begin,
    /// Relative to the current cursor.
    Current,
    /// Backward from the end of the stream.
    End,
}

bitflags! {
    /// Access-mode flag set passed to device constructors, interpreted
    /// identically by every device variant. For the file device these map
    /// onto the OS open flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessMode: u8 {
        const READ     = 0b0001;
        const WRITE    = 0b0010;
        const TRUNCATE = 0b0100;
        const APPEND   = 0b1000;

        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl AccessMode {
    #[inline]
    pub const fn is_readable(self) -> bool {
        self.contains(Self::READ)
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        self.contains(Self::WRITE)
    }
}
