//! File device over an OS file handle.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::category::{
    Category, Device, Flushable, HasEof, HasSize, HasStatus, Input, InputSeekable, Output,
    OutputSeekable,
};
use crate::types::{AccessMode, Result, SeekDirection, StreamError};

/// Device over an open file. Construction fails immediately on a bad path
/// or mode; later OS failures latch the sticky fail state observable
/// through `good()`/`fail()`.
///
/// The get and put positions share the single OS cursor, so `seekg` and
/// `seekp` move the same position.
#[derive(Debug)]
pub struct FileDevice {
    file: File,
    mode: AccessMode,
    at_eof: bool,
    failed: bool,
}

impl FileDevice {
    pub fn open(path: impl AsRef<Path>, mode: AccessMode) -> Result<Self> {
        let path = path.as_ref();

        let mut options = OpenOptions::new();
        options.read(mode.is_readable());
        if mode.is_writable() {
            options.write(true).create(true);
        }
        if mode.contains(AccessMode::TRUNCATE) {
            options.truncate(true);
        }
        if mode.contains(AccessMode::APPEND) {
            options.append(true);
        }

        let file = options.open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?mode, "opened file device");

        Ok(Self {
            file,
            mode,
            at_eof: false,
            failed: false,
        })
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    fn seek(&mut self, offset: i64, direction: SeekDirection) -> bool {
        let pos = match direction {
            SeekDirection::Begin => {
                if offset < 0 {
                    return false;
                }
                SeekFrom::Start(offset as u64)
            }
            SeekDirection::Current => SeekFrom::Current(offset),
            SeekDirection::End => SeekFrom::End(offset),
        };

        match self.file.seek(pos) {
            Ok(_) => {
                self.at_eof = false;
                true
            }
            Err(_) => false,
        }
    }

    fn tell(&mut self) -> u64 {
        match self.file.stream_position() {
            Ok(pos) => pos,
            Err(_) => {
                self.failed = true;
                0
            }
        }
    }
}

impl Device for FileDevice {
    const CATEGORY: Category = Category::all();

    type Root = Self;

    fn device(&self) -> &Self {
        self
    }

    fn device_mut(&mut self) -> &mut Self {
        self
    }

    fn into_device(self) -> Self {
        self
    }
}

impl Input for FileDevice {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        if !self.mode.is_readable() {
            return Err(StreamError::AccessDenied { operation: "read" });
        }

        match self.file.read(data) {
            Ok(0) if !data.is_empty() => {
                self.at_eof = true;
                Ok(0)
            }
            Ok(count) => Ok(count),
            Err(source) => {
                self.failed = true;
                Err(StreamError::Io(source))
            }
        }
    }
}

impl InputSeekable for FileDevice {
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool {
        self.seek(offset, direction)
    }

    fn tellg(&mut self) -> u64 {
        self.tell()
    }
}

impl Output for FileDevice {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if !self.mode.is_writable() {
            return Err(StreamError::AccessDenied { operation: "write" });
        }

        match self.file.write(data) {
            Ok(count) => Ok(count),
            Err(source) => {
                self.failed = true;
                Err(StreamError::Io(source))
            }
        }
    }
}

impl OutputSeekable for FileDevice {
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool {
        self.seek(offset, direction)
    }

    fn tellp(&mut self) -> u64 {
        self.tell()
    }
}

impl HasEof for FileDevice {
    fn eof(&mut self) -> bool {
        self.at_eof
    }
}

impl HasStatus for FileDevice {
    fn good(&mut self) -> bool {
        !self.failed
    }
}

impl HasSize for FileDevice {
    /// Probes end-of-file and restores the cursor.
    fn size(&mut self) -> u64 {
        let probe = (|| -> std::io::Result<u64> {
            let current = self.file.stream_position()?;
            let end = self.file.seek(SeekFrom::End(0))?;
            self.file.seek(SeekFrom::Start(current))?;
            Ok(end)
        })();

        match probe {
            Ok(end) => end,
            Err(_) => {
                self.failed = true;
                0
            }
        }
    }
}

impl Flushable for FileDevice {
    fn flush(&mut self) -> Result<()> {
        self.file.flush().map_err(|source| {
            self.failed = true;
            StreamError::Io(source)
        })
    }
}
