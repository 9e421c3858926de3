//! Device over the process's standard input and output, with auxiliary
//! terminal coloring local to this device only.

use std::io::{Read, Stdin, Stdout, Write};

use crate::category::{Category, Device, Flushable, HasEof, HasStatus, Input, Output};
use crate::types::{AccessMode, Result, StreamError};

/// Terminal foreground color for [`StdioDevice::set_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// ANSI escape sequence selecting this foreground color.
    pub const fn sequence(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

/// Reads come from stdin, writes and flushes go to stdout. `eof()`
/// reflects the platform EOF condition on stdin.
#[derive(Debug)]
pub struct StdioDevice {
    stdin: Stdin,
    stdout: Stdout,
    at_eof: bool,
    failed: bool,
    mode: AccessMode,
}

impl StdioDevice {
    pub fn new() -> Self {
        Self::with_mode(AccessMode::READ_WRITE)
    }

    pub fn with_mode(mode: AccessMode) -> Self {
        Self {
            stdin: std::io::stdin(),
            stdout: std::io::stdout(),
            at_eof: false,
            failed: false,
            mode,
        }
    }

    /// Switches the terminal foreground color. Coloring is an auxiliary
    /// capability of this device and not part of the stream category.
    pub fn set_color(&mut self, color: Color, weight: Weight) -> Result<()> {
        self.reset_color()?;

        if weight == Weight::Bold {
            self.write_sequence(ANSI_BOLD)?;
        }
        self.write_sequence(color.sequence())
    }

    pub fn reset_color(&mut self) -> Result<()> {
        self.write_sequence(ANSI_RESET)
    }

    fn write_sequence(&mut self, sequence: &str) -> Result<()> {
        self.stdout
            .lock()
            .write_all(sequence.as_bytes())
            .map_err(|source| {
                self.failed = true;
                StreamError::Io(source)
            })
    }
}

impl Default for StdioDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for StdioDevice {
    const CATEGORY: Category = Category::INPUT
        .union(Category::OUTPUT)
        .union(Category::HAS_EOF)
        .union(Category::HAS_STATUS)
        .union(Category::FLUSHABLE);

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

impl Input for StdioDevice {
    fn read(&mut self, data: &mut [u8]) -> Result<usize> {
        if !self.mode.is_readable() {
            return Err(StreamError::AccessDenied { operation: "read" });
        }

        match self.stdin.lock().read(data) {
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

impl Output for StdioDevice {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if !self.mode.is_writable() {
            return Err(StreamError::AccessDenied { operation: "write" });
        }

        match self.stdout.lock().write(data) {
            Ok(count) => Ok(count),
            Err(source) => {
                self.failed = true;
                Err(StreamError::Io(source))
            }
        }
    }
}

impl HasEof for StdioDevice {
    fn eof(&mut self) -> bool {
        self.at_eof
    }
}

impl HasStatus for StdioDevice {
    fn good(&mut self) -> bool {
        !self.failed
    }
}

impl Flushable for StdioDevice {
    fn flush(&mut self) -> Result<()> {
        self.stdout.lock().flush().map_err(|source| {
            self.failed = true;
            StreamError::Io(source)
        })
    }
}
