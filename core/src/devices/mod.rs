//! Primitive byte endpoints. A device sits at the base of every pipeline
//! and owns either an in-memory buffer or an OS handle.

pub mod file;
pub mod memory;
pub mod ring;
pub mod stdio;

pub use file::FileDevice;
pub use memory::MemoryDevice;
pub use ring::RingBufferDevice;
pub use stdio::{Color, StdioDevice, Weight};
