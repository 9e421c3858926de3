//! Integer types usable as the length prefix of `[len][raw bytes]` wire
//! values. Prefixes are little-endian on the wire.

use byteorder::{ByteOrder, LittleEndian};

/// A fixed-width unsigned integer acting as a length prefix.
pub trait LengthPrefix: Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Largest length representable by this prefix.
    const MAX: u64;

    /// Encodes `len` into `out[..Self::SIZE]`. `len` must not exceed
    /// `Self::MAX`.
    fn encode(len: u64, out: &mut [u8]);

    /// Decodes a length from `bytes[..Self::SIZE]`.
    fn decode(bytes: &[u8]) -> u64;
}

impl LengthPrefix for u8 {
    const SIZE: usize = 1;
    const MAX: u64 = u8::MAX as u64;

    fn encode(len: u64, out: &mut [u8]) {
        out[0] = len as u8;
    }

    fn decode(bytes: &[u8]) -> u64 {
        bytes[0] as u64
    }
}

impl LengthPrefix for u16 {
    const SIZE: usize = 2;
    const MAX: u64 = u16::MAX as u64;

    fn encode(len: u64, out: &mut [u8]) {
        LittleEndian::write_u16(out, len as u16);
    }

    fn decode(bytes: &[u8]) -> u64 {
        LittleEndian::read_u16(bytes) as u64
    }
}

impl LengthPrefix for u32 {
    const SIZE: usize = 4;
    const MAX: u64 = u32::MAX as u64;

    fn encode(len: u64, out: &mut [u8]) {
        LittleEndian::write_u32(out, len as u32);
    }

    fn decode(bytes: &[u8]) -> u64 {
        LittleEndian::read_u32(bytes) as u64
    }
}

impl LengthPrefix for u64 {
    const SIZE: usize = 8;
    const MAX: u64 = u64::MAX;

    fn encode(len: u64, out: &mut [u8]) {
        LittleEndian::write_u64(out, len);
    }

    fn decode(bytes: &[u8]) -> u64 {
        LittleEndian::read_u64(bytes)
    }
}
