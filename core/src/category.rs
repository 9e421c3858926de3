//! Capability tags and the compile-time capability traits.
//!
//! Every stage declares a category composed of tags. The statically typed
//! side of the crate expresses each tag as a trait, so invoking an operation
//! a pipeline does not support fails to compile. The [`Category`] bitflags
//! are the runtime mirror of the same set, consumed by the dynamic-erasure
//! layer's `is_*()` queries.

use bitflags::bitflags;

use crate::types::{Result, SeekDirection};

bitflags! {
    /// Runtime capability set of a stage.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Category: u8 {
        const INPUT           = 1 << 0;
        const INPUT_SEEKABLE  = 1 << 1;
        const OUTPUT          = 1 << 2;
        const OUTPUT_SEEKABLE = 1 << 3;
        const HAS_EOF         = 1 << 4;
        const HAS_STATUS      = 1 << 5;
        const HAS_SIZE        = 1 << 6;
        const FLUSHABLE       = 1 << 7;
    }
}

impl Category {
    /// Number of capability tags.
    pub const TAG_COUNT: usize = 8;

    /// Bit position of a single-tag value, usable to index a
    /// requirement table.
    pub const fn index(self) -> usize {
        self.bits().trailing_zeros() as usize
    }

    /// Requirement table demanding the same tag from the inner stage for
    /// every tag, the default forwarding contract of a filter.
    pub const IDENTITY_REQUIREMENTS: [Category; Category::TAG_COUNT] = [
        Category::INPUT,
        Category::INPUT_SEEKABLE,
        Category::OUTPUT,
        Category::OUTPUT_SEEKABLE,
        Category::HAS_EOF,
        Category::HAS_STATUS,
        Category::HAS_SIZE,
        Category::FLUSHABLE,
    ];
}

/// Capability set of one filter stacked on an inner stage: a tag survives
/// exactly when the filter exposes it and the inner stage satisfies the
/// filter's requirement for that tag. Applied layer by layer this yields
/// the composition rule: a filter that cannot forward an operation removes
/// the capability even when the device below supports it, while a filter
/// may still provide a capability (such as buffered flush) on top of a
/// weaker inner stage.
pub const fn composed_category(
    filter: Category,
    requirements: [Category; Category::TAG_COUNT],
    inner: Category,
) -> Category {
    let mut bits = 0u8;
    let mut index = 0;
    while index < Category::TAG_COUNT {
        let tag = 1u8 << index;
        let required = requirements[index].bits();
        if filter.bits() & tag != 0 && inner.bits() & required == required {
            bits |= tag;
        }
        index += 1;
    }
    Category::from_bits_retain(bits)
}

/// A readable stage.
pub trait Input {
    /// Reads up to `data.len()` bytes, returning the count actually read.
    /// Zero means no bytes were available.
    fn read(&mut self, data: &mut [u8]) -> Result<usize>;
}

/// A readable stage with a seekable read cursor.
pub trait InputSeekable: Input {
    /// Moves the read cursor. Returns `false` when the target is out of
    /// range; the cursor is left untouched in that case.
    fn seekg(&mut self, offset: i64, direction: SeekDirection) -> bool;

    /// Current read cursor position.
    fn tellg(&mut self) -> u64;
}

/// A writable stage.
pub trait Output {
    /// Writes up to `data.len()` bytes, returning the count actually
    /// accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;
}

/// A writable stage with a seekable write cursor.
pub trait OutputSeekable: Output {
    /// Moves the write cursor. Returns `false` when the target is out of
    /// range; the cursor is left untouched in that case.
    fn seekp(&mut self, offset: i64, direction: SeekDirection) -> bool;

    /// Current write cursor position.
    fn tellp(&mut self) -> u64;
}

/// A stage that can report end-of-stream on its read side.
pub trait HasEof {
    fn eof(&mut self) -> bool;
}

/// A stage that carries sticky success/failure state.
pub trait HasStatus {
    fn good(&mut self) -> bool;

    fn fail(&mut self) -> bool {
        !self.good()
    }
}

/// A stage with a known total size.
pub trait HasSize {
    fn size(&mut self) -> u64;
}

/// A stage whose buffered write state can be forced out.
pub trait Flushable {
    fn flush(&mut self) -> Result<()>;
}

/// A device or composed pipeline: the base of a stage stack.
///
/// `CATEGORY` is the stage's full capability set. For a pipeline it is
/// computed per tag by [`composed_category`], so a filter that cannot
/// forward an operation removes that capability from the aggregate even
/// when the device below supports it.
pub trait Device: Sized {
    const CATEGORY: Category;

    /// Number of filters stacked on top of the innermost device.
    const FILTER_COUNT: usize = 0;

    /// Innermost device type.
    type Root: Device;

    fn device(&self) -> &Self::Root;

    fn device_mut(&mut self) -> &mut Self::Root;

    /// Unwraps down to the innermost device, discarding every filter
    /// without flushing.
    fn into_device(self) -> Self::Root;
}

/// A transformation stage. `CATEGORY` is the mask of tags the filter is
/// able to forward or provide; tags outside the mask are removed from any
/// pipeline the filter participates in. `REQUIREMENTS` records, per tag,
/// what the filter demands of the stage below: the same tag by default,
/// less for self-provided capabilities.
pub trait Filter: Sized {
    const CATEGORY: Category;

    const REQUIREMENTS: [Category; Category::TAG_COUNT] = Category::IDENTITY_REQUIREMENTS;
}
