//! SHA-256 hashing filter.

use sha2::{Digest, Sha256};

use crate::category::{Category, Filter, Flushable, HasStatus, Output};
use crate::filters::{write_exact, FlushableFilter, OutputFilter, StatusFilter};
use crate::types::Result;

/// Streams writes through to the sink while folding them into a SHA-256
/// digest.
///
/// [`finalize`](Self::finalize) is a one-shot terminal operation: writing
/// through the filter after calling it is a contract violation and is not
/// guarded at runtime. Repeated `finalize` calls with no intervening
/// writes return the same digest.
#[derive(Debug, Clone, Default)]
pub struct Sha256Filter {
    hasher: Sha256,
}

/// SHA-256 digest size in bytes.
pub const SHA256_DIGEST_SIZE: usize = 32;

impl Sha256Filter {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    /// Returns the digest of every byte written so far.
    pub fn finalize(&mut self) -> [u8; SHA256_DIGEST_SIZE] {
        self.hasher.clone().finalize().into()
    }
}

impl Filter for Sha256Filter {
    const CATEGORY: Category = Category::OUTPUT
        .union(Category::FLUSHABLE)
        .union(Category::HAS_STATUS);
}

impl<Next: Output> OutputFilter<Next> for Sha256Filter {
    fn write(&mut self, next: &mut Next, data: &[u8]) -> Result<usize> {
        write_exact(next, data)?;
        self.hasher.update(data);
        Ok(data.len())
    }
}

impl<Next: HasStatus> StatusFilter<Next> for Sha256Filter {
    fn good(&mut self, next: &mut Next) -> bool {
        next.good()
    }
}

impl<Next: Flushable> FlushableFilter<Next> for Sha256Filter {
    fn flush(&mut self, next: &mut Next) -> Result<()> {
        next.flush()
    }
}
