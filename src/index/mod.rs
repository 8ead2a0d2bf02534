//! Interval index collaborator.
//!
//! The builder never inspects the index format itself; it only asks two
//! questions, captured by [`IntervalIndex`]: is a contig present at all, and
//! which file-offset blocks cover a given position. [`TabixIntervalIndex`]
//! answers them from a standard tabix index via noodles.

mod tabix;

pub use tabix::TabixIntervalIndex;

use crate::Result;
use noodles::core::Position;

/// A file-offset block in the underlying record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    start: u64,
    end: u64,
}

impl Block {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Byte offset of the first record the block covers.
    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

/// Read-only query interface over a pre-existing genomic interval index.
pub trait IntervalIndex {
    /// Whether the index knows the contig at all.
    fn contains_contig(&self, contig: &str) -> bool;

    /// Blocks whose range covers the zero-length interval `[pos, pos]`, in
    /// the index's own ordering. The first block is the earliest-ordered one
    /// whose range could contain the queried position.
    fn query(&self, contig: &str, pos: Position) -> Result<Vec<Block>>;
}
