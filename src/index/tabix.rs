use super::{Block, IntervalIndex};
use crate::{Error, Result};
use noodles::core::Position;
use noodles::core::region::Interval;
use noodles::csi::binning_index::BinningIndex;
use noodles::tabix;
use std::path::Path;

/// An [`IntervalIndex`] backed by a tabix (`.tbi`) index, loaded once.
#[derive(Debug)]
pub struct TabixIntervalIndex {
    index: tabix::Index,
}

impl TabixIntervalIndex {
    /// Load a tabix index from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let index = tabix::read(path).map_err(|e| {
            Error::InvalidIndex(format!("failed to read {}: {}", path.display(), e))
        })?;

        // The header carries the contig names; an index without one cannot
        // answer membership queries.
        if index.header().is_none() {
            return Err(Error::InvalidIndex(format!(
                "{}: missing tabix header",
                path.display()
            )));
        }

        Ok(Self { index })
    }

    fn contig_id(&self, contig: &str) -> Option<usize> {
        self.index
            .header()?
            .reference_sequence_names()
            .get_index_of(contig)
    }
}

impl IntervalIndex for TabixIntervalIndex {
    fn contains_contig(&self, contig: &str) -> bool {
        self.contig_id(contig).is_some()
    }

    fn query(&self, contig: &str, pos: Position) -> Result<Vec<Block>> {
        let ref_id = self
            .contig_id(contig)
            .ok_or_else(|| Error::InvalidIndex(format!("unknown contig: {}", contig)))?;

        let interval = Interval::from(pos..=pos);
        let chunks = self
            .index
            .query(ref_id, interval)
            .map_err(|e| Error::InvalidIndex(format!("index query failed: {}", e)))?;

        // Chunk bounds are bgzf virtual positions; the record file offset is
        // the compressed half.
        Ok(chunks
            .into_iter()
            .map(|chunk| Block::new(chunk.start().compressed(), chunk.end().compressed()))
            .collect())
    }
}
