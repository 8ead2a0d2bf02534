//! Mini-index builder.
//!
//! A mindex holds, for each shard, the file offset of a record at or before
//! that shard's start position. If the shard's contig isn't in the index at
//! all, the offset instead points past the end of file.

use crate::index::IntervalIndex;
use crate::positions::ShardStart;
use crate::{Error, Result};

/// An offset that is surely past the end of file. Used to indicate missing
/// shards.
pub const PAST_EOF: i64 = 1 << 62;

/// Computes the mindex: one big-endian i64 offset per shard, in shard order.
///
/// Contigs are expected in the same total order as the index, so once a
/// contig is absent every later one must be absent too; a present contig
/// after an absent one fails the whole build.
pub fn build<I: IntervalIndex>(
    positions: &[ShardStart],
    index: &I,
    shard_count: usize,
) -> Result<Vec<u8>> {
    if positions.len() != shard_count {
        return Err(Error::ShardCountMismatch {
            expected: shard_count,
            actual: positions.len(),
        });
    }

    let mut buf = Vec::with_capacity(shard_count * 8);
    let mut out_of_file = false;

    for start in positions {
        if !index.contains_contig(start.contig()) {
            // That contig isn't even in the index: emit the out-of-file
            // sentinel. No subsequent contig may be present.
            buf.extend_from_slice(&PAST_EOF.to_be_bytes());
            out_of_file = true;
            continue;
        }

        if out_of_file {
            return Err(Error::ContigGap(start.contig().to_string()));
        }

        let blocks = index.query(start.contig(), start.pos())?;
        let first = blocks.first().ok_or_else(|| Error::EmptyQuery {
            contig: start.contig().to_string(),
            pos: usize::from(start.pos()),
        })?;

        tracing::debug!(
            contig = start.contig(),
            block_start = first.start(),
            block_end = first.end(),
            "resolved shard offset"
        );

        buf.extend_from_slice(&(first.start() as i64).to_be_bytes());
    }

    tracing::debug!(shards = shard_count, bytes = buf.len(), "mindex computed");

    Ok(buf)
}
