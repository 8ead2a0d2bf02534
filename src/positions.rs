use crate::{Error, Result};
use noodles::core::Position;
use std::path::Path;

/// The starting genomic coordinate of one shard.
///
/// Shard index is implicit: the first non-blank line of the position listing
/// is shard 0, the next is shard 1, and so on. Lines may carry extra
/// whitespace-delimited fields (the listing format appends interval ends);
/// only the leading contig and position are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardStart {
    contig: String,
    pos: Position,
}

impl ShardStart {
    pub fn new(contig: impl Into<String>, pos: Position) -> Self {
        Self {
            contig: contig.into(),
            pos,
        }
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Parses the position listing, preserving input order.
    ///
    /// Any malformed line fails the whole parse; there are no partial results.
    pub fn from_file(path: &Path) -> Result<Vec<ShardStart>> {
        let text = std::fs::read_to_string(path)?;
        let mut starts = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            starts.push(Self::parse_line(line).map_err(|msg| {
                Error::Parse(format!("{}:{}: {}", path.display(), lineno + 1, msg))
            })?);
        }

        Ok(starts)
    }

    fn parse_line(line: &str) -> std::result::Result<ShardStart, String> {
        let mut fields = line.split_whitespace();

        let contig = fields
            .next()
            .ok_or_else(|| "missing contig".to_string())?;
        let pos = fields
            .next()
            .ok_or_else(|| format!("missing position after contig {:?}", contig))?;

        // Position is 1-based; noodles rejects 0 for us.
        let pos: Position = pos
            .parse()
            .map_err(|e| format!("invalid position {:?}: {}", pos, e))?;

        Ok(ShardStart::new(contig, pos))
    }
}
