//! Companion mindex reader.
//!
//! Downstream shard workers look offsets up by shard index, in no particular
//! order and possibly repeatedly, so entries are fetched on demand and cached.

use crate::mindex::PAST_EOF;
use crate::{Error, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

pub struct Mindex {
    file: File,
    cache: Vec<Option<i64>>,
}

impl Mindex {
    /// Opens a mindex file. Its length must be a whole number of 8-byte
    /// entries.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        if len % 8 != 0 {
            return Err(Error::InvalidIndex(format!(
                "{}: length {} is not a multiple of 8",
                path.display(),
                len
            )));
        }

        Ok(Self {
            file,
            cache: vec![None; (len / 8) as usize],
        })
    }

    /// Number of shards in the mindex.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The offset for the given shard.
    pub fn get(&mut self, shard: usize) -> Result<i64> {
        if shard >= self.cache.len() {
            return Err(Error::InvalidIndex(format!(
                "shard {} out of range (mindex has {} entries)",
                shard,
                self.cache.len()
            )));
        }

        if let Some(offset) = self.cache[shard] {
            return Ok(offset);
        }

        self.file.seek(SeekFrom::Start(shard as u64 * 8))?;
        let mut bytes = [0u8; 8];
        self.file.read_exact(&mut bytes)?;

        let offset = i64::from_be_bytes(bytes);
        self.cache[shard] = Some(offset);
        Ok(offset)
    }

    /// Whether the shard's contig has no data in the underlying file.
    pub fn is_past_eof(&mut self, shard: usize) -> Result<bool> {
        Ok(self.get(shard)? == PAST_EOF)
    }
}
