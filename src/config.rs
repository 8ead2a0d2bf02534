use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mindexr")]
#[command(about = "Generates a per-shard mini-index of file offsets")]
pub struct Config {
    /// File listing the shards, one per line: <contig> <position>
    pub position_list: PathBuf,

    /// Tabix index over the record file
    pub index_file: PathBuf,

    /// Target number of shards; must match the number of lines in position_list
    pub shard_count: usize,

    /// Destination for the mindex: shard_count 8-byte offsets
    pub output_file: PathBuf,
}
