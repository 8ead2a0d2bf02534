pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid position listing: {0}")]
    Parse(String),

    #[error("expected {expected} entries in position_list, but got {actual}")]
    ShardCountMismatch { expected: usize, actual: usize },

    #[error("gap in the index, this shouldn't happen! Contig: {0}")]
    ContigGap(String),

    #[error("index returned no blocks for {contig}:{pos}")]
    EmptyQuery { contig: String, pos: usize },

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
