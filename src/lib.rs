pub mod config;
pub mod error;
pub mod index;
pub mod mindex;
pub mod output;
pub mod positions;
pub mod reader;

pub use config::Config;
pub use error::{Error, Result};
pub use mindex::PAST_EOF;
