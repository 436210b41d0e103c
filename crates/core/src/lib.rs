pub mod config;
pub mod document;
pub mod error;

pub use config::{ChunkingConfig, Config, IngestConfig};
pub use document::*;
pub use error::*;
