//! On-disk formats

pub mod chunk_format;

pub use chunk_format::{ChunkFormatError, ChunkHeader, CHUNK_FORMAT_VERSION, CHUNK_MAGIC};
