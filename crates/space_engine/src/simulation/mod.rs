//! World simulation state

pub mod chunk;

pub use chunk::{ChunkCoord, ChunkRuntime, ChunkSimState};
