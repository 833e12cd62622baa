//! Chunk runtime records
//!
//! A chunk is a spatial partition of the world. Each loaded chunk carries the
//! fidelity it is currently simulated at; deciding when to move between
//! fidelities belongs to the streaming layer, not to these records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer coordinate of a chunk in the chunk grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// Grid x
    pub x: i32,
    /// Grid y
    pub y: i32,
    /// Grid z
    pub z: i32,
}

impl ChunkCoord {
    /// Create a coordinate
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Simulation fidelity of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChunkSimState {
    /// Every system runs at full rate
    Full,
    /// Coarse, aggregated simulation
    LowFidelity,
    /// Not in memory
    #[default]
    Unloaded,
}

/// Runtime record of one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChunkRuntime {
    /// Chunk identifier, matches the chunk file header
    pub id: u64,
    /// Grid coordinate
    pub coord: ChunkCoord,
    /// Current fidelity
    pub state: ChunkSimState,
}

impl ChunkRuntime {
    /// Record for an unloaded chunk
    pub const fn new(id: u64, coord: ChunkCoord) -> Self {
        Self {
            id,
            coord,
            state: ChunkSimState::Unloaded,
        }
    }

    /// Whether the chunk is in memory at any fidelity
    pub const fn is_loaded(&self) -> bool {
        !matches!(self.state, ChunkSimState::Unloaded)
    }
}
