//! Chunk file header
//!
//! Every chunk file starts with a fixed 24 byte header:
//!
//! | offset | size | field             |
//! |--------|------|-------------------|
//! | 0      | 4    | magic (`"CHK1"`)  |
//! | 4      | 4    | version           |
//! | 8      | 8    | chunk id          |
//! | 16     | 4    | entity count      |
//! | 20     | 4    | component count   |
//!
//! Fields are written in host byte order.

use bytemuck::{Pod, Zeroable};

use crate::ecs::World;

/// Magic constant at the start of every chunk file
pub const CHUNK_MAGIC: u32 = 0x4348_4B31;

/// Header version written by this build
pub const CHUNK_FORMAT_VERSION: u32 = 1;

/// Chunk format errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkFormatError {
    /// Fewer bytes than a header
    #[error("Truncated chunk header: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Header size
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Magic constant mismatch
    #[error("Bad chunk magic: {0:#010x}")]
    BadMagic(u32),

    /// Version newer than this build understands
    #[error("Unsupported chunk format version: {0}")]
    UnsupportedVersion(u32),
}

/// Chunk file header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct ChunkHeader {
    /// [`CHUNK_MAGIC`] in a valid header
    pub magic: u32,
    /// Format version
    pub version: u32,
    /// Chunk identifier
    pub chunk_id: u64,
    /// Entities stored in the chunk
    pub entity_count: u32,
    /// Component records stored in the chunk
    pub component_count: u32,
}

impl ChunkHeader {
    /// Encoded size in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Create a header stamped with the magic and current version
    pub const fn new(chunk_id: u64, entity_count: u32, component_count: u32) -> Self {
        Self {
            magic: CHUNK_MAGIC,
            version: CHUNK_FORMAT_VERSION,
            chunk_id,
            entity_count,
            component_count,
        }
    }

    /// Header describing the contents of a world
    ///
    /// Counts beyond `u32::MAX` saturate.
    pub fn from_world(world: &World, chunk_id: u64) -> Self {
        let entity_count = u32::try_from(world.entity_count()).unwrap_or(u32::MAX);
        let component_count = u32::try_from(world.component_count()).unwrap_or(u32::MAX);
        Self::new(chunk_id, entity_count, component_count)
    }

    /// Whether the magic and version are ones this build accepts
    pub const fn is_valid(&self) -> bool {
        self.magic == CHUNK_MAGIC && self.version >= 1 && self.version <= CHUNK_FORMAT_VERSION
    }

    /// Encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decode and validate a header from the start of `bytes`
    pub fn read_from(bytes: &[u8]) -> Result<Self, ChunkFormatError> {
        let raw = bytes.get(..Self::SIZE).ok_or(ChunkFormatError::Truncated {
            expected: Self::SIZE,
            actual: bytes.len(),
        })?;
        let header: Self = bytemuck::pod_read_unaligned(raw);

        if header.magic != CHUNK_MAGIC {
            return Err(ChunkFormatError::BadMagic(header.magic));
        }
        if !header.is_valid() {
            return Err(ChunkFormatError::UnsupportedVersion(header.version));
        }
        Ok(header)
    }
}
