//! Entity implementation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity identifier
///
/// Ids are issued in strictly increasing order starting at 1 and are never
/// reused within a process. [`EntityId::INVALID`] is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Sentinel that never refers to a live entity
    pub const INVALID: Self = Self(0);

    /// Wrap a raw id, e.g. one read back from a chunk file
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Whether this is anything other than the invalid sentinel
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic entity id source
#[derive(Debug, Default)]
pub struct EntityAllocator {
    last: u64,
}

impl EntityAllocator {
    /// Create an allocator that has issued nothing yet
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Issue the next id, or `None` once the 64-bit space is used up
    pub fn allocate(&mut self) -> Option<EntityId> {
        let next = self.last.checked_add(1)?;
        self.last = next;
        Some(EntityId(next))
    }

    /// The most recently issued id, or [`EntityId::INVALID`] if none
    pub const fn last_issued(&self) -> EntityId {
        EntityId(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase_and_skip_invalid() {
        let mut allocator = EntityAllocator::new();
        let mut previous = EntityId::INVALID;
        for _ in 0..1000 {
            let id = allocator.allocate().unwrap();
            assert!(id.is_valid());
            assert!(id > previous);
            previous = id;
        }
        assert_eq!(allocator.last_issued(), previous);
    }

    #[test]
    fn test_first_id_is_one() {
        let mut allocator = EntityAllocator::new();
        assert_eq!(allocator.allocate(), Some(EntityId::from_raw(1)));
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let mut allocator = EntityAllocator { last: u64::MAX - 1 };
        assert_eq!(allocator.allocate(), Some(EntityId::from_raw(u64::MAX)));
        assert_eq!(allocator.allocate(), None);
        assert_eq!(allocator.last_issued(), EntityId::from_raw(u64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityId::from_raw(42).to_string(), "#42");
        assert!(!EntityId::default().is_valid());
    }
}
