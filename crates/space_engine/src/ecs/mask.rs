//! Fixed-width component membership mask

use std::fmt;
use std::ops::{BitAnd, BitOr};

use super::ComponentTypeId;

/// Upper bound on distinct registered component types
pub const MAX_COMPONENTS: usize = 64;

/// Bitset recording which component types an entity has
///
/// Bit `i` is set when the entity holds a component whose
/// [`ComponentTypeId`] slot is `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentMask {
    bits: u64,
}

impl ComponentMask {
    /// Mask with no bits set
    pub const EMPTY: Self = Self { bits: 0 };

    /// Create an empty mask
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Create a mask from raw bits
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Raw bits
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set the bit for a component type
    pub fn set(&mut self, id: ComponentTypeId) {
        self.bits |= 1 << id.index();
    }

    /// Clear the bit for a component type
    pub fn clear(&mut self, id: ComponentTypeId) {
        self.bits &= !(1 << id.index());
    }

    /// Builder form of [`ComponentMask::set`]
    #[must_use]
    pub fn with(mut self, id: ComponentTypeId) -> Self {
        self.set(id);
        self
    }

    /// Whether the bit for a component type is set
    pub const fn contains(self, id: ComponentTypeId) -> bool {
        self.bits & (1 << id.index()) != 0
    }

    /// Number of bits set
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Whether no bits are set
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// `(self & required) == required`
    pub const fn is_superset_of(self, required: Self) -> bool {
        self.bits & required.bits == required.bits
    }

    /// Slots of all set bits, lowest first
    pub fn iter(self) -> impl Iterator<Item = ComponentTypeId> {
        let bits = self.bits;
        (0..MAX_COMPONENTS)
            .filter(move |&i| bits & (1 << i) != 0)
            .map(ComponentTypeId::from_index)
    }
}

impl BitAnd for ComponentMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self { bits: self.bits & rhs.bits }
    }
}

impl BitOr for ComponentMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self { bits: self.bits | rhs.bits }
    }
}

impl fmt::Debug for ComponentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentMask({:#018x})", self.bits)
    }
}
