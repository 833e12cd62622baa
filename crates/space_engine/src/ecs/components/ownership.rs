//! Faction ownership and access control

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Faction identifier
pub type FactionId = u32;

bitflags! {
    /// What non-owners may do with an owned entity
    ///
    /// Stored as a raw byte; undefined bits are preserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AccessFlags: u8 {
        /// Board or enter
        const ENTER = 1 << 0;
        /// Operate controls and machinery
        const OPERATE = 1 << 1;
        /// Take from or put into storage
        const TRADE = 1 << 2;
        /// Dock against it
        const DOCK = 1 << 3;
        /// Build onto or deconstruct
        const MODIFY = 1 << 4;
    }
}

/// Owning faction and access granted to others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnershipComponent {
    /// Owning faction, 0 for unowned
    pub owner: FactionId,

    /// Access granted to other factions
    pub access: AccessFlags,
}

impl Component for OwnershipComponent {}

impl OwnershipComponent {
    /// Create ownership with no access for others
    pub const fn new(owner: FactionId) -> Self {
        Self {
            owner,
            access: AccessFlags::empty(),
        }
    }

    /// Builder pattern: Set access flags
    #[must_use]
    pub const fn with_access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    /// Whether `faction` may do everything in `requested`
    ///
    /// The owner is always allowed.
    pub const fn grants(&self, faction: FactionId, requested: AccessFlags) -> bool {
        faction == self.owner || self.access.contains(requested)
    }

    /// Raw access byte
    pub const fn access_mask(&self) -> u8 {
        self.access.bits()
    }
}
