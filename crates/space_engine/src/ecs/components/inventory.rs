//! Inventory component

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Resource type identifier
pub type ResourceId = u32;

/// A stack of one resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySlot {
    /// Resource type
    pub resource: ResourceId,

    /// Units held
    pub quantity: u32,
}

impl InventorySlot {
    /// Create a slot
    pub const fn new(resource: ResourceId, quantity: u32) -> Self {
        Self { resource, quantity }
    }
}

/// Ordered list of resource stacks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryComponent {
    /// Stacks in insertion order
    pub slots: Vec<InventorySlot>,
}

impl Component for InventoryComponent {}

impl InventoryComponent {
    /// Create an empty inventory
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Add units, merging into the first stack of the same resource
    ///
    /// Quantities saturate at `u32::MAX`.
    pub fn add(&mut self, resource: ResourceId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.slots.iter_mut().find(|slot| slot.resource == resource) {
            Some(slot) => slot.quantity = slot.quantity.saturating_add(quantity),
            None => self.slots.push(InventorySlot::new(resource, quantity)),
        }
    }

    /// Take up to `quantity` units, returning how many were taken
    ///
    /// Emptied stacks are dropped.
    pub fn remove(&mut self, resource: ResourceId, quantity: u32) -> u32 {
        let mut taken = 0;
        for slot in self.slots.iter_mut().filter(|slot| slot.resource == resource) {
            let take = slot.quantity.min(quantity - taken);
            slot.quantity -= take;
            taken += take;
            if taken == quantity {
                break;
            }
        }
        self.slots.retain(|slot| slot.quantity > 0);
        taken
    }

    /// Total units of a resource across all stacks
    pub fn quantity_of(&self, resource: ResourceId) -> u64 {
        self.slots
            .iter()
            .filter(|slot| slot.resource == resource)
            .map(|slot| u64::from(slot.quantity))
            .sum()
    }

    /// Whether no stacks are held
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
