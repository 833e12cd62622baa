//! Docking state component

use serde::{Deserialize, Serialize};

use crate::ecs::{Component, EntityId};

/// Which entity a ship is docked to
///
/// The target is stored by id; it may have been destroyed since, so resolve
/// it through the world before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DockingComponent {
    /// Docked target, [`EntityId::INVALID`] when free
    pub docked_to: EntityId,

    /// Docking clamps engaged
    pub locked: bool,
}

impl Component for DockingComponent {}

impl DockingComponent {
    /// Dock to a target and engage the clamps
    pub fn dock(&mut self, target: EntityId) {
        self.docked_to = target;
        self.locked = target.is_valid();
    }

    /// Release the clamps and clear the target, returning the previous target
    pub fn undock(&mut self) -> Option<EntityId> {
        let previous = std::mem::take(&mut self.docked_to);
        self.locked = false;
        previous.is_valid().then_some(previous)
    }

    /// Whether docked to anything
    pub const fn is_docked(&self) -> bool {
        self.docked_to.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docking_default() {
        let docking = DockingComponent::default();
        assert_eq!(docking.docked_to, EntityId::INVALID);
        assert!(!docking.locked);
        assert!(!docking.is_docked());
    }

    #[test]
    fn test_dock_and_undock() {
        let station = EntityId::from_raw(4);
        let mut docking = DockingComponent::default();

        docking.dock(station);
        assert!(docking.is_docked());
        assert!(docking.locked);

        assert_eq!(docking.undock(), Some(station));
        assert!(!docking.is_docked());
        assert!(!docking.locked);
        assert_eq!(docking.undock(), None);
    }
}
