//! Component trait and component type registration

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use super::{EcsError, MAX_COMPONENTS};

/// Marker trait for components
///
/// Components are plain data. Relations to other entities are stored as
/// [`EntityId`](super::EntityId) values, never as references.
pub trait Component: 'static {}

/// Slot of a registered component type within a [`ComponentMask`](super::ComponentMask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentTypeId(u8);

impl ComponentTypeId {
    /// Slot for a mask bit index. `index` must be below [`MAX_COMPONENTS`].
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < MAX_COMPONENTS);
        Self(index as u8)
    }

    /// Bit index of this slot
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: ComponentTypeId,
    name: &'static str,
}

/// Assigns mask slots to component types
///
/// Slots are handed out in registration order, so two registries that
/// register the same types in the same order agree on every slot.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    by_type: HashMap<TypeId, Registration>,
    names: Vec<&'static str>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`, returning its slot
    ///
    /// Registering an already known type returns the existing slot.
    pub fn register<T: Component>(&mut self) -> Result<ComponentTypeId, EcsError> {
        if let Some(registration) = self.by_type.get(&TypeId::of::<T>()) {
            return Ok(registration.id);
        }
        if self.names.len() >= MAX_COMPONENTS {
            return Err(EcsError::CapacityExceeded { max: MAX_COMPONENTS });
        }

        let registration = Registration {
            id: ComponentTypeId::from_index(self.names.len()),
            name: type_name::<T>(),
        };
        self.by_type.insert(TypeId::of::<T>(), registration);
        self.names.push(registration.name);
        Ok(registration.id)
    }

    /// Slot of `T` if registered
    pub fn id_of<T: Component>(&self) -> Option<ComponentTypeId> {
        self.by_type.get(&TypeId::of::<T>()).map(|r| r.id)
    }

    /// Type name registered at a slot
    pub fn name_of(&self, id: ComponentTypeId) -> Option<&'static str> {
        self.names.get(id.index()).copied()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
