//! Component Storage
//!
//! One table per component type, keyed by entity id. The world holds the
//! tables behind [`ComponentStorage`] so it can purge an entity from every
//! table without knowing the concrete types, and downcasts to
//! [`TypedStorage<T>`] for typed access.

use std::any::Any;
use std::collections::HashMap;

use super::{Component, EntityId};

/// Type-erased view of a component table
pub trait ComponentStorage: Any {
    /// Drop the entity's entry, returning whether one existed
    fn erase(&mut self, entity: EntityId) -> bool;

    /// Whether the entity has an entry
    fn contains(&self, entity: EntityId) -> bool;

    /// Number of entries
    fn len(&self) -> usize;

    /// Whether the table is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Component type name, for diagnostics
    fn component_name(&self) -> &'static str;

    /// Upcast for downcasting to the typed table
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the typed table
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Strongly typed component table
#[derive(Debug)]
pub struct TypedStorage<T: Component> {
    components: HashMap<EntityId, T>,
}

impl<T: Component> TypedStorage<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(&mut self, entity: EntityId, component: T) -> Option<T> {
        self.components.insert(entity, component)
    }

    /// Remove and return the entity's component
    pub fn remove(&mut self, entity: EntityId) -> Option<T> {
        self.components.remove(&entity)
    }

    /// Shared access to the entity's component
    pub fn get(&self, entity: EntityId) -> Option<&T> {
        self.components.get(&entity)
    }

    /// Exclusive access to the entity's component
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut T> {
        self.components.get_mut(&entity)
    }

    /// Iterate over all entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.components.iter().map(|(&entity, component)| (entity, component))
    }
}

impl<T: Component> Default for TypedStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentStorage for TypedStorage<T> {
    fn erase(&mut self, entity: EntityId) -> bool {
        self.components.remove(&entity).is_some()
    }

    fn contains(&self, entity: EntityId) -> bool {
        self.components.contains_key(&entity)
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn component_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
