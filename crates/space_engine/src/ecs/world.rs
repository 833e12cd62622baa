//! ECS World implementation

use std::any::type_name;
use std::collections::HashMap;

use log::{debug, trace, warn};

use super::storage::{ComponentStorage, TypedStorage};
use super::{
    Component, ComponentMask, ComponentRegistry, ComponentTypeId, EcsError, EntityAllocator,
    EntityId, Query,
};

/// ECS World containing all entities and components
///
/// Every mutating call keeps two things in lockstep: an entity's mask bit for
/// a component type is set exactly when that type's table has an entry for
/// the entity.
pub struct World {
    allocator: EntityAllocator,
    masks: HashMap<EntityId, ComponentMask>,
    registry: ComponentRegistry,
    /// Indexed by [`ComponentTypeId::index`]
    storages: Vec<Box<dyn ComponentStorage>>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            masks: HashMap::new(),
            registry: ComponentRegistry::new(),
            storages: Vec::new(),
        }
    }

    /// Create a world that can hold `capacity` entities before rehashing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            masks: HashMap::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Register a component type and create its table
    ///
    /// Idempotent. Fails once [`MAX_COMPONENTS`](super::MAX_COMPONENTS)
    /// distinct types are registered; treat that as a startup error.
    pub fn register_component<T: Component>(&mut self) -> Result<ComponentTypeId, EcsError> {
        if let Some(id) = self.registry.id_of::<T>() {
            return Ok(id);
        }
        let id = self.registry.register::<T>().map_err(|err| {
            warn!("Rejected component type {}: {err}", type_name::<T>());
            err
        })?;
        debug_assert_eq!(id.index(), self.storages.len());
        self.storages.push(Box::new(TypedStorage::<T>::new()));
        debug!("Registered component {} in slot {}", type_name::<T>(), id.index());
        Ok(id)
    }

    /// Slot of a registered component type
    pub fn component_id<T: Component>(&self) -> Option<ComponentTypeId> {
        self.registry.id_of::<T>()
    }

    /// Registered component types
    pub fn components(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Create a new entity with an empty mask
    pub fn create_entity(&mut self) -> Result<EntityId, EcsError> {
        let entity = self.allocator.allocate().ok_or(EcsError::EntityIdsExhausted)?;
        self.masks.insert(entity, ComponentMask::EMPTY);
        trace!("Created entity {entity}");
        Ok(entity)
    }

    /// Whether the entity is live
    pub fn has_entity(&self, entity: EntityId) -> bool {
        self.masks.contains_key(&entity)
    }

    /// Destroy an entity and every component attached to it
    ///
    /// Returns `false` if the entity was not live; that is not an error.
    pub fn destroy_entity(&mut self, entity: EntityId) -> bool {
        let Some(mask) = self.masks.remove(&entity) else {
            return false;
        };
        for id in mask.iter() {
            self.storages[id.index()].erase(entity);
        }
        trace!("Destroyed entity {entity} ({} components)", mask.count());
        true
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.masks.len()
    }

    /// Total component instances across all tables
    pub fn component_count(&self) -> usize {
        self.storages.iter().map(|storage| storage.len()).sum()
    }

    /// Iterate over live entities in unspecified order
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.masks.keys().copied()
    }

    /// Attach a component, overwriting any existing one of the same type
    pub fn add_component<T: Component>(&mut self, entity: EntityId, component: T) -> Result<(), EcsError> {
        let id = self
            .registry
            .id_of::<T>()
            .ok_or(EcsError::UnregisteredComponent(type_name::<T>()))?;
        let mask = self.masks.get_mut(&entity).ok_or(EcsError::InvalidEntity(entity))?;

        let storage = Self::typed_mut::<T>(&mut self.storages, id)?;
        storage.insert(entity, component);
        mask.set(id);
        Ok(())
    }

    /// Detach a component, returning it if the entity had one
    pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> Result<Option<T>, EcsError> {
        let mask = self.masks.get_mut(&entity).ok_or(EcsError::InvalidEntity(entity))?;
        let Some(id) = self.registry.id_of::<T>() else {
            return Ok(None);
        };

        let removed = Self::typed_mut::<T>(&mut self.storages, id)?.remove(entity);
        mask.clear(id);
        Ok(removed)
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: EntityId) -> Option<&T> {
        let id = self.registry.id_of::<T>()?;
        self.storages
            .get(id.index())?
            .as_any()
            .downcast_ref::<TypedStorage<T>>()?
            .get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        let id = self.registry.id_of::<T>()?;
        self.storages
            .get_mut(id.index())?
            .as_any_mut()
            .downcast_mut::<TypedStorage<T>>()?
            .get_mut(entity)
    }

    /// Whether the entity has a component of type `T`
    ///
    /// Fails for entities that are not live. An unregistered type is simply
    /// absent.
    pub fn has_component<T: Component>(&self, entity: EntityId) -> Result<bool, EcsError> {
        let mask = self.get_mask(entity)?;
        Ok(self
            .registry
            .id_of::<T>()
            .is_some_and(|id| mask.contains(id)))
    }

    /// The entity's component mask
    pub fn get_mask(&self, entity: EntityId) -> Result<ComponentMask, EcsError> {
        self.masks
            .get(&entity)
            .copied()
            .ok_or(EcsError::InvalidEntity(entity))
    }

    /// All live entities whose mask contains every bit of `required`
    ///
    /// An empty mask matches every live entity. Order is unspecified.
    pub fn entities_with_mask(&self, required: ComponentMask) -> Vec<EntityId> {
        self.masks
            .iter()
            .filter(|(_, mask)| mask.is_superset_of(required))
            .map(|(&entity, _)| entity)
            .collect()
    }

    /// Start a query over component types
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }

    /// Typed table of a registered component type
    pub fn storage<T: Component>(&self) -> Option<&TypedStorage<T>> {
        let id = self.registry.id_of::<T>()?;
        self.storages
            .get(id.index())?
            .as_any()
            .downcast_ref::<TypedStorage<T>>()
    }

    fn typed_mut<T: Component>(
        storages: &mut [Box<dyn ComponentStorage>],
        id: ComponentTypeId,
    ) -> Result<&mut TypedStorage<T>, EcsError> {
        storages
            .get_mut(id.index())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<TypedStorage<T>>())
            .ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.masks.len())
            .field("component_types", &self.registry.len())
            .field("last_issued", &self.allocator.last_issued())
            .finish()
    }
}
