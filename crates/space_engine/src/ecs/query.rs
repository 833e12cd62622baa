//! Query system for component access

use super::{Component, ComponentMask, EntityId, World};

/// Query for entities holding a set of component types
///
/// Built from [`World::query`]. Matching is a full scan of the live entities
/// testing each mask against the required bits.
#[derive(Debug, Clone, Copy)]
pub struct Query<'w> {
    world: &'w World,
    required: ComponentMask,
    /// Set when an unregistered type was requested; nothing can match
    unsatisfiable: bool,
}

impl<'w> Query<'w> {
    /// Create a query that matches every live entity
    pub const fn new(world: &'w World) -> Self {
        Self {
            world,
            required: ComponentMask::EMPTY,
            unsatisfiable: false,
        }
    }

    /// Require component type `T`
    #[must_use]
    pub fn with<T: Component>(mut self) -> Self {
        match self.world.component_id::<T>() {
            Some(id) => self.required.set(id),
            None => self.unsatisfiable = true,
        }
        self
    }

    /// Mask the query tests against, or `None` if it can never match
    pub const fn mask(&self) -> Option<ComponentMask> {
        if self.unsatisfiable {
            None
        } else {
            Some(self.required)
        }
    }

    /// Matching entities in unspecified order
    pub fn entities(&self) -> Vec<EntityId> {
        match self.mask() {
            Some(required) => self.world.entities_with_mask(required),
            None => Vec::new(),
        }
    }

    /// Number of matching entities
    pub fn count(&self) -> usize {
        self.entities().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Engine;
    impl Component for Engine {}

    struct Shield;
    impl Component for Shield {}

    struct Cloak;
    impl Component for Cloak {}

    #[test]
    fn test_query_matches_required_types() {
        let mut world = World::new();
        world.register_component::<Engine>().unwrap();
        world.register_component::<Shield>().unwrap();

        let fighter = world.create_entity().unwrap();
        world.add_component(fighter, Engine).unwrap();
        world.add_component(fighter, Shield).unwrap();

        let station = world.create_entity().unwrap();
        world.add_component(station, Shield).unwrap();

        assert_eq!(world.query().with::<Engine>().with::<Shield>().entities(), vec![fighter]);
        assert_eq!(world.query().with::<Shield>().count(), 2);
        assert_eq!(world.query().count(), 2);
    }

    #[test]
    fn test_unregistered_type_matches_nothing() {
        let mut world = World::new();
        world.register_component::<Engine>().unwrap();
        let e = world.create_entity().unwrap();
        world.add_component(e, Engine).unwrap();

        let query = world.query().with::<Engine>().with::<Cloak>();
        assert_eq!(query.mask(), None);
        assert!(query.entities().is_empty());
    }
}
