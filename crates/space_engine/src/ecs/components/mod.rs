//! ECS Components module
//!
//! Engine components are plain data. Cross-entity relations are stored as
//! [`EntityId`](crate::ecs::EntityId) values.

pub mod transform;
pub mod physics;
pub mod survival;
pub mod power;
pub mod inventory;
pub mod ownership;
pub mod construction;
pub mod docking;

pub use transform::TransformComponent;
pub use physics::PhysicsComponent;
pub use survival::SurvivalComponent;
pub use power::PowerComponent;
pub use inventory::{InventoryComponent, InventorySlot, ResourceId};
pub use ownership::{AccessFlags, FactionId, OwnershipComponent};
pub use construction::{BlueprintId, ConstructionComponent};
pub use docking::DockingComponent;

use crate::ecs::{EcsError, World};

/// Register every engine component with a world
///
/// Registration order is fixed, so every world set up this way assigns the
/// same mask slots.
pub fn register_engine_components(world: &mut World) -> Result<(), EcsError> {
    world.register_component::<TransformComponent>()?;
    world.register_component::<PhysicsComponent>()?;
    world.register_component::<SurvivalComponent>()?;
    world.register_component::<PowerComponent>()?;
    world.register_component::<InventoryComponent>()?;
    world.register_component::<OwnershipComponent>()?;
    world.register_component::<ConstructionComponent>()?;
    world.register_component::<DockingComponent>()?;
    Ok(())
}
