//! Space engine demo
//!
//! Spawns a ship into a fresh world and reports what the registry holds.
//! Reads `space_demo.toml` from the working directory when present.

use space_engine::config::{Config, EngineConfig};
use space_engine::ecs::components::{register_engine_components, PhysicsComponent, TransformComponent};
use space_engine::ecs::World;
use space_engine::foundation::logging;
use space_engine::foundation::math::{Quatd, Vec3d};

const CONFIG_PATH: &str = "space_demo.toml";
const SHIP_MASS_KG: f64 = 1000.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::load_or_default(CONFIG_PATH)?;
    logging::init_with_level(config.logging.level);

    log::info!("Space engine starting...");

    let mut world = World::with_capacity(config.world.initial_capacity);
    register_engine_components(&mut world)?;

    // Ship with a transform at the origin and a 1000 kg rigid body
    let ship = world.create_entity()?;
    world.add_component(
        ship,
        TransformComponent::from_position_rotation(Vec3d::zeros(), Quatd::identity()),
    )?;
    world.add_component(ship, PhysicsComponent::with_mass(SHIP_MASS_KG))?;

    log::info!("Ship entity created (ID: {})", ship.id());

    if let (Some(transform), Some(physics)) = (
        world.get_component::<TransformComponent>(ship),
        world.get_component::<PhysicsComponent>(ship),
    ) {
        let p = transform.position;
        log::info!("Ship position: ({:.6}, {:.6}, {:.6})", p.x, p.y, p.z);
        log::info!("Ship mass: {:.6} kg", physics.mass);
    }

    log::debug!("Ship mask: {:?}", world.get_mask(ship)?);
    log::info!("Space engine initialized. Entities: {}", world.entity_count());

    Ok(())
}
