//! End-to-end registry scenarios using the engine components

use approx::assert_relative_eq;
use space_engine::prelude::*;

fn engine_world() -> World {
    let mut world = World::new();
    register_engine_components(&mut world).unwrap();
    world
}

#[test]
fn test_ship_with_transform_and_physics() {
    let mut world = engine_world();
    let ship = world.create_entity().unwrap();

    world
        .add_component(
            ship,
            TransformComponent::from_position_rotation(Vec3d::new(1.0, 2.0, 3.0), Quatd::identity()),
        )
        .unwrap();
    world
        .add_component(
            ship,
            PhysicsComponent {
                mass: 1000.0,
                is_static: false,
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(world.get_mask(ship).unwrap().count(), 2);

    let transform = world.get_component::<TransformComponent>(ship).unwrap();
    assert_relative_eq!(transform.position, Vec3d::new(1.0, 2.0, 3.0), epsilon = 1e-9);

    let physics = world.get_component::<PhysicsComponent>(ship).unwrap();
    assert_relative_eq!(physics.mass, 1000.0);
    assert!(!physics.is_static);
}

#[test]
fn test_entities_do_not_alias() {
    let mut world = engine_world();
    let first = world.create_entity().unwrap();
    let second = world.create_entity().unwrap();

    world
        .add_component(first, TransformComponent::from_position(Vec3d::new(10.0, 0.0, 0.0)))
        .unwrap();
    world
        .add_component(second, TransformComponent::from_position(Vec3d::new(20.0, 0.0, 0.0)))
        .unwrap();

    world
        .get_component_mut::<TransformComponent>(first)
        .unwrap()
        .translate(Vec3d::new(1.0, 0.0, 0.0));

    assert_relative_eq!(world.get_component::<TransformComponent>(first).unwrap().position.x, 11.0);
    assert_relative_eq!(world.get_component::<TransformComponent>(second).unwrap().position.x, 20.0);
}

#[test]
fn test_destroy_purges_every_component() {
    let mut world = engine_world();
    let keep = world.create_entity().unwrap();
    let doomed = world.create_entity().unwrap();

    world.add_component(keep, SurvivalComponent::default()).unwrap();
    world.add_component(doomed, SurvivalComponent::default()).unwrap();
    world.add_component(doomed, PowerComponent::new(100.0, 20.0)).unwrap();
    world.add_component(doomed, InventoryComponent::new()).unwrap();
    assert_eq!(world.component_count(), 4);

    assert!(world.destroy_entity(doomed));

    assert!(world.get_component::<SurvivalComponent>(doomed).is_none());
    assert!(world.get_component::<PowerComponent>(doomed).is_none());
    assert!(world.get_component::<InventoryComponent>(doomed).is_none());
    assert_eq!(world.entity_count(), 1);
    assert_eq!(world.entities().collect::<Vec<_>>(), vec![keep]);
    assert_eq!(world.component_count(), 1);
    assert!(world.get_component::<SurvivalComponent>(keep).is_some());
}

#[test]
fn test_mask_and_storage_stay_consistent() {
    let mut world = engine_world();
    let entities: Vec<EntityId> = (0..6).map(|_| world.create_entity().unwrap()).collect();

    for (i, &e) in entities.iter().enumerate() {
        if i % 2 == 0 {
            world.add_component(e, PowerComponent::default()).unwrap();
        }
        if i % 3 == 0 {
            world.add_component(e, DockingComponent::default()).unwrap();
        }
    }
    world.remove_component::<PowerComponent>(entities[2]).unwrap();
    world.remove_component::<DockingComponent>(entities[1]).unwrap();
    world.add_component(entities[5], PowerComponent::default()).unwrap();

    for &e in &entities {
        assert_eq!(
            world.has_component::<PowerComponent>(e).unwrap(),
            world.get_component::<PowerComponent>(e).is_some()
        );
        assert_eq!(
            world.has_component::<DockingComponent>(e).unwrap(),
            world.get_component::<DockingComponent>(e).is_some()
        );
    }
}

#[test]
fn test_mask_query_matches_supersets_only() {
    let mut world = engine_world();
    let station = world.create_entity().unwrap();
    let freighter = world.create_entity().unwrap();
    let debris = world.create_entity().unwrap();

    world.add_component(station, TransformComponent::default()).unwrap();
    world.add_component(station, PowerComponent::default()).unwrap();
    world.add_component(station, OwnershipComponent::new(3)).unwrap();

    world.add_component(freighter, TransformComponent::default()).unwrap();
    world.add_component(freighter, PowerComponent::default()).unwrap();
    world.add_component(freighter, DockingComponent::default()).unwrap();

    world.add_component(debris, TransformComponent::default()).unwrap();

    let transform = world.component_id::<TransformComponent>().unwrap();
    let power = world.component_id::<PowerComponent>().unwrap();

    let mut powered = world.entities_with_mask(ComponentMask::new().with(transform).with(power));
    powered.sort();
    assert_eq!(powered, vec![station, freighter]);

    let mut everything = world.entities_with_mask(ComponentMask::EMPTY);
    everything.sort();
    assert_eq!(everything, vec![station, freighter, debris]);

    assert_eq!(
        world.query().with::<PowerComponent>().with::<DockingComponent>().entities(),
        vec![freighter]
    );
}

#[test]
fn test_docking_relation_survives_target_destruction() {
    let mut world = engine_world();
    let station = world.create_entity().unwrap();
    let ship = world.create_entity().unwrap();

    let mut docking = DockingComponent::default();
    docking.dock(station);
    world.add_component(ship, docking).unwrap();

    world.destroy_entity(station);

    let target = world.get_component::<DockingComponent>(ship).unwrap().docked_to;
    assert_eq!(target, station);
    assert!(!world.has_entity(target));
}

#[test]
fn test_ids_strictly_increase_across_destroys() {
    let mut world = World::new();
    let mut last = EntityId::INVALID;
    for round in 0..50 {
        let e = world.create_entity().unwrap();
        assert!(e > last);
        assert_ne!(e, EntityId::INVALID);
        if round % 2 == 0 {
            let before = world.entity_count();
            world.destroy_entity(e);
            assert_eq!(world.entity_count(), before - 1);
        }
        last = e;
    }
    assert_eq!(world.entity_count(), 25);
}

#[test]
fn test_chunk_header_describes_world() {
    let mut world = engine_world();
    for _ in 0..3 {
        let e = world.create_entity().unwrap();
        world.add_component(e, TransformComponent::default()).unwrap();
    }

    let header = ChunkHeader::from_world(&world, 1);
    assert_eq!(header.magic, CHUNK_MAGIC);
    assert_eq!(header.entity_count, 3);
    assert_eq!(header.component_count, 3);
    assert_eq!(ChunkHeader::read_from(header.as_bytes()), Ok(header));
}
