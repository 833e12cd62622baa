//! # Space Engine
//!
//! Core of a space simulation engine.
//!
//! ## Features
//!
//! - **ECS Registry**: Entities, typed component tables and mask-based queries
//! - **Double-Precision Math**: `f64` vectors and quaternions for space-scale coordinates
//! - **World Chunks**: Chunk file header and per-chunk simulation records
//! - **Configuration**: TOML/RON engine settings
//!
//! ## Quick Start
//!
//! ```rust
//! use space_engine::prelude::*;
//!
//! fn main() -> Result<(), EcsError> {
//!     let mut world = World::new();
//!     register_engine_components(&mut world)?;
//!
//!     let ship = world.create_entity()?;
//!     world.add_component(ship, TransformComponent::from_position(Vec3d::new(1.0, 2.0, 3.0)))?;
//!     world.add_component(ship, PhysicsComponent::with_mass(1000.0))?;
//!
//!     let moving: Vec<EntityId> = world
//!         .query()
//!         .with::<TransformComponent>()
//!         .with::<PhysicsComponent>()
//!         .entities();
//!     assert_eq!(moving, vec![ship]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod io;
pub mod simulation;
pub mod config;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::{
            logging::LogLevel,
            math::{Quatd, QuatdExt, Vec3d, Vec3dExt},
        },
        ecs::{
            Component, ComponentMask, ComponentTypeId, EcsError, EntityId, Query, World,
            components::{
                register_engine_components, ConstructionComponent, DockingComponent,
                InventoryComponent, OwnershipComponent, PhysicsComponent, PowerComponent,
                SurvivalComponent, TransformComponent,
            },
        },
        io::chunk_format::{ChunkHeader, CHUNK_MAGIC},
        simulation::chunk::{ChunkCoord, ChunkRuntime, ChunkSimState},
        config::{Config, EngineConfig},
    };
}
