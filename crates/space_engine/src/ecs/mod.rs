//! Entity-Component-System implementation
//!
//! The [`World`] is the registry: it allocates entity ids, owns one typed
//! table per registered component type, and keeps a [`ComponentMask`] per
//! live entity so multi-component queries are a bitwise test.
//!
//! The registry is single-threaded and does no internal locking. Wrap it in
//! a mutex or keep it on one thread if it has to be shared.

pub mod world;
pub mod entity;
pub mod component;
pub mod mask;
pub mod storage;
pub mod query;
pub mod error;
pub mod components;

pub use world::World;
pub use entity::{EntityAllocator, EntityId};
pub use component::{Component, ComponentRegistry, ComponentTypeId};
pub use mask::{ComponentMask, MAX_COMPONENTS};
pub use query::Query;
pub use error::EcsError;
