//! ECS errors

use super::EntityId;

/// Errors returned by registry operations
///
/// A lookup that simply finds nothing is not an error: component reads
/// return `Option` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// The entity was never created or has been destroyed
    #[error("Invalid entity: {0}")]
    InvalidEntity(EntityId),

    /// More distinct component types than the mask can hold
    #[error("Component capacity exceeded: at most {max} component types can be registered")]
    CapacityExceeded {
        /// Mask width
        max: usize,
    },

    /// The component type has not been registered with the world
    #[error("Component type not registered: {0}")]
    UnregisteredComponent(&'static str),

    /// Every 64-bit entity id has been issued
    #[error("Entity ids exhausted")]
    EntityIdsExhausted,
}
