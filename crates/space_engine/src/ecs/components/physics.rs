//! Rigid body kinematics component

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::Vec3d;

/// Linear and angular velocity of a rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsComponent {
    /// Linear velocity in meters per second
    pub velocity: Vec3d,

    /// Angular velocity in radians per second
    pub angular_velocity: Vec3d,

    /// Mass in kilograms
    pub mass: f64,

    /// Static bodies are never moved by the simulation
    pub is_static: bool,
}

impl Component for PhysicsComponent {}

impl Default for PhysicsComponent {
    fn default() -> Self {
        Self {
            velocity: Vec3d::zeros(),
            angular_velocity: Vec3d::zeros(),
            mass: 1.0,
            is_static: false,
        }
    }
}

impl PhysicsComponent {
    /// Create a body at rest with the given mass
    pub fn with_mass(mass: f64) -> Self {
        Self {
            mass,
            ..Default::default()
        }
    }

    /// Create an immovable body
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Default::default()
        }
    }

    /// Builder pattern: Set linear velocity
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec3d) -> Self {
        self.velocity = velocity;
        self
    }

    /// Linear momentum, `m * v`
    pub fn momentum(&self) -> Vec3d {
        self.velocity * self.mass
    }

    /// Translational kinetic energy, `½ m |v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}
