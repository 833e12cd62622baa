//! Transform component for the ECS system

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::{Quatd, QuatdExt, Vec3d};

/// Position and orientation in world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformComponent {
    /// World space position in meters
    pub position: Vec3d,

    /// World space rotation
    pub rotation: Quatd,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3d::zeros(),
            rotation: Quatd::identity(),
        }
    }
}

impl TransformComponent {
    /// Create identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    pub fn from_position(position: Vec3d) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create from position and rotation
    pub const fn from_position_rotation(position: Vec3d, rotation: Quatd) -> Self {
        Self { position, rotation }
    }

    /// Builder pattern: Set position
    #[must_use]
    pub fn with_position(mut self, position: Vec3d) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set rotation
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quatd) -> Self {
        self.rotation = rotation;
        self
    }

    /// Move by a world space offset
    pub fn translate(&mut self, offset: Vec3d) {
        self.position += offset;
    }

    /// Map a point from local space into world space
    pub fn transform_point(&self, local: &Vec3d) -> Vec3d {
        self.position + self.rotation.normalized_or_identity().rotate(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_transform_identity() {
        let transform = TransformComponent::identity();

        assert_eq!(transform.position, Vec3d::zeros());
        assert_relative_eq!(transform.rotation.w, 1.0, epsilon = EPSILON);
        assert_eq!(transform.rotation, Quatd::identity());
    }

    #[test]
    fn test_transform_from_position() {
        let position = Vec3d::new(1.0, 2.0, 3.0);
        let transform = TransformComponent::from_position(position);

        assert_eq!(transform.position, position);
        assert_eq!(transform.rotation, Quatd::identity());
    }

    #[test]
    fn test_transform_point() {
        let half = std::f64::consts::FRAC_PI_4;
        let transform = TransformComponent::identity()
            .with_position(Vec3d::new(10.0, 0.0, 0.0))
            .with_rotation(Quatd::new(half.cos(), 0.0, 0.0, half.sin()));

        let world = transform.transform_point(&Vec3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(world, Vec3d::new(10.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_translate() {
        let mut transform = TransformComponent::from_position(Vec3d::new(1.0, 1.0, 1.0));
        transform.translate(Vec3d::new(0.5, -1.0, 2.0));
        assert_eq!(transform.position, Vec3d::new(1.5, 0.0, 3.0));
    }
}
