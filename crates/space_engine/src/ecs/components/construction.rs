//! Construction progress component

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Blueprint identifier
pub type BlueprintId = u32;

/// A structure being built from a blueprint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstructionComponent {
    /// Blueprint being built
    pub blueprint: BlueprintId,

    /// Fraction done, 0 - 1
    pub progress: f32,

    /// Set once progress reaches 1
    pub complete: bool,
}

impl Component for ConstructionComponent {}

impl ConstructionComponent {
    /// Start building a blueprint
    pub const fn new(blueprint: BlueprintId) -> Self {
        Self {
            blueprint,
            progress: 0.0,
            complete: false,
        }
    }

    /// Add progress, clamped to `[0, 1]`; returns whether construction is complete
    pub fn advance(&mut self, delta: f32) -> bool {
        self.progress = (self.progress + delta).clamp(0.0, 1.0);
        self.complete = self.progress >= 1.0;
        self.complete
    }
}
