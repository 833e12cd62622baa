//! Power budget component

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Electrical generation and draw of a device or grid, in watts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerComponent {
    /// Watts generated
    pub generated: f32,

    /// Watts consumed
    pub consumed: f32,

    /// Whether the device is currently running
    pub powered: bool,
}

impl Component for PowerComponent {}

impl PowerComponent {
    /// Create a budget with the given generation and draw, initially unpowered
    pub const fn new(generated: f32, consumed: f32) -> Self {
        Self {
            generated,
            consumed,
            powered: false,
        }
    }

    /// Surplus (positive) or deficit (negative) in watts
    pub fn net(&self) -> f32 {
        self.generated - self.consumed
    }

    /// Recompute `powered`: there must be generation and no deficit
    pub fn update_powered(&mut self) -> bool {
        self.powered = self.generated > 0.0 && self.net() >= 0.0;
        self.powered
    }
}
