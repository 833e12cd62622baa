//! Life support stats for crew and creatures

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Upper bound for oxygen and health
pub const SURVIVAL_STAT_MAX: f32 = 100.0;

/// Survival stats
///
/// Fields are not validated on write; call [`SurvivalComponent::clamped`]
/// after applying deltas if the bounds matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalComponent {
    /// Breathable oxygen, 0 - 100
    pub oxygen: f32,

    /// Body temperature in degrees Celsius
    pub temperature: f32,

    /// Accumulated radiation dose
    pub radiation: f32,

    /// Health, 0 - 100
    pub health: f32,
}

impl Component for SurvivalComponent {}

impl Default for SurvivalComponent {
    fn default() -> Self {
        Self {
            oxygen: SURVIVAL_STAT_MAX,
            temperature: 37.0,
            radiation: 0.0,
            health: SURVIVAL_STAT_MAX,
        }
    }
}

impl SurvivalComponent {
    /// Copy with oxygen and health in `[0, 100]` and radiation non-negative
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            oxygen: self.oxygen.clamp(0.0, SURVIVAL_STAT_MAX),
            temperature: self.temperature,
            radiation: self.radiation.max(0.0),
            health: self.health.clamp(0.0, SURVIVAL_STAT_MAX),
        }
    }

    /// Whether health is above zero
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
