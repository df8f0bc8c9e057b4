//! Danger indicator.
//!
//! The indicator is a purely cosmetic visual whose uniform scale grows with
//! the danger level. Rooms without one simply skip the update.

use room_math::Transform;

/// Scale of the indicator at danger level 0.
pub const MIN_INDICATOR_SCALE: f32 = 0.1;

/// Scale of the indicator at danger level 1.
pub const MAX_INDICATOR_SCALE: f32 = 1.0;

/// Map a danger level to an indicator scale.
///
/// `level` is clamped to `[0, 1]` (NaN counts as 0) and mapped linearly onto
/// `[MIN_INDICATOR_SCALE, MAX_INDICATOR_SCALE]`.
#[must_use]
pub fn danger_scale(level: f32) -> f32 {
    let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
    MIN_INDICATOR_SCALE + (MAX_INDICATOR_SCALE - MIN_INDICATOR_SCALE) * level
}

/// An optional visual scaled by danger level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DangerIndicator {
    visual: Option<Transform>,
}

impl DangerIndicator {
    /// An indicator with no visual attached; updates are no-ops.
    #[must_use]
    pub fn none() -> Self {
        Self { visual: None }
    }

    /// An indicator driving `visual`.
    #[must_use]
    pub fn with_visual(visual: Transform) -> Self {
        Self {
            visual: Some(visual),
        }
    }

    /// Rescale the visual for `level`. Returns the applied scale, or `None`
    /// when there is no visual.
    pub fn update(&mut self, level: f32) -> Option<f32> {
        let visual = self.visual.as_mut()?;
        let scale = danger_scale(level);
        visual.set_uniform_scale(scale);
        Some(scale)
    }

    /// The visual's current transform.
    #[must_use]
    pub fn visual(&self) -> Option<&Transform> {
        self.visual.as_ref()
    }
}
