//! Margin configuration.

use room_model::Settings;
use room_model::settings::{HORIZONTAL_ROOM_MARGIN, MARGIN_DOOR_ENTRANCE, SCREEN_SIZE_HORIZONTAL};
use serde::{Deserialize, Serialize};

use crate::error::BoundsError;

/// The three buffer distances applied to a room's raw walls.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    /// Distance a character keeps from each wall.
    pub physical: f32,
    /// Distance the camera centre keeps from each wall.
    pub camera: f32,
    /// How close a character must be to a door's position to use it.
    pub door_entrance: f32,
}

impl Margins {
    /// Create margins from explicit values.
    #[must_use]
    pub fn new(physical: f32, camera: f32, door_entrance: f32) -> Self {
        Self {
            physical,
            camera,
            door_entrance,
        }
    }

    /// Read margins from settings.
    ///
    /// The camera margin is half of `SCREEN_SIZE_HORIZONTAL`: the camera is
    /// centred on the screen, so its centre must stay half a screen away
    /// from each wall.
    pub fn from_settings(settings: &impl Settings) -> Result<Self, BoundsError> {
        let margins = Self {
            physical: settings.require(HORIZONTAL_ROOM_MARGIN)?,
            camera: settings.require(SCREEN_SIZE_HORIZONTAL)? / 2.0,
            door_entrance: settings.require(MARGIN_DOOR_ENTRANCE)?,
        };
        margins.validate()?;
        Ok(margins)
    }

    /// Override the physical margin.
    #[must_use]
    pub fn with_physical(mut self, margin: f32) -> Self {
        self.physical = margin;
        self
    }

    /// Override the camera margin.
    #[must_use]
    pub fn with_camera(mut self, margin: f32) -> Self {
        self.camera = margin;
        self
    }

    /// Override the door-entrance margin.
    #[must_use]
    pub fn with_door_entrance(mut self, margin: f32) -> Self {
        self.door_entrance = margin;
        self
    }

    /// Check every margin is finite and non-negative.
    pub fn validate(&self) -> Result<(), BoundsError> {
        for (name, value) in [
            ("physical", self.physical),
            ("camera", self.camera),
            ("door_entrance", self.door_entrance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BoundsError::InvalidMargin { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use room_model::{ModelError, SettingsTable};

    use super::*;

    fn full_settings() -> SettingsTable {
        SettingsTable::new()
            .with(HORIZONTAL_ROOM_MARGIN, 1.0)
            .with(SCREEN_SIZE_HORIZONTAL, 6.0)
            .with(MARGIN_DOOR_ENTRANCE, 0.5)
    }

    #[test]
    fn test_from_settings() {
        let m = Margins::from_settings(&full_settings()).unwrap();
        assert_eq!(m, Margins::new(1.0, 3.0, 0.5));
    }

    #[test]
    fn test_missing_setting() {
        let settings = SettingsTable::new().with(HORIZONTAL_ROOM_MARGIN, 1.0);
        let err = Margins::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            BoundsError::Model(ModelError::MissingSetting(ref k)) if k == SCREEN_SIZE_HORIZONTAL
        ));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let settings = full_settings().with(MARGIN_DOOR_ENTRANCE, -0.1);
        let err = Margins::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            BoundsError::InvalidMargin { name: "door_entrance", .. }
        ));
    }

    #[test]
    fn test_builder_overrides() {
        let m = Margins::default()
            .with_physical(2.0)
            .with_camera(3.0)
            .with_door_entrance(0.25);
        assert_eq!(m, Margins::new(2.0, 3.0, 0.25));
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_nan_margin_rejected() {
        assert!(Margins::new(f32::NAN, 0.0, 0.0).validate().is_err());
    }
}
