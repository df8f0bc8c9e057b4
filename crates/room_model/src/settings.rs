//! Named scalar settings.
//!
//! Settings are looked up by name, the same way a game's tuning table is.
//! The boundary logic reads three of them once, at initialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Margin kept between a walking character and each wall.
pub const HORIZONTAL_ROOM_MARGIN: &str = "HORIZONTAL_ROOM_MARGIN";

/// Visible screen width in world units.
pub const SCREEN_SIZE_HORIZONTAL: &str = "SCREEN_SIZE_HORIZONTAL";

/// How close a character must be to a door to use it.
pub const MARGIN_DOOR_ENTRANCE: &str = "MARGIN_DOOR_ENTRANCE";

/// A source of named scalar configuration values.
pub trait Settings {
    /// Returns the value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<f32>;

    /// Returns the value stored under `key`, or [`ModelError::MissingSetting`].
    fn require(&self, key: &str) -> Result<f32, ModelError> {
        self.value(key)
            .ok_or_else(|| ModelError::MissingSetting(key.to_string()))
    }
}

/// A [`HashMap`]-backed [`Settings`] implementation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SettingsTable {
    values: HashMap<String, f32>,
}

impl SettingsTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: f32) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value in place.
    pub fn set(&mut self, key: impl Into<String>, value: f32) {
        self.values.insert(key.into(), value);
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl Settings for SettingsTable {
    fn value(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }
}
