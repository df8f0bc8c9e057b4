//! A single horizontal room.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::door::Door;
use crate::error::ModelError;

/// A horizontal play-area segment centred on zero.
///
/// Doors keep their insertion order; every door lookup scans them in that
/// order and returns the first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Full width of the room, wall to wall.
    pub width: f32,
    /// Doors in insertion order.
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl Room {
    /// Create an empty room of the given width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            doors: Vec::new(),
        }
    }

    /// Append a door.
    #[must_use]
    pub fn with_door(mut self, door: Door) -> Self {
        self.doors.push(door);
        self
    }

    /// Half the room width: the position of the right wall.
    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Check the room is usable. `index` is only used for error messages.
    ///
    /// Widths must be finite and non-negative, door positions finite, and
    /// door ids unique.
    pub fn validate(&self, index: usize) -> Result<(), ModelError> {
        let invalid = |reason: String| ModelError::InvalidRoom { index, reason };

        if !self.width.is_finite() || self.width < 0.0 {
            return Err(invalid(format!("width {} is not a finite, non-negative number", self.width)));
        }

        let mut seen = HashSet::new();
        for door in &self.doors {
            if !door.at_pos.is_finite() {
                return Err(invalid(format!("door `{}` has non-finite position", door.id)));
            }
            if !seen.insert(&door.id) {
                return Err(invalid(format!("duplicate door id `{}`", door.id)));
            }
        }
        Ok(())
    }
}
