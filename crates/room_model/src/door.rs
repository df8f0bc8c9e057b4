//! Doors and the walls they sit in.
//!
//! A [`Door`] is located by a single horizontal offset from the room centre.
//! Whether it is an interior door or a side door depends on the room's
//! margins, so that classification lives with the boundary logic, not here.

use serde::{Deserialize, Serialize};

/// Identifier of a door, unique within its room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoorId(pub String);

impl DoorId {
    /// Create a door id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DoorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named exit at a horizontal offset within a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Door {
    /// The door's identifier.
    pub id: DoorId,
    /// Horizontal offset from the room centre. Negative is left.
    pub at_pos: f32,
    /// Index of the room this door opens into, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leads_to: Option<usize>,
}

impl Door {
    /// Create a door at `at_pos` with no destination.
    #[must_use]
    pub fn new(id: impl Into<String>, at_pos: f32) -> Self {
        Self {
            id: DoorId::new(id),
            at_pos,
            leads_to: None,
        }
    }

    /// The side of the room centre this door is on, or `None` if it sits
    /// exactly at the centre.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        Side::of(self.at_pos)
    }
}

/// One of the two walls of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Negative horizontal positions.
    Left,
    /// Positive horizontal positions.
    Right,
}

impl Side {
    /// The side a horizontal offset falls on. Zero and NaN have no side.
    #[must_use]
    pub fn of(at_pos: f32) -> Option<Self> {
        if at_pos < 0.0 {
            Some(Self::Left)
        } else if at_pos > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(format!("unknown side `{other}` (expected left or right)")),
        }
    }
}
