//! JSON world documents.
//!
//! A world file bundles the settings table with every room of a level:
//!
//! ```json
//! {
//!   "settings": { "HORIZONTAL_ROOM_MARGIN": 1.0, "SCREEN_SIZE_HORIZONTAL": 4.0, "MARGIN_DOOR_ENTRANCE": 0.5 },
//!   "rooms": [
//!     { "width": 10.0, "doors": [ { "id": "west", "at_pos": -5.0, "leads_to": 1 } ] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ModelError;
use crate::game_state::GameState;
use crate::room::Room;
use crate::settings::SettingsTable;

/// A level's settings and rooms as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorldFile {
    /// Named scalar settings.
    #[serde(default)]
    pub settings: SettingsTable,
    /// Rooms in index order.
    pub rooms: Vec<Room>,
}

impl WorldFile {
    /// Parse and validate a world document.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let world: Self = serde_json::from_str(json)?;
        world.validate()?;
        debug!(
            rooms = world.rooms.len(),
            settings = world.settings.len(),
            "world parsed"
        );
        Ok(world)
    }

    /// Read, parse and validate a world document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validate every room and every door destination.
    pub fn validate(&self) -> Result<(), ModelError> {
        let count = self.rooms.len();
        for (index, room) in self.rooms.iter().enumerate() {
            room.validate(index)?;
            if let Some(door) = room
                .doors
                .iter()
                .find(|d| d.leads_to.is_some_and(|to| to >= count))
            {
                return Err(ModelError::InvalidRoom {
                    index,
                    reason: format!("door `{}` leads to a room that does not exist", door.id),
                });
            }
        }
        Ok(())
    }

    /// Split into the game state and the settings table.
    #[must_use]
    pub fn into_parts(self) -> (GameState, SettingsTable) {
        (GameState::new(self.rooms), self.settings)
    }
}
