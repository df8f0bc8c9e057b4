//! Room-by-index lookup.

use crate::error::ModelError;
use crate::room::Room;

/// Anything that can hand out rooms by index.
pub trait RoomSource {
    /// Returns the room at `index`, if it exists.
    fn room(&self, index: usize) -> Option<&Room>;

    /// Number of rooms available.
    fn room_count(&self) -> usize;

    /// Returns the room at `index`, or [`ModelError::UnknownRoom`].
    fn require_room(&self, index: usize) -> Result<&Room, ModelError> {
        self.room(index).ok_or(ModelError::UnknownRoom {
            index,
            count: self.room_count(),
        })
    }
}

/// The shared game state: every room in the level, in index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    rooms: Vec<Room>,
}

impl GameState {
    /// Create a game state from its rooms.
    #[must_use]
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

impl RoomSource for GameState {
    fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
