//! # room_bounds
//!
//! Per-room boundary logic for a side-scrolling game. A [`RoomBounds`] is
//! built once per room from the shared game state and settings, then
//! queried every frame:
//!
//! 1. Clamp a character's horizontal position to the walkable interval.
//! 2. Clamp the camera's horizontal position to the pannable interval.
//! 3. Find the interior door a character is standing at.
//! 4. Find the side door leaving through the left or right wall.
//! 5. Resize the danger indicator to reflect the current danger level.
//!
//! ## Usage
//!
//! ```rust
//! use room_bounds::RoomBounds;
//! use room_model::{Door, GameState, Room, SettingsTable};
//! use room_model::settings::{HORIZONTAL_ROOM_MARGIN, MARGIN_DOOR_ENTRANCE, SCREEN_SIZE_HORIZONTAL};
//!
//! let state = GameState::new(vec![
//!     Room::new(10.0).with_door(Door::new("east", 5.0)),
//! ]);
//! let settings = SettingsTable::new()
//!     .with(HORIZONTAL_ROOM_MARGIN, 1.0)
//!     .with(SCREEN_SIZE_HORIZONTAL, 4.0)
//!     .with(MARGIN_DOOR_ENTRANCE, 0.5);
//!
//! let bounds = RoomBounds::initialize(&state, 0, &settings).unwrap();
//! assert_eq!(bounds.clamp_to_physical_bounds(5.0), 4.0);
//! assert_eq!(bounds.find_right_door().map(|d| d.id.as_str()), Some("east"));
//! ```

pub mod bounds;
pub mod error;
pub mod indicator;
pub mod margins;

pub use bounds::RoomBounds;
pub use error::BoundsError;
pub use indicator::{DangerIndicator, danger_scale};
pub use margins::Margins;
