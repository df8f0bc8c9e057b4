//! # room_model
//!
//! The data the boundary logic reads from. Nothing here knows about margins
//! or clamping; it only describes rooms and how to find them.
//!
//! This crate provides:
//!
//! - [`Room`] and [`Door`] — a room's width and its ordered doors.
//! - [`Side`] — which wall a door sits in.
//! - [`RoomSource`] / [`GameState`] — room-by-index lookup.
//! - [`Settings`] / [`SettingsTable`] — named scalar configuration values.
//! - [`WorldFile`] — a JSON document holding both of the above.

pub mod door;
pub mod error;
pub mod game_state;
pub mod room;
pub mod settings;
pub mod world;

pub use door::{Door, DoorId, Side};
pub use error::ModelError;
pub use game_state::{GameState, RoomSource};
pub use room::Room;
pub use settings::{Settings, SettingsTable};
pub use world::WorldFile;
