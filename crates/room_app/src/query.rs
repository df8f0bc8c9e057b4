//! Query subcommands and their JSON answers.

use clap::Subcommand;
use room_bounds::RoomBounds;
use room_math::Interval;
use room_model::{Door, Side};
use serde::Serialize;

/// A single question asked of a room.
#[derive(Debug, Clone, Subcommand)]
pub enum Query {
    /// Clamp a position to the physical and camera intervals
    Clamp {
        #[arg(allow_negative_numbers = true)]
        pos: f32,
    },
    /// Find the interior door at a position
    DoorNear {
        #[arg(allow_negative_numbers = true)]
        pos: f32,
    },
    /// Find the door in the left or right wall
    SideDoor { side: Side },
    /// Compute the danger indicator scale for a level
    Danger {
        #[arg(allow_negative_numbers = true)]
        level: f32,
        /// Run without an indicator visual attached
        #[arg(long)]
        no_indicator: bool,
    },
    /// Print the room's walls and intervals
    Describe,
}

/// The answer to a [`Query`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Outcome {
    Clamp {
        pos: f32,
        physical: f32,
        camera: f32,
    },
    DoorNear {
        pos: f32,
        door: Option<Door>,
    },
    SideDoor {
        side: Side,
        door: Option<Door>,
    },
    Danger {
        level: f32,
        scale: Option<f32>,
    },
    Describe {
        width: f32,
        left_wall: f32,
        right_wall: f32,
        physical: Interval,
        camera: Interval,
        doors: usize,
    },
}

impl Query {
    /// Whether the room should get an indicator visual before running.
    pub fn wants_indicator(&self) -> bool {
        matches!(
            self,
            Self::Danger {
                no_indicator: false,
                ..
            }
        )
    }

    /// Answer the query.
    pub fn run(&self, bounds: &mut RoomBounds<'_>) -> Outcome {
        match *self {
            Self::Clamp { pos } => Outcome::Clamp {
                pos,
                physical: bounds.clamp_to_physical_bounds(pos),
                camera: bounds.clamp_to_camera_bounds(pos),
            },
            Self::DoorNear { pos } => Outcome::DoorNear {
                pos,
                door: bounds.find_door_near(pos).cloned(),
            },
            Self::SideDoor { side } => Outcome::SideDoor {
                side,
                door: bounds.find_side_door(side).cloned(),
            },
            Self::Danger { level, .. } => Outcome::Danger {
                level,
                scale: bounds.update_danger_indicator(level),
            },
            Self::Describe => Outcome::Describe {
                width: bounds.room().width,
                left_wall: bounds.left_wall_pos(),
                right_wall: bounds.right_wall_pos(),
                physical: bounds.physical_bounds(),
                camera: bounds.camera_bounds(),
                doors: bounds.room().doors.len(),
            },
        }
    }
}
