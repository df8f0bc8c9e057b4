//! The per-room boundary component.
//!
//! Walls sit at `±width / 2`. Two intervals are derived from them:
//!
//! ```text
//!  left wall                                              right wall
//!     |<-physical->|                          |<-physical->|
//!     |<---camera--->|                      |<---camera--->|
//!     |            [====== walkable =======]               |
//!     |              [==== camera pan ====]                |
//! ```
//!
//! A door beyond the walkable interval is a *side door*: it sits in a wall
//! and is used by walking into that wall. Every other door is an *interior*
//! door, used by standing within the door-entrance margin of it.

use room_math::{Interval, Transform};
use room_model::{Door, Room, RoomSource, Settings, Side};
use tracing::{debug, trace, warn};

use crate::error::BoundsError;
use crate::indicator::DangerIndicator;
use crate::margins::Margins;

/// Horizontal limits and door lookup for one room.
///
/// Borrows the room from the game state; the only state it owns is the
/// danger indicator.
#[derive(Debug, Clone)]
pub struct RoomBounds<'a> {
    room: &'a Room,
    margins: Margins,
    right_wall_pos: f32,
    left_wall_pos: f32,
    physical: Interval,
    camera: Interval,
    indicator: DangerIndicator,
}

impl<'a> RoomBounds<'a> {
    /// Build bounds for the room at `room_index`, reading margins from
    /// `settings`.
    pub fn initialize(
        rooms: &'a impl RoomSource,
        room_index: usize,
        settings: &impl Settings,
    ) -> Result<Self, BoundsError> {
        let room = rooms.require_room(room_index)?;
        let margins = Margins::from_settings(settings)?;
        debug!(room_index, "initialising room bounds");
        Ok(Self::new(room, margins))
    }

    /// Build bounds for `room` with explicit margins.
    #[must_use]
    pub fn new(room: &'a Room, margins: Margins) -> Self {
        let walls = Interval::symmetric(room.half_width());
        let (left_wall_pos, right_wall_pos) = (walls.min, walls.max);
        let physical = walls.shrunk(margins.physical);
        let camera = walls.shrunk(margins.camera);

        if physical.is_inverted() {
            warn!(width = room.width, margin = margins.physical, "physical margin wider than half the room");
        }
        if camera.is_inverted() {
            warn!(width = room.width, margin = margins.camera, "camera margin wider than half the room");
        }
        debug!(
            width = room.width,
            doors = room.doors.len(),
            physical_min = physical.min,
            physical_max = physical.max,
            camera_min = camera.min,
            camera_max = camera.max,
            "room bounds ready"
        );

        Self {
            room,
            margins,
            right_wall_pos,
            left_wall_pos,
            physical,
            camera,
            indicator: DangerIndicator::none(),
        }
    }

    /// Attach a danger indicator visual.
    #[must_use]
    pub fn with_indicator(mut self, visual: Transform) -> Self {
        self.indicator = DangerIndicator::with_visual(visual);
        self
    }

    /// The room these bounds were built for.
    #[must_use]
    pub fn room(&self) -> &'a Room {
        self.room
    }

    /// The cached margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn left_wall_pos(&self) -> f32 {
        self.left_wall_pos
    }

    #[must_use]
    pub fn right_wall_pos(&self) -> f32 {
        self.right_wall_pos
    }

    /// The interval characters may walk in.
    #[must_use]
    pub fn physical_bounds(&self) -> Interval {
        self.physical
    }

    /// The interval the camera centre may pan in.
    #[must_use]
    pub fn camera_bounds(&self) -> Interval {
        self.camera
    }

    /// Clamp a character position to the walkable interval.
    #[must_use]
    pub fn clamp_to_physical_bounds(&self, pos: f32) -> f32 {
        self.physical.clamp(pos)
    }

    /// Clamp a camera position to the pannable interval.
    #[must_use]
    pub fn clamp_to_camera_bounds(&self, pos: f32) -> f32 {
        self.camera.clamp(pos)
    }

    fn side_door_threshold(&self) -> f32 {
        self.right_wall_pos - self.margins.physical
    }

    /// Returns `true` if `door` lies beyond the walkable interval.
    #[must_use]
    pub fn is_side_door(&self, door: &Door) -> bool {
        door.at_pos.abs() > self.side_door_threshold()
    }

    fn is_interior_door(&self, door: &Door) -> bool {
        door.at_pos.abs() < self.side_door_threshold()
    }

    /// The first interior door within the door-entrance margin of `pos`.
    ///
    /// Side doors are never returned; they are reached with
    /// [`find_side_door`](Self::find_side_door).
    #[must_use]
    pub fn find_door_near(&self, pos: f32) -> Option<&'a Door> {
        let found = self.room.doors.iter().find(|door| {
            (door.at_pos - pos).abs() < self.margins.door_entrance && self.is_interior_door(door)
        });
        trace!(pos, door = ?found.map(|d| &d.id), "door lookup");
        found
    }

    /// The first side door in the wall on `side`.
    #[must_use]
    pub fn find_side_door(&self, side: Side) -> Option<&'a Door> {
        let found = self
            .room
            .doors
            .iter()
            .find(|door| self.is_side_door(door) && door.side() == Some(side));
        trace!(%side, door = ?found.map(|d| &d.id), "side door lookup");
        found
    }

    #[must_use]
    pub fn find_left_door(&self) -> Option<&'a Door> {
        self.find_side_door(Side::Left)
    }

    #[must_use]
    pub fn find_right_door(&self) -> Option<&'a Door> {
        self.find_side_door(Side::Right)
    }

    /// Rescale the danger indicator for `level` in `[0, 1]`.
    ///
    /// Returns the applied scale, or `None` if no indicator is attached.
    pub fn update_danger_indicator(&mut self, level: f32) -> Option<f32> {
        self.indicator.update(level)
    }

    /// The danger indicator's current transform, if attached.
    #[must_use]
    pub fn indicator(&self) -> Option<&Transform> {
        self.indicator.visual()
    }
}

#[cfg(test)]
mod tests {
    use room_math::Vec3;
    use room_model::settings::{HORIZONTAL_ROOM_MARGIN, MARGIN_DOOR_ENTRANCE, SCREEN_SIZE_HORIZONTAL};
    use room_model::{GameState, ModelError, SettingsTable};

    use super::*;

    fn hall() -> Room {
        Room::new(10.0)
            .with_door(Door::new("west", -5.0))
            .with_door(Door::new("closet", 1.5))
            .with_door(Door::new("cellar", 2.0))
            .with_door(Door::new("east", 4.5))
            .with_door(Door::new("east_upper", 5.0))
    }

    fn margins() -> Margins {
        Margins::new(1.0, 2.0, 0.75)
    }

    #[test]
    fn test_walls_are_symmetric() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        assert_eq!(b.right_wall_pos(), 5.0);
        assert_eq!(b.left_wall_pos(), -5.0);
    }

    #[test]
    fn test_physical_clamp_example() {
        let room = Room::new(10.0);
        let b = RoomBounds::new(&room, Margins::new(1.0, 0.0, 0.0));
        assert_eq!(b.physical_bounds(), Interval::new(-4.0, 4.0));
        assert_eq!(b.clamp_to_physical_bounds(5.0), 4.0);
        assert_eq!(b.clamp_to_physical_bounds(-5.0), -4.0);
        assert_eq!(b.clamp_to_physical_bounds(2.5), 2.5);
    }

    #[test]
    fn test_physical_clamp_stays_in_bounds() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        let bounds = b.physical_bounds();
        for step in -100..=100 {
            let pos = step as f32 * 0.13;
            let clamped = b.clamp_to_physical_bounds(pos);
            assert!(bounds.contains(clamped));
            if bounds.contains(pos) {
                assert_eq!(clamped, pos);
            }
        }
    }

    #[test]
    fn test_camera_clamp_uses_camera_margin() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        assert_eq!(b.camera_bounds(), Interval::new(-3.0, 3.0));
        assert_eq!(b.clamp_to_camera_bounds(4.0), 3.0);
        assert_eq!(b.clamp_to_camera_bounds(-10.0), -3.0);
        assert_eq!(b.clamp_to_camera_bounds(0.5), 0.5);
    }

    #[test]
    fn test_narrow_room_clamps_to_centre() {
        let room = Room::new(2.0);
        let b = RoomBounds::new(&room, Margins::new(0.5, 3.0, 0.0));
        assert_eq!(b.clamp_to_camera_bounds(0.9), 0.0);
        assert_eq!(b.clamp_to_physical_bounds(0.9), 0.5);
    }

    #[test]
    fn test_find_door_near_interior() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        assert_eq!(b.find_door_near(1.2).map(|d| d.id.as_str()), Some("closet"));
        assert_eq!(b.find_door_near(-2.0), None);
    }

    #[test]
    fn test_find_door_near_returns_first_in_insertion_order() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        // Both closet (1.5) and cellar (2.0) are within 0.75 of 1.75.
        assert_eq!(b.find_door_near(1.75).map(|d| d.id.as_str()), Some("closet"));
    }

    #[test]
    fn test_find_door_near_skips_side_doors() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        // Standing at the right wall: east (4.5) and east_upper (5.0) are in range
        // but both are side doors.
        assert_eq!(b.find_door_near(4.6), None);
        assert_eq!(b.find_door_near(-4.8), None);

        for step in -60..=60 {
            let pos = step as f32 * 0.1;
            if let Some(door) = b.find_door_near(pos) {
                assert!(!b.is_side_door(door), "{} returned at {pos}", door.id);
            }
        }
    }

    #[test]
    fn test_find_side_door_respects_sign() {
        let room = hall();
        let b = RoomBounds::new(&room, margins());
        assert_eq!(b.find_left_door().map(|d| d.id.as_str()), Some("west"));
        assert_eq!(b.find_right_door().map(|d| d.id.as_str()), Some("east"));
        assert!(b.find_left_door().is_some_and(|d| d.at_pos < 0.0));
        assert!(b.find_right_door().is_some_and(|d| d.at_pos > 0.0));
    }

    #[test]
    fn test_find_side_door_none_without_wall_doors() {
        let room = Room::new(10.0).with_door(Door::new("closet", 1.0));
        let b = RoomBounds::new(&room, margins());
        assert!(b.find_left_door().is_none());
        assert!(b.find_right_door().is_none());
    }

    #[test]
    fn test_door_on_threshold_is_neither() {
        let room = Room::new(10.0).with_door(Door::new("edge", 4.0));
        let b = RoomBounds::new(&room, Margins::new(1.0, 0.0, 1.0));
        assert!(!b.is_side_door(&room.doors[0]));
        assert!(b.find_door_near(4.0).is_none());
        assert!(b.find_right_door().is_none());
    }

    #[test]
    fn test_door_entrance_margin_is_exclusive() {
        let room = Room::new(10.0).with_door(Door::new("closet", 1.0));
        let b = RoomBounds::new(&room, Margins::new(1.0, 0.0, 0.5));
        // Exactly one margin away on either side.
        assert!(b.find_door_near(1.5).is_none());
        assert!(b.find_door_near(0.5).is_none());
        // Just inside.
        assert_eq!(b.find_door_near(1.49).map(|d| d.id.as_str()), Some("closet"));
        assert_eq!(b.find_door_near(0.51).map(|d| d.id.as_str()), Some("closet"));
    }

    #[test]
    fn test_danger_indicator() {
        let room = hall();
        let mut b = RoomBounds::new(&room, margins());
        assert_eq!(b.update_danger_indicator(0.5), None);

        let mut b = b.with_indicator(Transform::default());
        assert_eq!(b.update_danger_indicator(2.0), Some(1.0));
        assert_eq!(b.indicator().map(|t| t.scale), Some(Vec3::ONE));
        assert_eq!(b.update_danger_indicator(-1.0), Some(0.1));
        assert_eq!(b.indicator().map(|t| t.scale), Some(Vec3::splat(0.1)));
    }

    #[test]
    fn test_initialize_from_game_state() {
        let state = GameState::new(vec![Room::new(4.0), hall()]);
        let settings = SettingsTable::new()
            .with(HORIZONTAL_ROOM_MARGIN, 1.0)
            .with(SCREEN_SIZE_HORIZONTAL, 4.0)
            .with(MARGIN_DOOR_ENTRANCE, 0.75);

        let b = RoomBounds::initialize(&state, 1, &settings).unwrap();
        assert_eq!(b.right_wall_pos(), 5.0);
        assert_eq!(b.margins(), margins());
        assert_eq!(b.room().doors.len(), 5);
    }

    #[test]
    fn test_initialize_unknown_room() {
        let state = GameState::new(vec![Room::new(4.0)]);
        let settings = SettingsTable::new();
        let err = RoomBounds::initialize(&state, 5, &settings).unwrap_err();
        assert!(matches!(
            err,
            BoundsError::Model(ModelError::UnknownRoom { index: 5, count: 1 })
        ));
    }
}
