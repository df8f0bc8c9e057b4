//! # room_math
//!
//! Math types shared by the room crates. Re-exports [`glam`] for vectors and
//! defines the two spatial types the boundary logic needs:
//!
//! - [`Interval`] — a closed range on the horizontal room axis.
//! - [`Transform`] — position and scale of a scene visual.

pub mod interval;
pub mod transform;

// Re-export glam types for convenience.
pub use glam::{Vec2, Vec3};

pub use interval::Interval;
pub use transform::Transform;
