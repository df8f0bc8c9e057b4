//! Closed intervals on the horizontal room axis.
//!
//! Rooms are measured from their centre, so most intervals here are built
//! with [`Interval::symmetric`] and then narrowed by a margin.

use serde::{Deserialize, Serialize};

/// A closed interval `[min, max]` on the horizontal axis.
///
/// An interval whose `min` exceeds `max` is *inverted*. This happens when a
/// margin is wider than half the room. Clamping into an inverted interval
/// yields its midpoint rather than panicking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Interval {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
}

impl Interval {
    /// Create an interval from its two bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The interval `[-half_extent, half_extent]`.
    #[must_use]
    pub fn symmetric(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent)
    }

    /// Move both bounds inward by `margin`.
    #[must_use]
    pub fn shrunk(self, margin: f32) -> Self {
        Self::new(self.min + margin, self.max - margin)
    }

    /// Returns `true` if `min > max`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// The point halfway between the bounds.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) * 0.5
    }

    /// Returns `true` if `x` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }

    /// Clamp `x` into the interval.
    ///
    /// Uses `max`/`min` rather than `f32::clamp`, so a NaN `x` clamps to
    /// `min`. An inverted interval clamps everything to its midpoint.
    #[must_use]
    pub fn clamp(&self, x: f32) -> f32 {
        if self.is_inverted() {
            return self.midpoint();
        }
        x.max(self.min).min(self.max)
    }
}
