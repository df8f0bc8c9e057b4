//! Transform of a scene visual.
//!
//! Room logic only ever touches the scale of a visual (the danger
//! indicator), but the transform keeps the position alongside it so callers
//! can hand over the object they render with.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position and per-axis scale of a visual object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// Local position.
    pub position: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Origin, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Set the same scale factor on every axis.
    pub fn set_uniform_scale(&mut self, factor: f32) {
        self.scale = Vec3::splat(factor);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
