//! Boundary-layer error types.

use room_model::ModelError;

/// Errors that can occur while initialising a [`RoomBounds`](crate::RoomBounds).
///
/// Queries never fail; a door lookup that finds nothing returns `None`.
#[derive(Debug, thiserror::Error)]
pub enum BoundsError {
    /// The room or a setting could not be found.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A margin was negative or not finite.
    #[error("margin {name} must be a finite, non-negative number (got {value})")]
    InvalidMargin { name: &'static str, value: f32 },
}
