//! Model-layer error types.

use std::path::PathBuf;

/// Errors raised while looking up or loading room data.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No room exists at the requested index.
    #[error("unknown room index {index} (game state has {count} rooms)")]
    UnknownRoom { index: usize, count: usize },

    /// A required setting was not present.
    #[error("missing setting: {0}")]
    MissingSetting(String),

    /// A room failed validation.
    #[error("invalid room {index}: {reason}")]
    InvalidRoom { index: usize, reason: String },

    /// Failed to parse a world document.
    #[error("failed to parse world file: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a world document from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
