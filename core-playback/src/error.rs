//! # Playback Error Types

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors that can occur during playback control operations.
///
/// A media element that is present but not ready (no source child, no
/// metadata yet) is not an error; see [`PlayerState::Idle`](crate::PlayerState::Idle)
/// and [`SeekOutcome::NotReady`](crate::SeekOutcome::NotReady).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// Element id was empty.
    #[error("Element id must not be empty")]
    InvalidElementId,

    /// Seek target was NaN or infinite.
    #[error("Seek time must be a finite number of seconds, got {0}")]
    InvalidTime(f64),

    /// Element lookup failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// Configuration rejected by the runtime.
    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),
}

impl PlaybackError {
    /// Returns `true` when the id did not resolve to any node.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, PlaybackError::Bridge(err) if err.is_lookup_miss())
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
