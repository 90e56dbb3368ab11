//! Playback state snapshots.
//!
//! A [`PlaybackSnapshot`] is only produced when the element is fully ready:
//! the first child is a source node with a resolved URL, the media path can be
//! read from the configured attribute, and both duration and current time are
//! non-zero numbers. Anything less is reported as [`PlayerState::Idle`], never
//! as a partially filled record.

use bridge_traits::{MediaElement, SourceNode};
use core_runtime::ShimConfig;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Point-in-time view of what the element is playing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Media path of the loaded resource.
    pub path: String,
    /// Total media length in seconds.
    pub duration: f64,
    /// Current playback position in seconds.
    pub time: f64,
}

/// Result of a state query.
///
/// Serializes as `null` for [`PlayerState::Idle`] and as the snapshot object
/// otherwise, matching what the remote server stores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<PlaybackSnapshot>", into = "Option<PlaybackSnapshot>")]
pub enum PlayerState {
    /// Nothing loaded yet, or the element is not ready to report.
    #[default]
    Idle,
    /// Media is loaded and reporting a position.
    Media(PlaybackSnapshot),
}

impl PlayerState {
    /// Borrow the snapshot, if any.
    pub fn snapshot(&self) -> Option<&PlaybackSnapshot> {
        match self {
            PlayerState::Idle => None,
            PlayerState::Media(snapshot) => Some(snapshot),
        }
    }

    /// Consume the state and return the snapshot, if any.
    pub fn into_snapshot(self) -> Option<PlaybackSnapshot> {
        self.into()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PlayerState::Idle)
    }
}

impl From<Option<PlaybackSnapshot>> for PlayerState {
    fn from(snapshot: Option<PlaybackSnapshot>) -> Self {
        snapshot.map_or(PlayerState::Idle, PlayerState::Media)
    }
}

impl From<PlayerState> for Option<PlaybackSnapshot> {
    fn from(state: PlayerState) -> Self {
        match state {
            PlayerState::Idle => None,
            PlayerState::Media(snapshot) => Some(snapshot),
        }
    }
}

/// Zero and NaN mean the element has not loaded metadata or started playing.
pub(crate) fn is_reported(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Read the current state of `element`.
pub fn snapshot_of<E: MediaElement>(element: &E, config: &ShimConfig) -> PlayerState {
    let Some(source) = element.first_source() else {
        trace!("no source child");
        return PlayerState::Idle;
    };

    if !source.has_src() {
        trace!("source child has no resolved src");
        return PlayerState::Idle;
    }

    let duration = element.duration();
    let time = element.current_time();
    if !is_reported(duration) || !is_reported(time) {
        trace!(duration, time, "element not reporting playback yet");
        return PlayerState::Idle;
    }

    match source
        .attribute(config.path_attribute())
        .filter(|path| !path.is_empty())
    {
        Some(path) => PlayerState::Media(PlaybackSnapshot {
            path,
            duration,
            time,
        }),
        None => {
            trace!(attribute = config.path_attribute(), "source child has no media path");
            PlayerState::Idle
        }
    }
}

/// Media path the element's source child is tagged with, loaded or not.
pub(crate) fn loaded_path<E: MediaElement>(element: &E, config: &ShimConfig) -> Option<String> {
    element
        .first_source()
        .filter(SourceNode::has_src)
        .and_then(|source| source.attribute(config.path_attribute()))
        .filter(|path| !path.is_empty())
}
