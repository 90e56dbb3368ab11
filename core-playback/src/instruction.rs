//! Remote-control instructions.
//!
//! The remote server hands the player at most one pending [`Instruction`] per
//! state update. The wire format is internally tagged:
//!
//! ```json
//! {"tag": "Play", "path": "shows/ep1.mkv", "from": 30.0, "behaviour": {"tag": "Paused"}}
//! ```
//!
//! The controller follows the instruction completely. A `Play` for a path the
//! element is not tagged with swaps the source child to the configured media
//! root plus `path` before positioning and starting it. `Idle` pauses and
//! drops the source, so the next state query reports [`PlayerState::Idle`].
//!
//! [`PlayerState::Idle`]: crate::PlayerState::Idle

use bridge_traits::{MediaDocument, MediaElement};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::controller::{ensure_finite, MediaController};
use crate::error::Result;
use crate::snapshot::loaded_path;

/// Command relayed from the remote control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Instruction {
    /// Stop presenting media.
    Idle,
    /// Present `path`, optionally from a position, playing or paused.
    Play {
        path: String,
        from: Option<f64>,
        behaviour: Behaviour,
    },
}

/// Whether media should be running after an instruction is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Behaviour {
    Playing,
    Paused,
}

/// What applying an instruction did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum InstructionOutcome {
    /// The already loaded media was driven as instructed.
    Applied,
    /// The source was swapped to `path` before driving the element.
    Loaded { path: String },
    /// Playback was paused and the source dropped.
    Stopped,
}

impl<D: MediaDocument> MediaController<D> {
    /// Apply `instruction` to the element identified by `id`.
    ///
    /// Positions from the instruction are written straight to the element.
    /// A freshly loaded element keeps the position as its start point until
    /// metadata arrives.
    ///
    /// # Errors
    ///
    /// Lookup failures, and [`PlaybackError::InvalidTime`](crate::PlaybackError::InvalidTime)
    /// when `from` is not finite. A rejected `from` leaves the element untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&self, id: &str, instruction: &Instruction) -> Result<InstructionOutcome> {
        match instruction {
            Instruction::Idle => {
                let element = self.lookup(id)?;
                element.pause();
                element.clear_source();
                Ok(InstructionOutcome::Stopped)
            }
            Instruction::Play {
                path,
                from,
                behaviour,
            } => {
                if let Some(time) = from {
                    ensure_finite(*time)?;
                }

                let element = self.lookup(id)?;
                let loaded = loaded_path(&element, self.config());
                let outcome = if loaded.as_deref() == Some(path.as_str()) {
                    InstructionOutcome::Applied
                } else {
                    let config = self.config();
                    debug!(requested = %path, loaded = ?loaded, "swapping source");
                    element.load_source(&config.source_url(path), config.path_attribute(), path);
                    InstructionOutcome::Loaded { path: path.clone() }
                };

                if let Some(time) = from {
                    element.set_current_time(*time);
                }
                match behaviour {
                    Behaviour::Playing => element.play(),
                    Behaviour::Paused => element.pause(),
                }
                Ok(outcome)
            }
        }
    }
}
