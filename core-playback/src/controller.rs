//! Media control operations.
//!
//! [`MediaController`] owns the document handle it resolves elements through,
//! so nothing here depends on an ambient global document. Each call performs
//! exactly one fresh lookup and then acts on the returned handle.
//!
//! ## Failure policy
//!
//! A missing element is an error for every operation
//! ([`PlaybackError::Bridge`] wrapping `ElementNotFound`). An element that
//! exists but is not ready is never an error: state queries return
//! [`PlayerState::Idle`] and seeks return [`SeekOutcome::NotReady`].

use bridge_traits::{MediaDocument, MediaElement};
use core_runtime::ShimConfig;
use tracing::{debug, instrument, trace};

use crate::error::{PlaybackError, Result};
use crate::snapshot::{is_reported, snapshot_of, PlayerState};

/// Whether a seek request reached the native element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// The playback position was overwritten.
    Applied,
    /// The element is not reporting a position yet; nothing was changed.
    NotReady,
}

/// Seek `element` to `time` seconds if it is currently reporting a position.
///
/// No range validation is performed; the element clamps out-of-range values.
pub fn seek<E: MediaElement>(element: &E, time: f64) -> SeekOutcome {
    if is_reported(element.current_time()) {
        element.set_current_time(time);
        SeekOutcome::Applied
    } else {
        trace!("element not reporting a position, seek skipped");
        SeekOutcome::NotReady
    }
}

pub(crate) fn ensure_finite(time: f64) -> Result<()> {
    if time.is_finite() {
        Ok(())
    } else {
        Err(PlaybackError::InvalidTime(time))
    }
}

/// Play, pause, seek and query media elements of one document.
#[derive(Debug, Clone)]
pub struct MediaController<D> {
    document: D,
    config: ShimConfig,
}

impl<D: MediaDocument> MediaController<D> {
    /// Create a controller for `document`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Runtime`] if `config` fails validation.
    pub fn new(document: D, config: ShimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { document, config })
    }

    /// Create a controller using the default configuration.
    pub fn with_defaults(document: D) -> Self {
        Self {
            document,
            config: ShimConfig::default(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    pub(crate) fn lookup(&self, id: &str) -> Result<D::Element> {
        if id.is_empty() {
            return Err(PlaybackError::InvalidElementId);
        }

        self.document.media_element(id).map_err(|err| {
            debug!(element_id = id, error = %err, "media element lookup failed");
            PlaybackError::from(err)
        })
    }

    /// Start playback of the element identified by `id`.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&self, id: &str) -> Result<()> {
        self.lookup(id)?.play();
        Ok(())
    }

    /// Pause playback of the element identified by `id`.
    #[instrument(level = "debug", skip(self))]
    pub fn pause(&self, id: &str) -> Result<()> {
        self.lookup(id)?.pause();
        Ok(())
    }

    /// Read the current playback state of the element identified by `id`.
    ///
    /// # Errors
    ///
    /// Only lookup failures are errors; an element that is not ready yields
    /// [`PlayerState::Idle`].
    #[instrument(level = "trace", skip(self))]
    pub fn player_state(&self, id: &str) -> Result<PlayerState> {
        let element = self.lookup(id)?;
        Ok(snapshot_of(&element, &self.config))
    }

    /// Move the playback position of the element identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidTime`] for NaN or infinite `time`
    /// without touching the document, and lookup failures otherwise.
    #[instrument(level = "debug", skip(self))]
    pub fn set_current_time(&self, id: &str, time: f64) -> Result<SeekOutcome> {
        ensure_finite(time)?;
        let element = self.lookup(id)?;
        Ok(seek(&element, time))
    }
}
