//! Media element abstractions.
//!
//! These traits describe the slice of the browser's `HTMLMediaElement` API the
//! playback shim touches. The web bridge implements them with `web-sys`
//! handles; tests implement them with in-memory fakes.
//!
//! Handles are cheap, non-owning references to nodes owned by the host
//! document. Implementations must not cache lookups: every call to
//! [`MediaDocument::media_element`] resolves the id again.
//!
//! No `Send`/`Sync` bounds are required because browser objects live on a
//! single thread.

use crate::error::Result;

/// Child node describing one candidate media resource.
pub trait SourceNode {
    /// Resolved source URL of the node.
    ///
    /// Returns `None` when the node is not a source node or its URL is empty.
    fn src(&self) -> Option<String>;

    /// Value of an arbitrary attribute on the node, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Returns `true` when the node carries a usable source URL.
    fn has_src(&self) -> bool {
        self.src().is_some_and(|src| !src.is_empty())
    }
}

/// Handle to a playable media element.
pub trait MediaElement {
    /// Source node type exposed by [`Self::first_source`].
    type Source: SourceNode;

    /// Ask the native element to start playback.
    ///
    /// Playback may begin asynchronously; completion and rejection are not
    /// observed.
    fn play(&self);

    /// Ask the native element to pause playback.
    fn pause(&self);

    /// Total media length in seconds. `NaN` while no metadata is loaded.
    fn duration(&self) -> f64;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Overwrite the playback position. The element applies its own clamping.
    fn set_current_time(&self, time: f64);

    /// First child element of the media element, if any.
    fn first_source(&self) -> Option<Self::Source>;

    /// Make `url` the element's source and reload it.
    ///
    /// The new source child carries `path` under the attribute `attribute`,
    /// so later state queries report `path`. Metadata loads asynchronously:
    /// until it arrives the element reports no duration.
    fn load_source(&self, url: &str, attribute: &str, path: &str);

    /// Drop the element's source and reload it, leaving nothing presented.
    fn clear_source(&self);
}

/// Document that can resolve media elements by id.
pub trait MediaDocument {
    /// Element handle type produced by lookups.
    type Element: MediaElement;

    /// Resolve `id` to a media element.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::ElementNotFound`](crate::BridgeError::ElementNotFound)
    ///   when no node carries the id
    /// - [`BridgeError::NotAMediaElement`](crate::BridgeError::NotAMediaElement)
    ///   when the node exists but cannot play media
    fn media_element(&self, id: &str) -> Result<Self::Element>;
}
