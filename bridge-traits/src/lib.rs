//! # Host Bridge Traits
//!
//! Platform abstraction traits for the media control shim.
//!
//! ## Overview
//!
//! This crate defines the contract between the playback core and the host
//! document. The core never touches a global document: it receives a
//! [`MediaDocument`] and looks elements up through it, which keeps the core
//! testable against fakes on native targets.
//!
//! ## Traits
//!
//! - [`MediaDocument`](media::MediaDocument) - Resolve an element id to a media element
//! - [`MediaElement`](media::MediaElement) - Play, pause, position and duration readouts
//! - [`SourceNode`](media::SourceNode) - The source child describing the loaded resource
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Web      | `bridge-wasm`       | ✅ Implemented |
//!
//! ## Error Handling
//!
//! All lookups return [`BridgeError`](error::BridgeError). Implementations should
//! report a missing id as [`BridgeError::ElementNotFound`] and a node of the
//! wrong kind as [`BridgeError::NotAMediaElement`].
//!
//! ## Examples
//!
//! ```ignore
//! use bridge_traits::media::{MediaDocument, MediaElement};
//!
//! fn pause_all<D: MediaDocument>(document: &D, ids: &[&str]) -> bridge_traits::error::Result<()> {
//!     for id in ids {
//!         document.media_element(id)?.pause();
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod media;

pub use error::BridgeError;
pub use media::{MediaDocument, MediaElement, SourceNode};
