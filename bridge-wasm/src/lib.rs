//! WebAssembly Media Bridge
//!
//! This crate implements the media traits defined in `bridge-traits` on top of
//! the browser DOM through `web-sys`, and exports the playback controller to
//! JavaScript with `wasm-bindgen`.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It compiles to an empty crate on native targets.
//!
//! # Exports
//!
//! - `initMediaShim(logLevel?)`: panic hook and console logging
//! - `play(id)`, `pause(id)`, `playerState(id)`, `setCurrentTime(id, time)`
//! - `JsMediaControl`: the same operations with a custom path attribute, plus
//!   `applyInstruction`
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::DomDocument;
//! use core_playback::MediaController;
//!
//! let controller = MediaController::with_defaults(DomDocument::current()?);
//! if let Some(snapshot) = controller.player_state("tv")?.snapshot() {
//!     tracing::info!(path = %snapshot.path, "now playing");
//! }
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod bindings;
pub mod bootstrap;
pub mod dom;
pub mod error;

// Re-export commonly used types
pub use bindings::JsMediaControl;
pub use bootstrap::{bootstrap, init_media_shim};
pub use dom::{DomDocument, DomMediaElement, DomSourceNode};
pub use error::{WasmError, WasmResult};
