//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates. Host applications can depend on `media-shim-workspace`
//! and enable `wasm` to pull in the browser bridge without wiring each crate
//! individually.

pub use core_playback::{
    Instruction, InstructionOutcome, MediaController, PlaybackError, PlaybackSnapshot,
    PlayerState, SeekOutcome,
};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use bridge_wasm::{DomDocument, JsMediaControl};
