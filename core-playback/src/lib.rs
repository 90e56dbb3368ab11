//! # Playback Control Module
//!
//! Drives a host media element through the [`bridge_traits`] seam.
//!
//! ## Overview
//!
//! This module handles:
//! - Play, pause and seek requests against an element resolved by id
//! - Shaping the element's current state into a [`PlaybackSnapshot`]
//! - Applying remote-control [`Instruction`]s relayed by the server
//!
//! Every operation resolves the element again through the document handle
//! owned by [`MediaController`]; nothing is cached between calls.

pub mod controller;
pub mod error;
pub mod instruction;
pub mod snapshot;

pub use controller::{seek, MediaController, SeekOutcome};
pub use error::{PlaybackError, Result};
pub use instruction::{Behaviour, Instruction, InstructionOutcome};
pub use snapshot::{snapshot_of, PlaybackSnapshot, PlayerState};
