//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the media control shim:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the playback core and the web
//! bridge depend on. It establishes the logging conventions used across the
//! workspace and the validated configuration handed to the controller.

pub mod config;
pub mod error;
pub mod logging;

pub use config::ShimConfig;
pub use error::{Error, Result};
