//! # Shim Configuration
//!
//! Settings shared by the playback controller and the web bridge.
//!
//! ## Overview
//!
//! Two settings are tunable: the attribute carrying the media path on the
//! source child ([`DEFAULT_PATH_ATTRIBUTE`]) and the URL prefix media is
//! loaded from when a remote instruction names a new path
//! ([`DEFAULT_MEDIA_ROOT`]). Both are validated fail-fast so a misconfigured
//! host surfaces an error at construction time rather than an always-idle
//! player.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::ShimConfig;
//!
//! let config = ShimConfig::default().with_path_attribute("data-path");
//! config.validate().expect("valid attribute name");
//! assert_eq!(config.path_attribute(), "data-path");
//! ```

use crate::error::{Error, Result};

/// Attribute read from the source child to derive the loaded media path.
pub const DEFAULT_PATH_ATTRIBUTE: &str = "meta-path";

/// URL prefix media paths are served under by the remote server.
pub const DEFAULT_MEDIA_ROOT: &str = "/play/";

/// Configuration for the media control shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    path_attribute: String,
    media_root: String,
}

impl ShimConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the attribute holding the media path.
    pub fn with_path_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.path_attribute = attribute.into();
        self
    }

    /// Override the URL prefix used when loading a media path.
    pub fn with_media_root(mut self, root: impl Into<String>) -> Self {
        self.media_root = root.into();
        self
    }

    /// Attribute holding the media path on the source child.
    pub fn path_attribute(&self) -> &str {
        &self.path_attribute
    }

    /// URL prefix media paths are served under.
    pub fn media_root(&self) -> &str {
        &self.media_root
    }

    /// URL the element loads to present `path`.
    pub fn source_url(&self, path: &str) -> String {
        format!("{}{}", self.media_root, path)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the path attribute is empty or contains
    /// characters that cannot appear in an HTML attribute name, and when the
    /// media root is empty.
    pub fn validate(&self) -> Result<()> {
        if self.media_root.is_empty() {
            return Err(Error::Config("media root must not be empty".to_string()));
        }

        let name = self.path_attribute.as_str();

        if name.is_empty() {
            return Err(Error::Config("path attribute must not be empty".to_string()));
        }

        if let Some(invalid) = name
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '='))
        {
            return Err(Error::Config(format!(
                "path attribute `{}` contains invalid character {:?}",
                name, invalid
            )));
        }

        Ok(())
    }
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            path_attribute: DEFAULT_PATH_ATTRIBUTE.to_string(),
            media_root: DEFAULT_MEDIA_ROOT.to_string(),
        }
    }
}
