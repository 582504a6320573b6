//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a headline.toml, and if present we load settings from there.
//! This provides the marker attribute names and file extension preferences.

use crate::error::{Error, Result};
use crate::outline::Markers;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "headline.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from headline.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "data-section".to_string())]
    /// Attribute that marks an element as a section.
    pub section_marker: String,
    #[facet(default = "data-heading".to_string())]
    /// Attribute that marks an element as a heading.
    pub heading_marker: String,
    #[facet(default = vec!["html".to_string(), "htm".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let markers = Markers::default();
        Self {
            section_marker: markers.section,
            heading_marker: markers.heading,
            file_extensions: vec!["html".to_string(), "htm".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from headline.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse configuration text, filling unset keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid TOML for this shape.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }

    #[must_use]
    /// Marker attribute names for the outline pass.
    pub fn markers(&self) -> Markers {
        Markers {
            section: self.section_marker.clone(),
            heading: self.heading_marker.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
