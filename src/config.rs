//! Configuration file support
//!
//! Loads defaults from ~/.highlighter.toml (or %USERPROFILE%\.highlighter.toml
//! on Windows). Command-line flags override anything set here.
//!
//! Example:
//! ```toml
//! # highlighter configuration
//! case-sensitive = false
//! until-next-boundary = true
//! markup = false
//! format = "html"
//! mark-class = "highlight"
//! color = "bright-yellow"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{HighlightError, Result};
use crate::highlight::HighlightOptions;
use crate::render::Color;

const CONFIG_FILE: &str = ".highlighter.toml";

/// Output format for highlighted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    #[default]
    Ansi,
    Json,
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Match terms case-sensitively
    pub case_sensitive: bool,
    /// Extend matches to the next word boundary
    pub until_next_boundary: bool,
    /// Treat input as HTML and pass well-formed tags through
    pub markup: bool,
    /// Default output format
    pub format: OutputFormat,
    /// CSS class on the `<mark>` element in HTML output
    pub mark_class: String,
    /// Foreground color of highlighted text in terminal output
    pub color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            until_next_boundary: false,
            markup: false,
            format: OutputFormat::Ansi,
            mark_class: String::new(),
            color: Color::BrightYellow,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing or broken file gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HighlightError::FileNotFound(path.display().to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Matching options carried by this config
    pub fn options(&self) -> HighlightOptions {
        HighlightOptions::default()
            .with_case_sensitive(self.case_sensitive)
            .with_until_next_boundary(self.until_next_boundary)
    }
}
