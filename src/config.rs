//! Matcher configuration.
//!
//! Every knob has a stock default matching what the export pipeline has been
//! observed to do. A TOML file passed with `--config` overrides only the keys
//! it names; the rest keep their stock values.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [naming]
//! max_name_len = 46         # Sidecar base-name budget (51 chars minus ".json")
//! edited_marker = "-edited" # Suffix the exporter adds to edited copies
//!
//! [formats]
//! video = ["mov", "mp4"]                  # Uppercase forms match too
//! image = ["jpeg", "jpg", "png", "heic"]  # Also the live-photo pairing order
//!
//! [scan]
//! metadata_extension = "json"
//! follow_symlinks = true  # Linked album folders are walked; loops are errors
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Why the limits are configurable
//!
//! The 46-character prefix (51 total) is an empirical observation about an
//! undocumented export format, not a derived invariant. If an archive was
//! produced with a different limit, override `naming.max_name_len` instead of
//! patching the matcher.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Observed sidecar base-name budget: 51 characters minus `.json`.
pub const DEFAULT_MAX_NAME_LEN: usize = 46;
pub const DEFAULT_EDITED_MARKER: &str = "-edited";
pub const DEFAULT_VIDEO_FORMATS: &[&str] = &["mov", "mp4"];
pub const DEFAULT_IMAGE_FORMATS: &[&str] = &["jpeg", "jpg", "png", "heic"];
pub const DEFAULT_METADATA_EXTENSION: &str = "json";

/// Top-level matcher configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Candidate-name generation settings.
    pub naming: NamingConfig,
    /// Extension sets used to classify media files.
    pub formats: FormatConfig,
    /// Directory traversal settings.
    pub scan: ScanConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.naming.max_name_len == 0 {
            return Err(ConfigError::Validation(
                "naming.max_name_len must be greater than 0".into(),
            ));
        }
        if self.naming.edited_marker.is_empty() {
            return Err(ConfigError::Validation(
                "naming.edited_marker must not be empty".into(),
            ));
        }
        if self.formats.video.is_empty() || self.formats.image.is_empty() {
            return Err(ConfigError::Validation(
                "formats.video and formats.image must not be empty".into(),
            ));
        }
        let mut all_formats = self.formats.video.iter().chain(&self.formats.image);
        if let Some(bad) = all_formats.find(|ext| ext.is_empty() || ext.starts_with('.')) {
            return Err(ConfigError::Validation(format!(
                "format extensions must be non-empty and have no leading dot, got {bad:?}"
            )));
        }
        let ext = &self.scan.metadata_extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::Validation(
                "scan.metadata_extension must be non-empty and have no leading dot".into(),
            ));
        }
        Ok(())
    }
}

/// How candidate sidecar names are derived from a media file name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Maximum sidecar base-name length, in characters, before `.json`.
    pub max_name_len: usize,
    /// Marker inserted by the exporter into edited copies (`IMG_1-edited.jpg`).
    pub edited_marker: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            edited_marker: DEFAULT_EDITED_MARKER.to_string(),
        }
    }
}

/// Recognized media extensions, without the leading dot.
///
/// Each entry matches itself and its uppercase form. The order of `image`
/// is the try-order for live-photo pairing candidates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub video: Vec<String>,
    pub image: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            video: DEFAULT_VIDEO_FORMATS.iter().map(|s| s.to_string()).collect(),
            image: DEFAULT_IMAGE_FORMATS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Directory traversal settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Extension of sidecar files; these are never treated as media.
    pub metadata_extension: String,
    /// Descend into symlinked directories. Loops are reported as errors.
    /// When off, a symlinked directory is skipped with everything under it.
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            metadata_extension: DEFAULT_METADATA_EXTENSION.to_string(),
            follow_symlinks: true,
        }
    }
}

/// Load the matcher configuration.
///
/// `None` yields the stock defaults. A path must point at a readable TOML
/// file; a missing file is an error rather than a silent fallback, since the
/// user asked for it explicitly. Every section is `#[serde(default)]`, so a
/// sparse file only overrides the keys it names.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Parse a TOML document into a [`Config`] without validating it.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}
