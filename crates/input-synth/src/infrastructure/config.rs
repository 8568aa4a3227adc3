//! TOML configuration for the `input-synth` binary.
//!
//! ```toml
//! [builder]
//! screen_space = "virtual_desktop"   # or "primary" (default)
//! normalize_coordinates = true
//!
//! [logging]
//! level = "debug"
//!
//! [script]
//! click_at = [640, 360]
//! text = "hello"
//! chord = ["LControl", "A"]
//! scroll = -120
//! ```
//!
//! Every field has a default, so a missing file, a missing section or a
//! missing key all fall back to the values below.

use std::path::{Path, PathBuf};

use input_synth_core::{ScreenSpace, VirtualKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub script: ScriptConfig,
}

/// How the input builder interprets coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuilderConfig {
    /// Display area that absolute coordinates refer to.
    #[serde(default)]
    pub screen_space: ScreenSpace,
    /// Passed as the `normalized` argument of mouse operations: `true` means
    /// coordinates are pixels, `false` means they are already 0..=65535 units.
    #[serde(default = "default_true")]
    pub normalize_coordinates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// The one-shot input script the binary submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScriptConfig {
    /// Move the pointer here and left-click before typing.
    #[serde(default)]
    pub click_at: Option<[i32; 2]>,
    /// Unicode text to type.
    #[serde(default)]
    pub text: String,
    /// Keys pressed together after the text, released in reverse order.
    #[serde(default)]
    pub chord: Vec<VirtualKey>,
    /// Vertical wheel distance, 120 per notch; 0 to skip.
    #[serde(default)]
    pub scroll: i32,
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            screen_space: ScreenSpace::default(),
            normalize_coordinates: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or has wrongly
/// typed values.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads configuration from `path`, returning `AppConfig::default()` if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
