//! Configuration for Packmule
//!
//! An optional `packmule.toml` in the scanned root supplies defaults for
//! the output path, extension filter, and encoding. Precedence:
//! CLI flags > config file > built-in defaults. Unknown keys are surfaced
//! as warnings rather than rejected; malformed TOML is a hard error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};
use crate::models::Encoding;

/// Name of the optional per-project config file
pub const CONFIG_FILE_NAME: &str = "packmule.toml";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "assets.rs";

/// Default extension filter
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "wav", "ogg"];

/// Packmule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file path, relative to the scanned root
    pub output: PathBuf,

    /// Extensions to pack (case-insensitive, no leading dot)
    pub extensions: Vec<String>,

    /// Text encoding for the generated constants
    pub encoding: Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            encoding: Encoding::default(),
        }
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| PackError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from `root/packmule.toml` when present, defaults otherwise
    pub fn load_or_default(root: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_with_warnings(&path)
        } else {
            Ok((Self::default(), Vec::new()))
        }
    }
}
