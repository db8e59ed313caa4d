//! Core data models for Packmule
//!
//! Defines the fundamental data structures used throughout Packmule:
//! - `ConstName`: validated constant identifier derived from an asset path
//! - `AssetEntry`: one packed asset (name, source path, encoded content)
//! - `AssetTable`: ordered, collision-rejecting collection of entries
//! - `Encoding`: text encoding strategy for the generated constants

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// Text encoding strategy for embedded constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Standard base64 with padding (portable, recommended)
    #[default]
    Base64,
    /// Legacy scheme: each byte shifted by a fixed offset into a codepoint
    Codepoint,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Base64 => write!(f, "base64"),
            Encoding::Codepoint => write!(f, "codepoint"),
        }
    }
}

/// Constant name value object
///
/// Derived from an asset path as `UPPER(ext) + "_" + UPPER(stem)` and
/// validated on construction: ASCII alphanumerics and underscore only,
/// first character not a digit. Invalid names are rejected rather than
/// sanitized, so the diagnostic points at the file to rename.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstName(String);

impl ConstName {
    /// Derive a constant name from an asset file path
    pub fn derive(path: &Path) -> PackResult<Self> {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let name = format!("{}_{}", ext.to_uppercase(), stem.to_uppercase());

        if stem.is_empty() || ext.is_empty() || !Self::is_valid(&name) {
            return Err(PackError::InvalidConstName {
                name,
                file: path.to_path_buf(),
            });
        }
        Ok(Self(name))
    }

    /// Check identifier rules: ASCII alphanumerics and underscore only,
    /// must not start with a digit
    fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => return false,
            Some(c) if !(c.is_ascii_alphanumeric() || c == '_') => return false,
            Some(_) => {}
            None => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ConstName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One packed asset: derived name plus encoded compressed content
#[derive(Debug, Clone, PartialEq)]
pub struct AssetEntry {
    /// Derived constant name
    pub name: ConstName,

    /// Source file path relative to the scanned root
    pub source_path: PathBuf,

    /// Encoded compressed content, ready to embed as a string literal
    pub encoded: String,

    /// Size of the raw file in bytes
    pub raw_len: usize,

    /// Size after compression, before text encoding
    pub compressed_len: usize,
}

/// Ordered mapping from constant name to asset entry, scoped to one run
///
/// Insertion preserves order; a second entry with an existing name is a
/// hard error naming both source paths.
#[derive(Debug, Default)]
pub struct AssetTable {
    entries: Vec<AssetEntry>,
    index: HashMap<String, usize>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, failing on a constant-name collision
    pub fn insert(&mut self, entry: AssetEntry) -> PackResult<()> {
        if let Some(&existing) = self.index.get(entry.name.as_str()) {
            return Err(PackError::NameCollision {
                name: entry.name.to_string(),
                first: self.entries[existing].source_path.clone(),
                second: entry.source_path,
            });
        }
        self.index.insert(entry.name.to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Sort entries by constant name for deterministic emission
    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.to_string(), i))
            .collect();
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
