//! Directory scanner for asset files
//!
//! Walks a root directory recursively, selects files by case-insensitive
//! extension match, loads their raw bytes, and derives the constant name
//! for each. Hidden directories are skipped; the generated output file is
//! never picked up as an asset.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{PackError, PackResult};
use crate::models::ConstName;

/// A matched asset file with its raw content, before compression
#[derive(Debug, Clone, PartialEq)]
pub struct RawAsset {
    /// Derived constant name
    pub name: ConstName,

    /// Path relative to the scanned root
    pub source_path: PathBuf,

    /// Full file content
    pub bytes: Vec<u8>,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
}

fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .map(|e| extensions.iter().any(|want| *want == e))
        .unwrap_or(false)
}

/// Scan `root` recursively for asset files matching `extensions`
///
/// `exclude` is the output file path; if it lives inside the scanned tree
/// it is skipped so repeated runs stay idempotent. Returned assets are in
/// lexical walk order; emission order is decided later by the asset table.
pub fn scan_directory(
    root: &Path,
    extensions: &[String],
    exclude: Option<&Path>,
) -> PackResult<Vec<RawAsset>> {
    if !root.is_dir() {
        return Err(PackError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if extensions.is_empty() {
        return Err(PackError::EmptyExtensionFilter);
    }

    let extensions: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();
    let exclude = exclude.and_then(|p| fs::canonicalize(p).ok());

    let mut assets = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_matching_extension(path, &extensions) {
            continue;
        }
        if let Some(exclude) = &exclude {
            if fs::canonicalize(path).is_ok_and(|p| p == *exclude) {
                continue;
            }
        }

        let name = ConstName::derive(path)?;
        let bytes = fs::read(path)?;
        let source_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        assets.push(RawAsset {
            name,
            source_path,
            bytes,
        });
    }

    Ok(assets)
}
