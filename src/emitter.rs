//! Generated-source emission
//!
//! Renders the asset table into a Rust source file (doc header plus one
//! `pub const` per asset) and writes it atomically via tempfile + rename.
//! Content hashing backs the `check` command's staleness detection.

use std::fs;
use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{PackError, PackResult};
use crate::models::{AssetTable, Encoding};

/// Render the generated source file for a (sorted) asset table
///
/// Neither encoding alphabet can produce `"` or `\`, so encoded content is
/// embedded in plain string literals without escaping.
pub fn render(table: &AssetTable, encoding: Encoding) -> String {
    let mut out = String::new();
    out.push_str("//! Embedded game assets.\n");
    out.push_str("//!\n");
    out.push_str("//! @generated by `packmule pack`; do not edit by hand.\n");
    out.push_str("//!\n");
    out.push_str(&format!(
        "//! Constants hold gzip-compressed content in {encoding} encoding. Unpack at\n"
    ));
    out.push_str("//! runtime with `packmule::decode_asset`.\n\n");

    for entry in table.entries() {
        out.push_str(&format!(
            "pub const {}: &str = \"{}\";\n",
            entry.name, entry.encoded
        ));
    }
    out
}

/// Write content to a file atomically
///
/// Uses the tempfile + rename pattern so a failed run never leaves a
/// half-written output behind.
pub fn atomic_write(path: &Path, content: &str) -> PackResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| PackError::Io(e.error))?;
    Ok(())
}

/// Compute a `sha256:`-prefixed hash of content
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Compute the content hash of a file on disk
pub fn hash_file(path: &Path) -> PackResult<String> {
    Ok(hash_content(&fs::read(path)?))
}
