//! Packing pipeline
//!
//! Orchestrates scan -> compress/encode -> table -> render -> write.
//! `compile` is the pure half (no writes); `pack` adds the atomic output
//! write and `check` compares a fresh compile against the file on disk.

use std::path::PathBuf;

use crate::codec;
use crate::config::Config;
use crate::emitter;
use crate::error::PackResult;
use crate::models::{AssetEntry, AssetTable, ConstName, Encoding};
use crate::scanner;

/// Options for one packer run
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// Output file path; joined onto `root` when relative
    pub output: PathBuf,
    /// Extensions to pack (case-insensitive)
    pub extensions: Vec<String>,
    /// Text encoding for the generated constants
    pub encoding: Encoding,
}

impl PackOptions {
    /// Build options for `root` from a loaded config
    pub fn from_config(root: PathBuf, config: &Config) -> Self {
        Self {
            root,
            output: config.output.clone(),
            extensions: config.extensions.clone(),
            encoding: config.encoding,
        }
    }

    /// Absolute-ish output path (root-joined when relative)
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}

/// Per-asset summary for reports and progress output
#[derive(Debug, Clone, PartialEq)]
pub struct PackedAsset {
    pub name: ConstName,
    pub source_path: PathBuf,
    pub raw_len: usize,
    pub compressed_len: usize,
}

/// Result of the pure compile phase
#[derive(Debug, Clone)]
pub struct Compiled {
    /// Full text of the generated source file
    pub content: String,
    /// Packed assets in emission order
    pub assets: Vec<PackedAsset>,
}

/// Result of a pack run that wrote its output
#[derive(Debug, Clone)]
pub struct PackReport {
    /// Path the generated file was written to
    pub output: PathBuf,
    /// Packed assets in emission order
    pub assets: Vec<PackedAsset>,
}

/// Staleness verdict from [`check`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Output file matches a fresh compile
    UpToDate,
    /// Output file exists but differs
    Stale,
    /// Output file does not exist
    Missing,
}

/// Compile the asset tree to generated source, without writing anything
pub fn compile(options: &PackOptions) -> PackResult<Compiled> {
    let output_path = options.output_path();
    let raw_assets =
        scanner::scan_directory(&options.root, &options.extensions, Some(&output_path))?;

    let mut table = AssetTable::new();
    for asset in raw_assets {
        let (compressed, encoded) = codec::pack_bytes(&asset.bytes, options.encoding)?;
        table.insert(AssetEntry {
            name: asset.name,
            source_path: asset.source_path,
            encoded,
            raw_len: asset.bytes.len(),
            compressed_len: compressed.len(),
        })?;
    }
    table.sort_by_name();

    let content = emitter::render(&table, options.encoding);
    let assets = table
        .entries()
        .iter()
        .map(|e| PackedAsset {
            name: e.name.clone(),
            source_path: e.source_path.clone(),
            raw_len: e.raw_len,
            compressed_len: e.compressed_len,
        })
        .collect();

    Ok(Compiled { content, assets })
}

/// Compile and write the generated source file
pub fn pack(options: &PackOptions) -> PackResult<PackReport> {
    let compiled = compile(options)?;
    let output = options.output_path();
    emitter::atomic_write(&output, &compiled.content)?;
    Ok(PackReport {
        output,
        assets: compiled.assets,
    })
}

/// Compare a fresh compile against the output file on disk
pub fn check(options: &PackOptions) -> PackResult<CheckStatus> {
    let compiled = compile(options)?;
    let output = options.output_path();
    if !output.exists() {
        return Ok(CheckStatus::Missing);
    }
    let want = emitter::hash_content(compiled.content.as_bytes());
    let have = emitter::hash_file(&output)?;
    Ok(if want == have {
        CheckStatus::UpToDate
    } else {
        CheckStatus::Stale
    })
}
