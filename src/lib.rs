//! Packmule - asset embedding compiler
//!
//! Packmule walks a directory of binary game assets (images, audio),
//! gzip-compresses each file, encodes the compressed bytes as text, and
//! emits a generated Rust source file containing one string constant per
//! asset, so assets compile directly into the game binary with no runtime
//! file I/O. The inverse transform is exposed as [`decode_asset`] for the
//! consuming program.

pub mod codec;
pub mod config;
pub mod emitter;
pub mod error;
pub mod models;
pub mod pack;
pub mod scanner;

// Re-exports for convenience
pub use codec::{decode_asset, CODEPOINT_OFFSET};
pub use config::{Config, ConfigWarning};
pub use error::{PackError, PackResult};
pub use models::{AssetEntry, AssetTable, ConstName, Encoding};
pub use pack::{check, compile, pack, CheckStatus, PackOptions, PackReport};
pub use scanner::{scan_directory, RawAsset};
