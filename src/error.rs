//! Error types for Packmule
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Packmule operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for Packmule operations
#[derive(Error, Debug)]
pub enum PackError {
    /// IO error (unreadable asset, unwritable output, ...)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Root directory does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The extension filter resolved to an empty set
    #[error("extension filter is empty - nothing would ever be packed")]
    EmptyExtensionFilter,

    /// A derived constant name is not a valid identifier
    #[error("derived name '{name}' for {file} is not a valid identifier")]
    InvalidConstName { name: String, file: PathBuf },

    /// Two asset files derive the same constant name
    #[error("constant name '{name}' collides: {first} and {second}")]
    NameCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Config file exists but cannot be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Embedded payload cannot be decoded back to bytes
    #[error("invalid {encoding} payload: {message}")]
    Decode { encoding: String, message: String },

    /// Decoded payload is not a valid gzip stream
    #[error("corrupt compressed data: {0}")]
    Decompress(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_collision() {
        let err = PackError::NameCollision {
            name: "PNG_X".to_string(),
            first: PathBuf::from("a/x.png"),
            second: PathBuf::from("b/x.png"),
        };
        assert_eq!(
            err.to_string(),
            "constant name 'PNG_X' collides: a/x.png and b/x.png"
        );
    }

    #[test]
    fn test_error_display_invalid_name() {
        let err = PackError::InvalidConstName {
            name: "PNG_8BIT".to_string(),
            file: PathBuf::from("sprites/8bit.png"),
        };
        assert_eq!(
            err.to_string(),
            "derived name 'PNG_8BIT' for sprites/8bit.png is not a valid identifier"
        );
    }

    #[test]
    fn test_error_display_directory_not_found() {
        let err = PackError::DirectoryNotFound {
            path: PathBuf::from("no/such/dir"),
        };
        assert_eq!(err.to_string(), "directory not found: no/such/dir");
    }
}
