//! Compression and text encoding for embedded assets
//!
//! The packing transform is gzip followed by a text encoding; the runtime
//! half (`decode_asset`) is the exact inverse, exposed so consuming
//! programs can unpack the generated constants at startup.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{PackError, PackResult};
use crate::models::Encoding;

/// Offset added to each byte by the legacy codepoint encoding.
///
/// Shifts byte values into U+00BA..U+01B9, all of which are plain `char`s
/// that need no escaping inside a string literal.
pub const CODEPOINT_OFFSET: u32 = 186;

/// Gzip-compress a byte buffer
pub fn compress(bytes: &[u8]) -> PackResult<Vec<u8>> {
    // mtime defaults to zero, keeping output byte-stable across runs
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Decompress a gzip stream produced by [`compress`]
pub fn decompress(bytes: &[u8]) -> PackResult<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(PackError::Decompress)?;
    Ok(out)
}

/// Encode compressed bytes as embeddable text
pub fn encode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Base64 => STANDARD.encode(bytes),
        Encoding::Codepoint => bytes
            .iter()
            .map(|&b| {
                char::from_u32(u32::from(b) + CODEPOINT_OFFSET)
                    .expect("offset keeps codepoints well below the surrogate range")
            })
            .collect(),
    }
}

/// Decode embeddable text back to compressed bytes
pub fn decode(text: &str, encoding: Encoding) -> PackResult<Vec<u8>> {
    match encoding {
        Encoding::Base64 => STANDARD.decode(text).map_err(|e| PackError::Decode {
            encoding: encoding.to_string(),
            message: e.to_string(),
        }),
        Encoding::Codepoint => text
            .chars()
            .map(|c| {
                (c as u32)
                    .checked_sub(CODEPOINT_OFFSET)
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| PackError::Decode {
                        encoding: encoding.to_string(),
                        message: format!("codepoint U+{:04X} outside encoded range", c as u32),
                    })
            })
            .collect(),
    }
}

/// Full packing transform: gzip then encode
pub fn pack_bytes(raw: &[u8], encoding: Encoding) -> PackResult<(Vec<u8>, String)> {
    let compressed = compress(raw)?;
    let encoded = encode(&compressed, encoding);
    Ok((compressed, encoded))
}

/// Runtime inverse of the packing transform: decode then gunzip
///
/// This is the function consuming programs call on a generated constant.
pub fn decode_asset(text: &str, encoding: Encoding) -> PackResult<Vec<u8>> {
    let compressed = decode(text, encoding)?;
    decompress(&compressed)
}
