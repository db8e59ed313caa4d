//! Shared helpers for CLI integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::path::Path;
use std::process::{Command, Output};

/// Path to the built packmule binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_packmule")
}

/// Run packmule with the given arguments
pub fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .output()
        .expect("failed to spawn packmule binary")
}

/// Deterministic pseudo-binary content for a fake sprite
pub fn sprite_bytes() -> Vec<u8> {
    (0..10_240usize).map(|i| (i * 31 % 251) as u8).collect()
}

/// Deterministic pseudo-binary content for a fake sound effect
pub fn jump_bytes() -> Vec<u8> {
    (0..5_120usize).map(|i| (i * 17 % 253) as u8).collect()
}

/// Lay down the standard fixture tree: sprite.png, jump.wav, readme.txt
pub fn write_asset_tree(root: &Path) {
    std::fs::write(root.join("sprite.png"), sprite_bytes()).unwrap();
    std::fs::write(root.join("jump.wav"), jump_bytes()).unwrap();
    std::fs::write(root.join("readme.txt"), b"not an asset").unwrap();
}

/// Pull the string literal of a named constant out of generated source
pub fn extract_const(content: &str, name: &str) -> String {
    let line = content
        .lines()
        .find(|l| l.starts_with(&format!("pub const {name}: ")))
        .unwrap_or_else(|| panic!("constant {name} not found in:\n{content}"));
    line.split('"').nth(1).expect("literal in const line").to_string()
}
