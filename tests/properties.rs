//! Property tests for Packmule.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "round-trips".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/codec.rs"]
mod codec;

#[path = "properties/names.rs"]
mod names;
