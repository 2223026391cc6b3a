//! Core utilities for the ESPN Fantasy Basketball CLI
//!
//! - `files`: reading ESPN payloads from disk or stdin

pub mod files;

pub use files::{read_json, STDIN_PATH};
