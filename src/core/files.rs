//! Reading ESPN payloads saved to disk.

use serde_json::Value;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};
use tracing::debug;

use crate::Result;


/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read and parse a JSON payload. `-` reads from stdin.
pub fn read_json(path: &Path) -> Result<Value> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    } else {
        fs::read_to_string(path)?
    };
    debug!(path = %path.display(), bytes = raw.len(), "read payload");

    Ok(serde_json::from_str(&raw)?)
}
