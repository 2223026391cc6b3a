//! ID types for ESPN Fantasy Basketball.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for ESPN player IDs.
///
/// # Examples
///
/// ```rust
/// use espn_fba::PlayerId;
///
/// let player_id = PlayerId::new(3112335);
/// assert_eq!(player_id.as_u64(), 3112335);
/// assert_eq!(player_id.to_string(), "3112335");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ESPN's numeric NBA team id (`proTeamId`). `0` is free agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProTeamId(pub u32);

impl ProTeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProTeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
