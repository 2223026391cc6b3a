//! Type-safe wrappers for ESPN Fantasy Basketball identifiers.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, ProTeamId};
pub use time::{ScoringPeriod, Season};
