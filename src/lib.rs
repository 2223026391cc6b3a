//! ESPN Fantasy Basketball Player Library
//!
//! Turns the loosely-structured player JSON served by the ESPN fantasy API
//! into a typed [`Player`] record: position, team and stat codes resolved to
//! names, every stat split of a season keyed by period, and season/projection
//! summaries derived from them.
//!
//! ## Features
//!
//! - **Any ESPN view**: roster entries (`playerPoolEntry.player`) and player-pool entries (`player`)
//! - **Stat periods**: season totals, projections, last 7/15/30 days and single game days
//! - **Schedule join**: opponent and tip-off attached to each game day
//! - **Nine-category averages**: computed on first use and cached
//!
//! ## Quick Start
//!
//! ```rust
//! use espn_fba::{Player, Season};
//! use serde_json::json;
//!
//! # fn example() -> espn_fba::Result<()> {
//! let data = json!({
//!     "player": {
//!         "id": 3112335,
//!         "fullName": "Nikola Jokic",
//!         "defaultPositionId": 5,
//!         "proTeamId": 7,
//!         "stats": [{
//!             "id": "002024",
//!             "seasonId": 2024,
//!             "scoringPeriodId": 0,
//!             "appliedTotal": 4321.5,
//!             "appliedAverage": 54.6995
//!         }]
//!     }
//! });
//!
//! let player = Player::new(&data, Season::new(2024), None, None)?;
//! assert_eq!(player.position(), "C");
//! assert_eq!(player.pro_team(), "DEN");
//! assert_eq!(player.avg_points(), 54.7);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the season to avoid passing it in every command:
//! ```bash
//! export ESPN_FBA_SEASON=2024
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod models;

// Re-export commonly used types
pub use cli::types::{PlayerId, ProTeamId, ScoringPeriod, Season};
pub use error::{EspnError, Result};
pub use espn::{
    player::{NewsItem, PeriodStats, Player, ScheduledGame},
    schedule::ProTeamSchedule,
};

pub const SEASON_ENV_VAR: &str = "ESPN_FBA_SEASON";
