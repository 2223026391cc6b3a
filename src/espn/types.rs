use crate::cli::types::{ProTeamId, ScoringPeriod, Season};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// One entry of a player's `stats` array.
///
/// ESPN emits a split per (season, period kind, source): season totals,
/// projections, rolling windows and single scoring periods all share
/// this shape and are told apart by `id`. `statSourceId` and
/// `statSplitTypeId` repeat what the id prefix says and are not kept.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatSplit {
    /// Split id such as `"002024"` (2024 season total) or `"012024"` (last 7 days).
    pub id: String,
    #[serde(rename = "seasonId")]
    pub season_id: Season,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: ScoringPeriod,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: f64,
    #[serde(rename = "appliedAverage", default)]
    pub applied_average: f64,
    /// Raw stat id -> value. Absent for splits ESPN has not filled in yet.
    #[serde(default)]
    pub stats: Option<BTreeMap<String, f64>>,
    #[serde(rename = "averageStats", default)]
    pub average_stats: Option<BTreeMap<String, f64>>,
}

impl StatSplit {
    /// True when the split carries a non-empty box-score breakdown.
    pub fn has_stats(&self) -> bool {
        self.stats.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// A single NBA game from `proGamesByScoringPeriod`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProGame {
    #[serde(rename = "awayProTeamId")]
    pub away_pro_team_id: ProTeamId,
    #[serde(rename = "homeProTeamId")]
    pub home_pro_team_id: ProTeamId,
    /// Tip-off, epoch milliseconds.
    pub date: i64,
}

impl ProGame {
    /// The team on the other side of the ball from `team`.
    pub fn opponent_of(&self, team: ProTeamId) -> ProTeamId {
        if self.away_pro_team_id != team {
            self.away_pro_team_id
        } else {
            self.home_pro_team_id
        }
    }
}

/// Top-level envelope of the player news endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsEnvelope {
    #[serde(default)]
    pub news: Option<NewsBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsBody {
    #[serde(default)]
    pub feed: Vec<RawNewsItem>,
}

/// News item as ESPN sends it; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNewsItem {
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
}

impl NewsEnvelope {
    pub fn into_feed(self) -> Vec<RawNewsItem> {
        self.news.map(|n| n.feed).unwrap_or_default()
    }
}
