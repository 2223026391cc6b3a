//! The fantasy basketball `Player` record.
//!
//! Built once from a player fragment of any ESPN view (`kona_player_info`,
//! `mRoster`, free agents), optionally joined with the NBA schedule and the
//! player's news feed. Raw codes are resolved through [`crate::espn::constants`]
//! and every stat split for the requested season is kept, keyed by period:
//!
//! - `"2024_total"`, `"2024_projected"`, `"2024_last_7"`, ... for aggregate splits
//! - `"12"`, `"13"`, ... for single scoring periods

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fmt};
use tracing::{debug, trace};

use crate::{
    cli::types::{PlayerId, ProTeamId, ScoringPeriod, Season},
    error::{EspnError, Result},
    espn::{
        constants::{
            is_nine_cat_stat, is_percentage_stat, position_name, pro_team_name, stat_name,
            stat_split_label,
        },
        json::{find_i64, find_i64_list, find_key, find_str, require_i64, require_str},
        schedule::ProTeamSchedule,
        types::{NewsEnvelope, StatSplit},
    },
};


/// Stat name -> value for one period.
pub type StatLine = BTreeMap<String, f64>;

/// Opponent and tip-off for one scoring period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledGame {
    /// Opponent abbreviation, e.g. `"BOS"`.
    pub team: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub published: String,
    pub headline: String,
    pub story: String,
}

/// Stats for one period key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStats {
    /// Fantasy points earned (or projected) over the period.
    pub applied_total: f64,
    /// Fantasy points per game, rounded to two places.
    pub applied_avg: f64,
    /// Opponent, when the period is a single game day on the schedule.
    pub team: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// Per-game averages. `None` when ESPN sent totals only.
    pub avg: Option<StatLine>,
    /// Box-score totals. `None` when ESPN sent no breakdown at all.
    pub total: Option<StatLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    player_id: PlayerId,
    year: Season,
    position: String,
    lineup_slot: String,
    eligible_slots: Vec<String>,
    acquisition_type: Option<String>,
    pro_team: String,
    #[serde(skip)]
    pro_team_id: ProTeamId,
    injury_status: Option<String>,
    injured: bool,
    pos_rank: Option<i64>,
    expected_return_date: Option<NaiveDate>,
    schedule: BTreeMap<String, ScheduledGame>,
    news: Vec<NewsItem>,
    stats: BTreeMap<String, PeriodStats>,
    total_points: f64,
    avg_points: f64,
    projected_total_points: f64,
    projected_avg_points: f64,
    #[serde(skip)]
    nine_cat: OnceCell<StatLine>,
}

impl Player {
    /// Build a player from an ESPN player fragment.
    ///
    /// `data` must hold the player either under `playerPoolEntry.player`
    /// (roster views) or under `player` (player-pool views). Only stat
    /// splits whose `seasonId` equals `year` are kept.
    pub fn new(
        data: &Value,
        year: Season,
        pro_team_schedule: Option<&ProTeamSchedule>,
        news: Option<&Value>,
    ) -> Result<Self> {
        let name = require_str(data, "fullName")?;
        let player_id = require_i64(data, "id")?;
        let player_id = u64::try_from(player_id)
            .map(PlayerId::new)
            .map_err(|_| EspnError::invalid("id", "non-negative integer"))?;

        let default_position = require_i64(data, "defaultPositionId")?;
        let position = default_position
            .checked_sub(1)
            .and_then(position_name)
            .ok_or(EspnError::UnknownPosition {
                id: default_position,
            })?
            .to_string();

        // Top level only: nested lineupSlotIds belong to other entries.
        let lineup_slot = data
            .get("lineupSlotId")
            .and_then(Value::as_i64)
            .and_then(position_name)
            .unwrap_or_default()
            .to_string();

        let eligible_slots = find_i64_list(data, "eligibleSlots")?
            .into_iter()
            .map(|id| {
                position_name(id)
                    .map(str::to_string)
                    .ok_or(EspnError::UnknownPosition { id })
            })
            .collect::<Result<Vec<_>>>()?;

        let acquisition_type = find_str(data, "acquisitionType")?;

        let raw_team = require_i64(data, "proTeamId")?;
        let pro_team = pro_team_name(raw_team)
            .ok_or(EspnError::UnknownProTeam { id: raw_team })?
            .to_string();
        let pro_team_id = u32::try_from(raw_team)
            .map(ProTeamId::new)
            .map_err(|_| EspnError::UnknownProTeam { id: raw_team })?;

        let mut injury_status = find_str(data, "injuryStatus")?;
        let pos_rank = find_i64(data, "positionalRanking")?;
        let expected_return_date = parse_return_date(find_key(data, "expectedReturnDate"))?;

        let schedule = match pro_team_schedule {
            Some(s) => opponents_by_period(s, pro_team_id)?,
            None => BTreeMap::new(),
        };

        let news = match news {
            Some(n) => news_items(n)?,
            None => Vec::new(),
        };

        let player = match data.get("playerPoolEntry") {
            Some(entry) => entry.get("player"),
            None => data.get("player"),
        }
        .ok_or_else(|| EspnError::missing("player"))?;

        if let Some(status) = player.get("injuryStatus") {
            injury_status = match status {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                _ => return Err(EspnError::invalid("player.injuryStatus", "string")),
            };
        }
        let injured = player
            .get("injured")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let splits = match player.get("stats") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => Vec::<StatSplit>::deserialize(v)?,
        };

        let mut stats = BTreeMap::new();
        for split in splits.iter().filter(|s| s.season_id == year) {
            let key = Self::stat_id_pretty(&split.id, split.scoring_period_id);
            trace!(split = %split.id, %key, "stat split");
            let game = schedule.get(&key);

            let (avg, total) = if split.has_stats() {
                (
                    split.average_stats.as_ref().map(rename_stats),
                    split.stats.as_ref().map(rename_stats),
                )
            } else {
                (None, None)
            };

            stats.insert(
                key,
                PeriodStats {
                    applied_total: split.applied_total,
                    applied_avg: round_to(split.applied_average, 2),
                    team: game.map(|g| g.team.clone()),
                    date: game.map(|g| g.date),
                    avg,
                    total,
                },
            );
        }

        let season_total = stats.get(&format!("{year}_total"));
        let projected = stats.get(&format!("{year}_projected"));
        let total_points = season_total.map_or(0.0, |s| s.applied_total);
        let avg_points = season_total.map_or(0.0, |s| s.applied_avg);
        let projected_total_points = projected.map_or(0.0, |s| s.applied_total);
        let projected_avg_points = projected.map_or(0.0, |s| s.applied_avg);

        debug!(
            player = %name,
            id = %player_id,
            season = %year,
            periods = stats.len(),
            "built player"
        );

        Ok(Self {
            name,
            player_id,
            year,
            position,
            lineup_slot,
            eligible_slots,
            acquisition_type,
            pro_team,
            pro_team_id,
            injury_status,
            injured,
            pos_rank,
            expected_return_date,
            schedule,
            news,
            stats,
            total_points,
            avg_points,
            projected_total_points,
            projected_avg_points,
            nine_cat: OnceCell::new(),
        })
    }

    /// Turn an ESPN split id into a period key.
    ///
    /// Aggregate splits carry a two-character prefix followed by the season
    /// (`"002024"` -> `"2024_total"`, `"102024"` -> `"2024_projected"`).
    /// Anything else is a single scoring period and is keyed by its number.
    pub fn stat_id_pretty(id: &str, scoring_period: ScoringPeriod) -> String {
        match id.get(..2).and_then(stat_split_label) {
            Some(label) => format!("{}_{}", &id[2..], label),
            None => scoring_period.to_string(),
        }
    }

    /// Season per-game averages for the nine standard categories.
    ///
    /// Percentages are rounded to three places, counting stats to one.
    /// Empty when the season total split has no averages.
    pub fn nine_cat_averages(&self) -> &StatLine {
        self.nine_cat.get_or_init(|| {
            self.stats
                .get(&format!("{}_total", self.year))
                .and_then(|s| s.avg.as_ref())
                .map(|avg| {
                    avg.iter()
                        .filter(|(k, _)| is_nine_cat_stat(k))
                        .map(|(k, v)| {
                            let places = if is_percentage_stat(k) { 3 } else { 1 };
                            (k.clone(), round_to(*v, places))
                        })
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn year(&self) -> Season {
        self.year
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Fantasy lineup slot; empty for players not on a roster.
    pub fn lineup_slot(&self) -> &str {
        &self.lineup_slot
    }

    pub fn eligible_slots(&self) -> &[String] {
        &self.eligible_slots
    }

    pub fn acquisition_type(&self) -> Option<&str> {
        self.acquisition_type.as_deref()
    }

    pub fn pro_team(&self) -> &str {
        &self.pro_team
    }

    pub fn pro_team_id(&self) -> ProTeamId {
        self.pro_team_id
    }

    pub fn injury_status(&self) -> Option<&str> {
        self.injury_status.as_deref()
    }

    pub fn injured(&self) -> bool {
        self.injured
    }

    pub fn pos_rank(&self) -> Option<i64> {
        self.pos_rank
    }

    pub fn expected_return_date(&self) -> Option<NaiveDate> {
        self.expected_return_date
    }

    pub fn schedule(&self) -> &BTreeMap<String, ScheduledGame> {
        &self.schedule
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn stats(&self) -> &BTreeMap<String, PeriodStats> {
        &self.stats
    }

    /// Stats for a single period key (`"2024_total"`, `"17"`, ...).
    pub fn period(&self, key: &str) -> Option<&PeriodStats> {
        self.stats.get(key)
    }

    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    pub fn avg_points(&self) -> f64 {
        self.avg_points
    }

    pub fn projected_total_points(&self) -> f64 {
        self.projected_total_points
    }

    pub fn projected_avg_points(&self) -> f64 {
        self.projected_avg_points
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player({})", self.name)
    }
}

/// Round to `places` decimals on the exact binary value, exact ties to even.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Rename raw stat ids to abbreviations. Unknown ids keep their raw id;
/// ids mapped to an empty name are dropped.
fn rename_stats(raw: &BTreeMap<String, f64>) -> StatLine {
    raw.iter()
        .filter_map(|(id, value)| match stat_name(id) {
            Some("") => None,
            Some(name) => Some((name.to_string(), *value)),
            None => Some((id.clone(), *value)),
        })
        .collect()
}

/// `expectedReturnDate` arrives as `[year, month, day]`.
fn parse_return_date(value: Option<&Value>) -> Result<Option<NaiveDate>> {
    let parts = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(parts)) if parts.is_empty() => return Ok(None),
        Some(Value::Array(parts)) => parts,
        Some(other) => {
            return Err(EspnError::InvalidDate {
                field: "expectedReturnDate".to_string(),
                value: other.to_string(),
            })
        }
    };

    let invalid = || EspnError::InvalidDate {
        field: "expectedReturnDate".to_string(),
        value: Value::Array(parts.clone()).to_string(),
    };

    let nums = parts
        .iter()
        .map(Value::as_i64)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;
    let [y, m, d] = nums[..] else {
        return Err(invalid());
    };

    let date = i32::try_from(y)
        .ok()
        .zip(u32::try_from(m).ok())
        .zip(u32::try_from(d).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or_else(invalid)?;
    Ok(Some(date))
}

/// Opponent and date of the first game in each of `team`'s scoring periods.
fn opponents_by_period(
    schedule: &ProTeamSchedule,
    team: ProTeamId,
) -> Result<BTreeMap<String, ScheduledGame>> {
    let Some(games) = schedule.team(team) else {
        return Ok(BTreeMap::new());
    };

    let mut out = BTreeMap::new();
    for (period, period_games) in games {
        let Some(game) = period_games.first() else {
            continue;
        };
        let opponent = game.opponent_of(team);
        let opponent_id = i64::from(opponent.as_u32());
        let opponent_name = pro_team_name(opponent_id)
            .ok_or(EspnError::UnknownProTeam { id: opponent_id })?
            .to_string();
        let date = DateTime::<Utc>::from_timestamp_millis(game.date).ok_or_else(|| {
            EspnError::InvalidDate {
                field: "date".to_string(),
                value: game.date.to_string(),
            }
        })?;
        out.insert(
            period.clone(),
            ScheduledGame {
                team: opponent_name,
                date,
            },
        );
    }
    Ok(out)
}

fn news_items(news: &Value) -> Result<Vec<NewsItem>> {
    let feed = NewsEnvelope::deserialize(news)?.into_feed();
    Ok(feed
        .into_iter()
        .map(|item| NewsItem {
            published: item.published.unwrap_or_default(),
            headline: item.headline.unwrap_or_default(),
            story: item.story.unwrap_or_default(),
        })
        .collect())
}
