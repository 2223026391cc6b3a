//! Common utilities and helper functions shared across commands.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    core::read_json,
    error::EspnError,
    espn::{player::Player, schedule::ProTeamSchedule},
    Result, Season, SEASON_ENV_VAR,
};

/// Saved payloads a player is built from.
#[derive(Debug, Clone)]
pub struct PlayerSources {
    pub data: PathBuf,
    pub schedule: Option<PathBuf>,
    pub news: Option<PathBuf>,
}

impl PlayerSources {
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self {
            data: data.into(),
            schedule: None,
            news: None,
        }
    }
}

/// Resolve season from option or environment variable
pub fn resolve_season(season: Option<Season>) -> Result<Season> {
    if let Some(season) = season {
        return Ok(season);
    }
    match std::env::var(SEASON_ENV_VAR) {
        Ok(s) => s.parse::<Season>(),
        Err(_) => Err(EspnError::MissingSeason {
            env_var: SEASON_ENV_VAR.to_string(),
        }),
    }
}

/// Read the payloads and build the player for `season`.
pub fn load_player(sources: &PlayerSources, season: Season) -> Result<Player> {
    let data = read_json(&sources.data)?;
    let schedule = sources
        .schedule
        .as_deref()
        .map(load_schedule)
        .transpose()?;
    let news = sources.news.as_deref().map(read_json).transpose()?;

    Player::new(&data, season, schedule.as_ref(), news.as_ref())
}

fn load_schedule(path: &Path) -> Result<ProTeamSchedule> {
    debug!(path = %path.display(), "loading pro team schedule");
    ProTeamSchedule::from_pro_teams(&read_json(path)?)
}
