//! NBA schedule keyed by pro team and scoring period.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    cli::types::ProTeamId,
    error::{EspnError, Result},
    espn::types::ProGame,
};


/// Games for one team, keyed by scoring period id (as a string, the way
/// ESPN keys `proGamesByScoringPeriod`).
pub type TeamGames = BTreeMap<String, Vec<ProGame>>;

/// Every pro team's games by scoring period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProTeamSchedule {
    teams: BTreeMap<ProTeamId, TeamGames>,
}

impl ProTeamSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, team: ProTeamId, period: impl Into<String>, games: Vec<ProGame>) {
        self.teams
            .entry(team)
            .or_default()
            .insert(period.into(), games);
    }

    pub fn team(&self, team: ProTeamId) -> Option<&TeamGames> {
        self.teams.get(&team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Build from the `proTeams` payload (`view=proTeamSchedules_wl`).
    ///
    /// Accepts the full response (`{"settings": {"proTeams": [...]}}`), the
    /// bare `proTeams` array, an object holding it, or a map that is already
    /// keyed by team id (`{"13": {"1": [game, ...]}}`).
    pub fn from_pro_teams(value: &Value) -> Result<Self> {
        if let Some(settings) = value.get("settings") {
            return Self::from_pro_teams(settings);
        }
        if let Some(pro_teams) = value.get("proTeams") {
            return Self::from_pro_teams(pro_teams);
        }

        let mut schedule = Self::new();
        match value {
            Value::Array(teams) => {
                for team in teams {
                    let id = team
                        .get("id")
                        .and_then(Value::as_u64)
                        .and_then(|id| u32::try_from(id).ok())
                        .ok_or_else(|| EspnError::missing("proTeams[].id"))?;
                    let Some(games) = team.get("proGamesByScoringPeriod") else {
                        continue;
                    };
                    schedule.teams.insert(ProTeamId::new(id), TeamGames::deserialize(games)?);
                }
            }
            Value::Object(keyed) => {
                for (id, games) in keyed {
                    let id: u32 = id
                        .parse()
                        .map_err(|_| EspnError::invalid("proTeams", "integer team id keys"))?;
                    schedule.teams.insert(ProTeamId::new(id), TeamGames::deserialize(games)?);
                }
            }
            _ => return Err(EspnError::invalid("proTeams", "array or object")),
        }

        debug!(teams = schedule.len(), "loaded pro team schedule");
        Ok(schedule)
    }
}
