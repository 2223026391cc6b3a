//! Output models used for printing and JSON serialization.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{espn::player::Player, PlayerId, Season};

/// Headline numbers for one player.
///
/// This structure is designed for easy JSON serialization and one-line text output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    /// ESPN player ID.
    pub id: PlayerId,
    /// Player full name.
    pub name: String,
    pub season: Season,
    pub position: String,
    pub pro_team: String,
    pub injury_status: Option<String>,
    /// Season fantasy points (`{season}_total`).
    pub total_points: f64,
    pub avg_points: f64,
    /// Projected fantasy points (`{season}_projected`).
    pub projected_total_points: f64,
    pub projected_avg_points: f64,
}

impl From<&Player> for PlayerSummary {
    fn from(p: &Player) -> Self {
        Self {
            id: p.player_id(),
            name: p.name().to_string(),
            season: p.year(),
            position: p.position().to_string(),
            pro_team: p.pro_team().to_string(),
            injury_status: p.injury_status().map(str::to_string),
            total_points: p.total_points(),
            avg_points: p.avg_points(),
            projected_total_points: p.projected_total_points(),
            projected_avg_points: p.projected_avg_points(),
        }
    }
}

/// Nine-category season averages for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NineCatLine {
    pub id: PlayerId,
    pub name: String,
    pub season: Season,
    pub averages: BTreeMap<String, f64>,
}

impl From<&Player> for NineCatLine {
    fn from(p: &Player) -> Self {
        Self {
            id: p.player_id(),
            name: p.name().to_string(),
            season: p.year(),
            averages: p.nine_cat_averages().clone(),
        }
    }
}
