//! Player data and nine-category command implementations

use std::fmt::Write as _;
use tracing::info;

use crate::{
    espn::{constants::NINE_CAT_STATS, player::Player},
    models::{NineCatLine, PlayerSummary},
    Result, Season,
};

use super::common::{load_player, resolve_season, PlayerSources};

/// Parameters for the player data command
#[derive(Debug)]
pub struct PlayerDataParams {
    pub sources: PlayerSources,
    pub season: Option<Season>,
    pub as_json: bool,
    pub verbose: bool,
}

/// Handle the player data command
pub fn handle_player_data(params: PlayerDataParams) -> Result<()> {
    let season = resolve_season(params.season)?;
    let player = load_player(&params.sources, season)?;
    info!(player = %player, periods = player.stats().len(), "player loaded");

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&player)?);
    } else {
        print!("{}", render_player(&player, params.verbose));
    }

    Ok(())
}

/// Handle the nine-category averages command
pub fn handle_nine_cat(sources: PlayerSources, season: Option<Season>, as_json: bool) -> Result<()> {
    let season = resolve_season(season)?;
    let player = load_player(&sources, season)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&NineCatLine::from(&player))?);
    } else {
        println!("{}", render_nine_cat(&player));
    }

    Ok(())
}

/// Text output: one summary line, plus periods and news when `verbose`.
pub fn render_player(player: &Player, verbose: bool) -> String {
    let summary = PlayerSummary::from(player);
    let mut out = String::new();

    let _ = write!(
        out,
        "{} ({}, {}) [{}] season {}: {:.2} pts ({:.2}/g), projected {:.2} ({:.2}/g)",
        summary.name,
        summary.position,
        summary.pro_team,
        summary.id,
        summary.season,
        summary.total_points,
        summary.avg_points,
        summary.projected_total_points,
        summary.projected_avg_points,
    );
    if let Some(status) = summary.injury_status.as_deref() {
        let _ = write!(out, " - {status}");
    }
    out.push('\n');

    if !verbose {
        return out;
    }

    for (key, period) in player.stats() {
        let _ = write!(
            out,
            "  {key:<16} {:>9.2} {:>7.2}",
            period.applied_total, period.applied_avg
        );
        if let (Some(team), Some(date)) = (&period.team, &period.date) {
            let _ = write!(out, "  vs {team} {}", date.format("%Y-%m-%d"));
        }
        out.push('\n');
    }
    for item in player.news() {
        let _ = writeln!(out, "  * {} {}", item.published, item.headline);
    }

    out
}

/// Text output for the nine categories.
pub fn render_nine_cat(player: &Player) -> String {
    let averages = player.nine_cat_averages();
    if averages.is_empty() {
        return format!("{}: no {} season averages", player.name(), player.year());
    }

    let cats: Vec<String> = NINE_CAT_STATS
        .iter()
        .filter_map(|cat| averages.get(*cat).map(|v| format!("{cat} {v}")))
        .collect();
    format!("{}: {}", player.name(), cats.join(" | "))
}
