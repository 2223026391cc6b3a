//! Tests for command helpers

use super::common::*;
use super::player_data::*;
use crate::{error::EspnError, Season, SEASON_ENV_VAR};
use serde_json::json;
use tempfile::TempDir;

#[cfg(test)]
mod command_tests {
    use super::*;

    fn player_payload() -> serde_json::Value {
        json!({
            "lineupSlotId": 3,
            "playerPoolEntry": {
                "player": {
                    "id": 3032977,
                    "fullName": "Giannis Antetokounmpo",
                    "defaultPositionId": 4,
                    "eligibleSlots": [3, 6, 10, 11, 12],
                    "proTeamId": 15,
                    "injuryStatus": "QUESTIONABLE",
                    "stats": [
                        {
                            "id": "002024",
                            "seasonId": 2024,
                            "scoringPeriodId": 0,
                            "appliedTotal": 3700.25,
                            "appliedAverage": 50.6883,
                            "stats": { "0": 2222.0 },
                            "averageStats": { "0": 30.44, "6": 11.52, "19": 0.6114, "40": 35.2 }
                        },
                        {
                            "id": "102024",
                            "seasonId": 2024,
                            "scoringPeriodId": 0,
                            "appliedTotal": 3900.0,
                            "appliedAverage": 52.0
                        },
                        {
                            "id": "0524x",
                            "seasonId": 2024,
                            "scoringPeriodId": 2,
                            "appliedTotal": 58.0,
                            "appliedAverage": 58.0
                        }
                    ]
                }
            }
        })
    }

    fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_resolve_season_from_option() {
        let season = resolve_season(Some(Season::new(2023))).unwrap();
        assert_eq!(season.as_u16(), 2023);
    }

    #[test]
    fn test_resolve_season_env_cases() {
        // One test so the env var is not raced by parallel tests.
        std::env::remove_var(SEASON_ENV_VAR);
        match resolve_season(None).unwrap_err() {
            EspnError::MissingSeason { env_var } => assert_eq!(env_var, SEASON_ENV_VAR),
            other => panic!("Expected MissingSeason error, got {other:?}"),
        }

        std::env::set_var(SEASON_ENV_VAR, "2025");
        assert_eq!(resolve_season(None).unwrap().as_u16(), 2025);

        std::env::set_var(SEASON_ENV_VAR, "next year");
        assert!(matches!(
            resolve_season(None),
            Err(EspnError::InvalidSeason(_))
        ));

        std::env::remove_var(SEASON_ENV_VAR);
    }

    #[test]
    fn test_load_player_from_files() {
        let dir = TempDir::new().unwrap();
        let mut sources = PlayerSources::new(write_json(&dir, "player.json", &player_payload()));
        sources.schedule = Some(write_json(
            &dir,
            "schedule.json",
            &json!({
                "settings": {
                    "proTeams": [{
                        "id": 15,
                        "proGamesByScoringPeriod": {
                            "2": [{ "awayProTeamId": 4, "homeProTeamId": 15, "date": 1_698_202_800_000_i64 }]
                        }
                    }]
                }
            }),
        ));
        sources.news = Some(write_json(
            &dir,
            "news.json",
            &json!({ "news": { "feed": [{ "headline": "Giannis questionable" }] } }),
        ));

        let player = load_player(&sources, Season::new(2024)).unwrap();
        assert_eq!(player.name(), "Giannis Antetokounmpo");
        assert_eq!(player.position(), "PF");
        assert_eq!(player.lineup_slot(), "PF");
        assert_eq!(player.pro_team(), "MIL");
        assert_eq!(player.period("2").unwrap().team.as_deref(), Some("CHI"));
        assert_eq!(player.news()[0].headline, "Giannis questionable");
    }

    #[test]
    fn test_load_player_missing_file() {
        let dir = TempDir::new().unwrap();
        let sources = PlayerSources::new(dir.path().join("missing.json"));
        assert!(matches!(
            load_player(&sources, Season::new(2024)),
            Err(EspnError::Io(_))
        ));
    }

    #[test]
    fn test_render_player_summary() {
        let dir = TempDir::new().unwrap();
        let sources = PlayerSources::new(write_json(&dir, "player.json", &player_payload()));
        let player = load_player(&sources, Season::new(2024)).unwrap();

        let text = render_player(&player, false);
        assert_eq!(
            text,
            "Giannis Antetokounmpo (PF, MIL) [3032977] season 2024: 3700.25 pts (50.69/g), \
             projected 3900.00 (52.00/g) - QUESTIONABLE\n"
        );
    }

    #[test]
    fn test_render_player_verbose_lists_periods() {
        let dir = TempDir::new().unwrap();
        let sources = PlayerSources::new(write_json(&dir, "player.json", &player_payload()));
        let player = load_player(&sources, Season::new(2024)).unwrap();

        let text = render_player(&player, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with("2"));
        assert!(lines[1].contains("58.00"));
        assert!(lines[2].contains("2024_projected"));
        assert!(lines[3].contains("2024_total"));
    }

    #[test]
    fn test_render_nine_cat() {
        let dir = TempDir::new().unwrap();
        let sources = PlayerSources::new(write_json(&dir, "player.json", &player_payload()));
        let player = load_player(&sources, Season::new(2024)).unwrap();

        assert_eq!(
            render_nine_cat(&player),
            "Giannis Antetokounmpo: FG% 0.611 | PTS 30.4 | REB 11.5"
        );
    }

    #[test]
    fn test_render_nine_cat_without_averages() {
        let dir = TempDir::new().unwrap();
        let sources = PlayerSources::new(write_json(&dir, "player.json", &player_payload()));
        let player = load_player(&sources, Season::new(2023)).unwrap();

        assert_eq!(
            render_nine_cat(&player),
            "Giannis Antetokounmpo: no 2023 season averages"
        );
    }
}
