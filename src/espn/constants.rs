//! Static lookup tables for ESPN Fantasy Basketball.
//!
//! ESPN returns positions, NBA teams and box-score stats as bare integer
//! codes (stats as stringified integers). These tables turn them into the
//! abbreviations fantasy players actually read.


/// Position / lineup slot names indexed by ESPN slot id.
///
/// Slot 14 is an unused slot and maps to the empty string.
pub const POSITION_MAP: [&str; 16] = [
    "PG", "SG", "SF", "PF", "C", "G", "F", "SG/SF", "G/F", "PF/C", "F/C", "UT", "BE", "IR", "",
    "Rookie",
];

/// NBA team abbreviations indexed by ESPN `proTeamId`. `0` is a free agent.
pub const PRO_TEAM_MAP: [&str; 31] = [
    "FA", "ATL", "BOS", "NOP", "CHI", "CLE", "DAL", "DEN", "DET", "GSW", "HOU", "IND", "LAC",
    "LAL", "MIA", "MIL", "MIN", "BKN", "NYK", "ORL", "PHL", "PHO", "POR", "SAC", "SAS", "OKC",
    "UTA", "WAS", "TOR", "MEM", "CHA",
];

/// ESPN stat id to stat abbreviation.
///
/// Ids mapped to `""` are internal ESPN counters and are hidden from the
/// per-period breakdowns.
pub const STATS_MAP: &[(&str, &str)] = &[
    ("0", "PTS"),
    ("1", "BLK"),
    ("2", "STL"),
    ("3", "AST"),
    ("4", "OREB"),
    ("5", "DREB"),
    ("6", "REB"),
    ("7", "EJ"),
    ("8", "FF"),
    ("9", "PF"),
    ("10", "TF"),
    ("11", "TO"),
    ("12", "DQ"),
    ("13", "FGM"),
    ("14", "FGA"),
    ("15", "FTM"),
    ("16", "FTA"),
    ("17", "3PM"),
    ("18", "3PA"),
    ("19", "FG%"),
    ("20", "FT%"),
    ("21", "3PT%"),
    ("22", ""),
    ("23", ""),
    ("24", ""),
    ("25", ""),
    ("26", ""),
    ("27", ""),
    ("28", "MPG"),
    ("29", ""),
    ("30", ""),
    ("31", ""),
    ("32", ""),
    ("33", ""),
    ("34", ""),
    ("35", ""),
    ("36", ""),
    ("37", ""),
    ("38", ""),
    ("39", ""),
    ("40", "MIN"),
    ("41", "GS"),
    ("42", "GP"),
    ("43", ""),
    ("44", ""),
    ("45", ""),
];

/// Two-character stat split prefix to period label.
///
/// A split id such as `"002024"` is `"00"` + season, i.e. the 2024 season
/// total. Ids with any other prefix are single scoring periods.
pub const STAT_ID_MAP: &[(&str, &str)] = &[
    ("00", "total"),
    ("10", "projected"),
    ("01", "last_7"),
    ("02", "last_15"),
    ("03", "last_30"),
];

/// The standard nine-category head-to-head stats.
pub const NINE_CAT_STATS: [&str; 9] = ["3PM", "AST", "BLK", "FG%", "FT%", "PTS", "REB", "STL", "TO"];

/// Stats reported as percentages; rounded to three places instead of one.
pub const PERCENTAGE_STATS: [&str; 2] = ["FG%", "FT%"];

/// Look up a position or lineup slot name by ESPN slot id.
pub fn position_name(id: i64) -> Option<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|idx| POSITION_MAP.get(idx))
        .copied()
}

/// Reverse lookup: ESPN slot id for a position name (case-insensitive).
///
/// The blank slot is not addressable by name.
pub fn position_id(name: &str) -> Option<u8> {
    if name.is_empty() {
        return None;
    }
    POSITION_MAP
        .iter()
        .position(|p| p.eq_ignore_ascii_case(name))
        .and_then(|idx| u8::try_from(idx).ok())
}

/// Look up an NBA team abbreviation by ESPN `proTeamId`.
pub fn pro_team_name(id: i64) -> Option<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|idx| PRO_TEAM_MAP.get(idx))
        .copied()
}

/// Look up a stat abbreviation by ESPN stat id.
pub fn stat_name(stat_id: &str) -> Option<&'static str> {
    STATS_MAP
        .iter()
        .find(|(id, _)| *id == stat_id)
        .map(|(_, name)| *name)
}

/// Look up a stat split label by its two-character prefix.
pub fn stat_split_label(prefix: &str) -> Option<&'static str> {
    STAT_ID_MAP
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, label)| *label)
}

pub fn is_nine_cat_stat(name: &str) -> bool {
    NINE_CAT_STATS.contains(&name)
}

pub fn is_percentage_stat(name: &str) -> bool {
    PERCENTAGE_STATS.contains(&name)
}
