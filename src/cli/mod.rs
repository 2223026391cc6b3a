//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

/// Where the player payload comes from, shared between commands
#[derive(Debug, Args)]
pub struct PlayerInput {
    /// Player JSON saved from the ESPN API (`-` reads stdin).
    #[clap(long, short)]
    pub data: PathBuf,

    /// Season year, e.g. 2024 for 2023-24 (or set `ESPN_FBA_SEASON` env var).
    #[clap(long, short)]
    pub season: Option<Season>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Build a player from a saved ESPN payload and print its season summary.
    ///
    /// Accepts roster entries (`playerPoolEntry.player`) and player-pool
    /// entries (`player`) alike.
    Player {
        #[clap(flatten)]
        input: PlayerInput,

        /// `proTeamSchedules_wl` payload used to attach opponents to game days.
        #[clap(long)]
        schedule: Option<PathBuf>,

        /// Player news payload (`{"news": {"feed": [...]}}`).
        #[clap(long)]
        news: Option<PathBuf>,

        /// Output the full player record as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Also print every stat period and news headline.
        #[clap(long)]
        verbose: bool,
    },

    /// Print a player's nine-category season averages.
    NineCat {
        #[clap(flatten)]
        input: PlayerInput,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "espn-fba", about = "ESPN Fantasy Basketball player tools")]
pub struct ESPN {
    /// Log parsing details to stderr (overridden by `RUST_LOG`).
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read data from saved ESPN Fantasy Basketball payloads
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
