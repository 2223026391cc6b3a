//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use espn_fba::{
    cli::{Commands, GetCmd, ESPN},
    commands::{
        common::PlayerSources,
        player_data::{handle_nine_cat, handle_player_data, PlayerDataParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(debug: bool) {
    let default = if debug { "espn_fba=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = ESPN::parse();
    init_logging(app.debug);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Player {
                input,
                schedule,
                news,
                json,
                verbose,
            } => handle_player_data(PlayerDataParams {
                sources: PlayerSources {
                    data: input.data,
                    schedule,
                    news,
                },
                season: input.season,
                as_json: json,
                verbose,
            })?,

            GetCmd::NineCat { input, json } => {
                handle_nine_cat(PlayerSources::new(input.data), input.season, json)?
            }
        },
    }

    Ok(())
}
