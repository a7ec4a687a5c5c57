//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use cbb_draft::{
    cli::{CacheCmd, Cli, Commands},
    commands::{
        cache::handle_cache_clear, game_log::handle_game_log, leaderboard::handle_leaderboard,
        scoreboard::handle_scoreboard, standings::handle_standings,
    },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "cbb_draft=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cli::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Leaderboard {
            common,
            persons,
            summary,
        } => handle_leaderboard(common, persons, summary)
            .await
            .context("leaderboard failed")?,

        Commands::Standings { common, all } => handle_standings(common, all)
            .await
            .context("standings failed")?,

        Commands::Scoreboard {
            common,
            date,
            zone,
            persons,
        } => handle_scoreboard(common, date, zone, persons)
            .await
            .context("scoreboard failed")?,

        Commands::GameLog { common, team } => handle_game_log(common, team)
            .await
            .context("game log failed")?,

        Commands::Cache { cmd } => match cmd {
            CacheCmd::Clear => handle_cache_clear().context("could not clear the cache")?,
        },
    }

    Ok(())
}
