//! Game log command implementation

use std::collections::BTreeSet;

use crate::{
    cli::CommonArgs,
    pipeline::game_log::{build_game_log, GameLogRow},
    render::render_game_log,
    DisplayZone, Result,
};

use super::common::CommandContext;

/// Game log for `team`, or for every drafted team when `None`.
pub fn game_log_rows(ctx: &CommandContext, team: Option<&str>) -> Vec<GameLogRow> {
    let rows = build_game_log(
        &ctx.inputs.games,
        &ctx.inputs.teams,
        &ctx.inputs.rankings,
        team,
    );
    if team.is_some() {
        return rows;
    }

    let drafted: BTreeSet<&str> = ctx.names.values().map(String::as_str).collect();
    rows.into_iter()
        .filter(|row| {
            row.team_id.is_some_and(|id| ctx.names.contains_key(&id))
                || drafted.contains(row.team.as_str())
        })
        .collect()
}

/// Handle the game-log command
pub async fn handle_game_log(common: CommonArgs, team: Option<String>) -> Result<()> {
    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let ctx = CommandContext::new(&common).await?;
    ctx.print_warnings(common.json);

    let rows = game_log_rows(&ctx, team.as_deref());
    if common.json {
        println!("{}", serde_json::to_string_pretty(&rows)?); // tarpaulin::skip
    } else if rows.is_empty() {
        println!("No completed games found.");
    } else {
        println!("{}", render_game_log(&rows, DisplayZone::default())); // tarpaulin::skip
    }

    Ok(())
}
