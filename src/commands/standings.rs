//! Standings command implementation

use serde::Serialize;
use std::cmp::Ordering;

use crate::{
    cli::CommonArgs,
    pipeline::{build_standings, normalize::TeamRef, Ownership, TeamStanding},
    render::render_standings,
    DisplayZone, Result,
};

use super::common::CommandContext;

/// A team standing with the person who drafted it
#[derive(Debug, Clone, Serialize)]
pub struct OwnedStanding {
    pub owner: Option<String>,
    #[serde(flatten)]
    pub standing: TeamStanding,
}

fn standing_order(a: &OwnedStanding, b: &OwnedStanding) -> Ordering {
    b.standing
        .win_percentage
        .total_cmp(&a.standing.win_percentage)
        .then_with(|| b.standing.record.wins.cmp(&a.standing.record.wins))
        .then_with(|| a.standing.team.cmp(&b.standing.team))
}

/// Drafted teams (or every team with `all`), best record first.
pub fn standings_rows(ctx: &CommandContext, all: bool) -> Vec<OwnedStanding> {
    let standings = build_standings(&ctx.inputs, &ctx.board, &ctx.names, ctx.now);
    let ownership = Ownership::new(&ctx.board, &ctx.names);

    let mut rows: Vec<OwnedStanding> = standings
        .into_values()
        .filter_map(|standing| {
            let team = TeamRef {
                id: standing.team_id,
                name: standing.team.clone(),
            };
            let owner = ownership.owner_of(&team).map(str::to_string);
            (all || owner.is_some()).then_some(OwnedStanding { owner, standing })
        })
        .collect();
    rows.sort_by(standing_order);
    rows
}

/// Handle the standings command
pub async fn handle_standings(common: CommonArgs, all: bool) -> Result<()> {
    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let ctx = CommandContext::new(&common).await?;
    ctx.print_warnings(common.json);

    let rows = standings_rows(&ctx, all);
    if common.json {
        println!("{}", serde_json::to_string_pretty(&rows)?); // tarpaulin::skip
    } else {
        println!(
            "{}",
            render_standings(
                rows.iter().map(|r| (&r.standing, r.owner.as_deref())),
                DisplayZone::default()
            )
        ); // tarpaulin::skip
    }

    Ok(())
}
