//! Leaderboard command implementation

use serde::Serialize;

use crate::{
    cbbd::FetchWarning,
    cli::CommonArgs,
    pipeline::{
        build_report,
        leaderboard::{LeaderboardRow, PersonDetail},
    },
    render::{render_leaderboard, render_person_detail},
    DisplayZone, Result,
};

use super::common::CommandContext;

/// JSON payload of the leaderboard command
#[derive(Debug, Serialize)]
pub struct LeaderboardOutput<'a> {
    pub leaderboard: Vec<LeaderboardRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<PersonDetail>>,
    pub warnings: &'a [FetchWarning],
}

/// Build the leaderboard, keeping only `persons` when any are given.
pub fn leaderboard_output<'a>(
    ctx: &'a CommandContext,
    persons: &[String],
    summary: bool,
) -> LeaderboardOutput<'a> {
    let report = build_report(&ctx.inputs, &ctx.board, ctx.now);
    let keep = |person: &str| persons.is_empty() || persons.iter().any(|p| p == person);

    let leaderboard = report
        .leaderboard
        .into_iter()
        .filter(|row| keep(&row.person))
        .collect();
    let details = (!summary).then(|| {
        report
            .details
            .into_iter()
            .filter(|d| keep(&d.person))
            .collect()
    });

    LeaderboardOutput {
        leaderboard,
        details,
        warnings: &ctx.warnings,
    }
}

/// Text form of [`leaderboard_output`].
pub fn render_output(output: &LeaderboardOutput<'_>, zone: DisplayZone) -> String {
    let mut sections = vec![render_leaderboard(&output.leaderboard)];
    if let Some(details) = &output.details {
        sections.extend(details.iter().map(|d| render_person_detail(d, zone)));
    }
    sections.join("\n\n")
}

/// Handle the leaderboard command
pub async fn handle_leaderboard(
    common: CommonArgs,
    persons: Vec<String>,
    summary: bool,
) -> Result<()> {
    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let ctx = CommandContext::new(&common).await?;
    ctx.print_warnings(common.json);

    for person in &persons {
        if !ctx.board.persons().contains(person) {
            println!("⚠ {} has no draft picks", person);
        }
    }

    let output = leaderboard_output(&ctx, &persons, summary);
    if common.json {
        println!("{}", serde_json::to_string_pretty(&output)?); // tarpaulin::skip
    } else {
        println!("{}", render_output(&output, DisplayZone::default())); // tarpaulin::skip
    }

    Ok(())
}
