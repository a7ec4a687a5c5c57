//! Scoreboard command implementation

use chrono::NaiveDate;

use crate::{
    cli::CommonArgs,
    pipeline::{
        scoreboard::{build_scoreboard, Scoreboard},
        Ownership,
    },
    render::render_scoreboard,
    DisplayZone, Result,
};

use super::common::CommandContext;

/// Scoreboard for `date` in `zone`; an empty `persons` means everyone.
pub fn scoreboard_for(
    ctx: &CommandContext,
    date: NaiveDate,
    zone: DisplayZone,
    persons: &[String],
) -> Scoreboard {
    let ownership = Ownership::new(&ctx.board, &ctx.names);
    let selected = (!persons.is_empty()).then_some(persons);
    build_scoreboard(&ctx.inputs.games, &ownership, date, zone, selected)
}

/// UTC dates to request so every game of local `date` in `zone` is covered.
///
/// The end is padded by a day: the feed's `endDateRange` is a calendar date,
/// and the local day can run past UTC midnight.
pub fn game_window(date: NaiveDate, zone: DisplayZone) -> Option<(NaiveDate, NaiveDate)> {
    let start = zone.start_of(date)?.date_naive();
    let end = zone.start_of(date.succ_opt()?)?.date_naive().succ_opt()?;
    Some((start, end))
}

/// Handle the scoreboard command
pub async fn handle_scoreboard(
    common: CommonArgs,
    date: Option<NaiveDate>,
    zone: DisplayZone,
    persons: Vec<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| zone.today());

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let ctx = match game_window(date, zone) {
        Some(dates) => CommandContext::for_dates(&common, dates).await?,
        None => CommandContext::new(&common).await?,
    };
    ctx.print_warnings(common.json);

    let board = scoreboard_for(&ctx, date, zone, &persons);
    if common.json {
        println!("{}", serde_json::to_string_pretty(&board)?); // tarpaulin::skip
    } else {
        println!("{}", render_scoreboard(&board)); // tarpaulin::skip
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftBoard, DraftPick};
    use crate::pipeline::test_support::{day, game, with_ids};
    use crate::pipeline::Inputs;

    fn context() -> CommandContext {
        let board = DraftBoard::new(vec![
            DraftPick::new(1, "Duke", "Jack"),
            DraftPick::new(2, "North Carolina", "Nico"),
        ])
        .unwrap();
        let inputs = Inputs {
            // the feed id matches the pick even though the name differs
            games: vec![with_ids(game(1, "Duke", "UNC", Some((80, 70)), 5), 1, 2)],
            ..Inputs::default()
        };
        CommandContext::from_parts(board, inputs, Vec::new(), day(6))
    }

    #[test]
    fn test_marquee_joined_by_team_id() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let board = scoreboard_for(&context(), date, DisplayZone::utc(), &[]);

        assert_eq!(board.marquee.len(), 1);
        assert_eq!(board.marquee[0].away_label, "UNC (Nico)");
        assert_eq!(board.by_person.len(), 2);
    }

    #[test]
    fn test_game_window_covers_local_day() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        let ymd = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();

        // Jan 9 on the east coast runs 05:00 Jan 9 to 05:00 Jan 10 UTC
        assert_eq!(game_window(date, DisplayZone::eastern()), Some((ymd(9), ymd(11))));
        assert_eq!(game_window(date, DisplayZone::utc()), Some((ymd(9), ymd(11))));

        // East of UTC the local day starts the previous UTC day
        let sydney: DisplayZone = "+10:00".parse().unwrap();
        assert_eq!(game_window(date, sydney), Some((ymd(8), ymd(10))));
    }

    #[test]
    fn test_person_selection() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let board = scoreboard_for(&context(), date, DisplayZone::utc(), &["Jack".to_string()]);

        assert_eq!(board.by_person.keys().collect::<Vec<_>>(), vec!["Jack"]);
    }
}
