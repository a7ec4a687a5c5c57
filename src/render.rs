//! Plain-text tables for terminal output.
//!
//! Everything here takes already-computed tables and returns a `String`;
//! percentages are rounded only at this point.

use crate::{
    cbbd::FetchWarning,
    pipeline::{
        game_log::GameLogRow,
        leaderboard::{DetailRow, LeaderboardRow, PersonDetail},
        scoreboard::{Scoreboard, ScoreboardRow, Side},
        streak::{streak_token, Streak},
        TeamStanding,
    },
    DisplayZone,
};

/// Streak length at which a streak gets decorated
pub const HOT_STREAK: u32 = 3;

const SCHOOL_WIDTH: usize = 24;
const TEAM_LABEL_WIDTH: usize = 30;
const NICKNAME_WIDTH: usize = 20;

/// Win percentage the way box scores print it: `0.667`
pub fn format_pct(pct: f64) -> String {
    format!("{:.3}", pct)
}

/// Streak token, with a marker for runs of [`HOT_STREAK`] or more.
pub fn decorate_streak(streak: Option<&Streak>) -> String {
    let token = streak_token(streak);
    match streak {
        Some(s) if s.len() >= HOT_STREAK && s.is_winning() => format!("{} 🔥", token),
        Some(s) if s.len() >= HOT_STREAK => format!("{} 🧊", token),
        _ => token,
    }
}

/// `Duke (4)` for ranked teams, the bare school otherwise.
pub fn school_with_rank(school: &str, ranking: Option<u32>) -> String {
    match ranking {
        Some(rank) => format!("{} ({})", school, rank),
        None => school.to_string(),
    }
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

fn dashes(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Overall standings of the people in the draft.
pub fn render_leaderboard(rows: &[LeaderboardRow]) -> String {
    let mut lines = vec![
        format!(
            "{:<4} {:<16} {:>4} {:>4} {:>5} {:>6}",
            "#", "Person", "W", "L", "GP", "Pct"
        ),
        dashes(&[4, 16, 4, 4, 5, 6]),
    ];

    for (i, row) in rows.iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<16} {:>4} {:>4} {:>5} {:>6}",
            i + 1,
            truncate(&row.person, 16),
            row.wins,
            row.losses,
            row.total_games,
            format_pct(row.win_percentage)
        ));
    }

    lines.join("\n")
}

fn detail_line(row: &DetailRow, zone: DisplayZone) -> String {
    let next = match (&row.next_opponent, row.next_game_time) {
        (Some(opponent), Some(time)) => format!(
            "{} {}",
            zone.localize(time).format("%m/%d %H:%M"),
            opponent
        ),
        _ => "-".to_string(),
    };

    format!(
        "{:<w$} {:>4} {:>4} {:>6} {:<8} {}",
        truncate(&school_with_rank(&row.school, row.ranking), SCHOOL_WIDTH),
        row.wins,
        row.losses,
        format_pct(row.win_percentage),
        decorate_streak(row.streak.as_ref()),
        next,
        w = SCHOOL_WIDTH
    )
}

/// One person's drafted teams with a trailing total row.
pub fn render_person_detail(detail: &PersonDetail, zone: DisplayZone) -> String {
    let mut lines = vec![
        detail.person.clone(),
        format!(
            "{:<w$} {:>4} {:>4} {:>6} {:<8} {}",
            "School",
            "W",
            "L",
            "Pct",
            "Streak",
            "Next",
            w = SCHOOL_WIDTH
        ),
        dashes(&[SCHOOL_WIDTH, 4, 4, 6, 8, 4]),
    ];

    lines.extend(detail.teams.iter().map(|row| detail_line(row, zone)));
    lines.push(dashes(&[SCHOOL_WIDTH, 4, 4, 6, 8, 4]));
    lines.push(format!(
        "{:<w$} {:>4} {:>4} {:>6}",
        detail.total.school,
        detail.total.wins,
        detail.total.losses,
        format_pct(detail.total.win_percentage),
        w = SCHOOL_WIDTH
    ));

    lines.join("\n")
}

/// `Jayhawks (KU)`, or whichever half is known.
fn nickname(standing: &TeamStanding) -> String {
    match (standing.mascot.as_deref(), standing.abbreviation.as_deref()) {
        (Some(mascot), Some(abbreviation)) => format!("{} ({})", mascot, abbreviation),
        (Some(name), None) | (None, Some(name)) => name.to_string(),
        (None, None) => "-".to_string(),
    }
}

/// Team standings, each with its owner when drafted.
pub fn render_standings<'a, I>(rows: I, zone: DisplayZone) -> String
where
    I: IntoIterator<Item = (&'a TeamStanding, Option<&'a str>)>,
{
    let mut lines = vec![
        format!(
            "{:<w$} {:<n$} {:<12} {:>4} {:>4} {:>6} {:<8} {:<12} {}",
            "Team",
            "Nickname",
            "Conference",
            "W",
            "L",
            "Pct",
            "Streak",
            "Owner",
            "Next",
            w = SCHOOL_WIDTH,
            n = NICKNAME_WIDTH
        ),
        dashes(&[SCHOOL_WIDTH, NICKNAME_WIDTH, 12, 4, 4, 6, 8, 12, 4]),
    ];

    for (standing, owner) in rows {
        let next = standing
            .next_game
            .as_ref()
            .map(|n| {
                let at = if n.is_home { "vs" } else { "@" };
                format!(
                    "{} {} {}",
                    zone.localize(n.start_time).format("%m/%d %H:%M"),
                    at,
                    n.opponent
                )
            })
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "{:<w$} {:<n$} {:<12} {:>4} {:>4} {:>6} {:<8} {:<12} {}",
            truncate(
                &school_with_rank(&standing.team, standing.ranking),
                SCHOOL_WIDTH
            ),
            truncate(&nickname(standing), NICKNAME_WIDTH),
            truncate(standing.conference.as_deref().unwrap_or("-"), 12),
            standing.record.wins,
            standing.record.losses,
            format_pct(standing.win_percentage),
            decorate_streak(standing.streak.as_ref()),
            truncate(owner.unwrap_or("-"), 12),
            next,
            w = SCHOOL_WIDTH,
            n = NICKNAME_WIDTH
        ));
    }

    lines.join("\n")
}

fn score(score: Option<u32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Prefix the winning side with `*`; nothing for unplayed or tied games.
fn marked(label: &str, row: &ScoreboardRow, side: Side) -> String {
    if row.winner == Some(side) {
        format!("*{}", label)
    } else {
        format!(" {}", label)
    }
}

fn scoreboard_line(row: &ScoreboardRow) -> String {
    format!(
        "{:<6} {:<w$} {:>4}   {:<w$} {:>4}",
        row.time.format("%H:%M"),
        truncate(&marked(&row.away_label, row, Side::Away), TEAM_LABEL_WIDTH),
        score(row.away_score),
        truncate(&marked(&row.home_label, row, Side::Home), TEAM_LABEL_WIDTH),
        score(row.home_score),
        w = TEAM_LABEL_WIDTH
    )
}

fn scoreboard_section(title: &str, rows: &[ScoreboardRow]) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    if rows.is_empty() {
        lines.push("  No games".to_string());
    } else {
        lines.extend(rows.iter().map(scoreboard_line));
    }
    lines
}

/// Marquee games first, then each person's games; away team listed first.
pub fn render_scoreboard(board: &Scoreboard) -> String {
    let mut lines = vec![format!("Scoreboard for {}", board.date), String::new()];

    lines.extend(scoreboard_section("Marquee matchups", &board.marquee));
    for (person, rows) in &board.by_person {
        lines.push(String::new());
        lines.extend(scoreboard_section(person, rows));
    }

    lines.join("\n")
}

/// One line per team per completed game.
pub fn render_game_log(rows: &[GameLogRow], zone: DisplayZone) -> String {
    let mut lines = vec![
        format!(
            "{:<10} {:<w$} {:<3} {:<w$} {:>7} {:>5}",
            "Date",
            "Team",
            "",
            "Opponent",
            "Score",
            "Diff",
            w = SCHOOL_WIDTH
        ),
        dashes(&[10, SCHOOL_WIDTH, 3, SCHOOL_WIDTH, 7, 5]),
    ];

    for row in rows {
        lines.push(format!(
            "{:<10} {:<w$} {:<3} {:<w$} {:>7} {:>+5}",
            zone.date_of(row.game_date).format("%Y-%m-%d"),
            truncate(&school_with_rank(&row.team, row.team_ranking), SCHOOL_WIDTH),
            if row.is_home { "vs" } else { "@" },
            truncate(
                &school_with_rank(&row.opponent, row.opponent_ranking),
                SCHOOL_WIDTH
            ),
            format!(
                "{} {}-{}",
                if row.win { "W" } else { "L" },
                row.points_scored,
                row.points_allowed
            ),
            row.point_diff,
            w = SCHOOL_WIDTH
        ));
    }

    lines.join("\n")
}

/// One `⚠` line per failed query.
pub fn render_warnings(warnings: &[FetchWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("⚠ {}", w))
        .collect::<Vec<_>>()
        .join("\n")
}
