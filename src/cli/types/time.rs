//! Time-related types: seasons and the scoreboard display zone.

use crate::error::{DraftError, Result};
use chrono::{
    format::{self, Parsed, StrftimeItems},
    DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years (the year the season ends in)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2026)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

const EASTERN_STANDARD_SECS: i32 = 5 * 3600;

/// Widest offset in use anywhere (UTC+14)
const MAX_OFFSET_SECS: i32 = 14 * 3600;

/// Fixed UTC offset used to decide which calendar day a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone(FixedOffset);

impl DisplayZone {
    /// US Eastern standard time, the default for scoreboard dates.
    pub fn eastern() -> Self {
        Self(FixedOffset::west_opt(EASTERN_STANDARD_SECS).unwrap_or_else(|| Utc.fix()))
    }

    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    pub fn offset(&self) -> FixedOffset {
        self.0
    }

    /// Convert an instant into this zone.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.0)
    }

    /// Calendar date of an instant in this zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.localize(instant).date_naive()
    }

    /// Today's date in this zone.
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Start of `date` (midnight local) as a UTC instant.
    pub fn start_of(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        self.0
            .from_local_datetime(&midnight)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::eastern()
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayZone {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || DraftError::InvalidZone {
            value: s.to_string(),
        };

        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(Self::utc());
        }

        let text = hours_only(trimmed).unwrap_or_else(|| trimmed.to_string());
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, &text, StrftimeItems::new("%:z")).map_err(|_| invalid())?;
        let offset = parsed.to_fixed_offset().map_err(|_| invalid())?;
        if offset.local_minus_utc().abs() > MAX_OFFSET_SECS {
            return Err(invalid());
        }

        Ok(Self(offset))
    }
}

/// Expand `-8` or `+10` to `-08:00` / `+10:00`.
fn hours_only(s: &str) -> Option<String> {
    let hours = s.strip_prefix('+').or_else(|| s.strip_prefix('-'))?;
    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}{:0>2}:00", &s[..1], hours))
}
