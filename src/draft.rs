//! The static draft: which person owns which team.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::{error::DraftError, Result, TeamId};

/// One drafted team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    pub team_id: TeamId,
    pub school: String,
    pub person: String,
}

impl DraftPick {
    pub fn new(team_id: u32, school: impl Into<String>, person: impl Into<String>) -> Self {
        Self {
            team_id: TeamId::new(team_id),
            school: school.into(),
            person: person.into(),
        }
    }
}

/// The season's draft.
const BUILTIN_PICKS: &[(u32, &str, &str)] = &[
    (64, "Dayton", "Nico"),
    (252, "Saint Louis", "Doug"),
    (333, "VCU", "Nick"),
    (200, "North Carolina", "Nico"),
    (72, "Duke", "Jack"),
    (185, "NC State", "Nick"),
    (339, "Virginia", "Doug"),
    (342, "Wake Forest", "Sam"),
    (52, "Clemson", "Mike"),
    (150, "Louisville", "Logan"),
    (248, "SMU", "Evan"),
    (163, "Memphis", "Logan"),
    (131, "Kansas", "Sam"),
    (20, "Baylor", "Logan"),
    (125, "Iowa State", "Mike"),
    (298, "Texas Tech", "Jack"),
    (113, "Houston", "Nico"),
    (18, "BYU", "Nick"),
    (51, "Cincinnati", "Doug"),
    (11, "Arizona", "Evan"),
    (338, "Villanova", "Nico"),
    (279, "St. John's", "Nick"),
    (235, "Providence", "Doug"),
    (157, "Marquette", "Sam"),
    (61, "Creighton", "Logan"),
    (359, "Xavier", "Jack"),
    (65, "DePaul", "Sam"),
    (34, "Butler", "Mike"),
    (236, "Purdue", "Sam"),
    (121, "Indiana", "Nick"),
    (118, "Illinois", "Doug"),
    (216, "Ohio State", "Nick"),
    (124, "Iowa", "Logan"),
    (355, "Wisconsin", "Mike"),
    (170, "Michigan", "Logan"),
    (169, "Michigan State", "Evan"),
    (160, "Maryland", "Evan"),
    (223, "Oregon", "Jack"),
    (313, "UCLA", "Nico"),
    (323, "USC", "Jack"),
    (257, "San Diego State", "Jack"),
    (25, "Boise State", "Evan"),
    (329, "Utah State", "Mike"),
    (135, "Kentucky", "Mike"),
    (5, "Alabama", "Evan"),
    (292, "Tennessee", "Sam"),
    (87, "Florida", "Doug"),
    (336, "Vanderbilt", "Nick"),
    (16, "Auburn", "Nico"),
    (220, "Ole Miss", "Sam"),
    (12, "Arkansas", "Jack"),
    (177, "Missouri", "Logan"),
    (253, "Saint Mary's", "Mike"),
    (102, "Gonzaga", "Doug"),
    (314, "UConn", "Evan"),
    (29, "Bradley", "Nico"),
];

/// Validated set of draft picks. A team id appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftBoard {
    picks: Vec<DraftPick>,
}

impl DraftBoard {
    pub fn new(picks: Vec<DraftPick>) -> Result<Self> {
        let mut seen = HashSet::new();
        for pick in &picks {
            if !seen.insert(pick.team_id) {
                return Err(DraftError::DuplicatePick {
                    team_id: pick.team_id.as_u32(),
                });
            }
        }
        Ok(Self { picks })
    }

    /// The draft compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            picks: BUILTIN_PICKS
                .iter()
                .map(|&(id, school, person)| DraftPick::new(id, school, person))
                .collect(),
        }
    }

    /// Parse `[{"team_id": .., "school": .., "person": ..}]`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::new(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Load `path` when given, else the built-in draft.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Everyone who drafted at least one team, sorted by name.
    pub fn persons(&self) -> Vec<String> {
        self.picks
            .iter()
            .map(|p| p.person.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn picks_for<'a>(&'a self, person: &'a str) -> impl Iterator<Item = &'a DraftPick> + 'a {
        self.picks.iter().filter(move |p| p.person == person)
    }

    pub fn schools(&self) -> Vec<String> {
        self.picks.iter().map(|p| p.school.clone()).collect()
    }
}
