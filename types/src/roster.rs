use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::error::RallyError;

/// The two scoring sides of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => write!(f, "A"),
            Team::B => write!(f, "B"),
        }
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Team::A),
            "B" => Ok(Team::B),
            _ => Err(format!("Unable to convert string to team: {s}")),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchFormat {
    Singles,
    Doubles,
}

impl Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchFormat::Singles => write!(f, "singles"),
            MatchFormat::Doubles => write!(f, "doubles"),
        }
    }
}

impl FromStr for MatchFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singles" => Ok(MatchFormat::Singles),
            "doubles" => Ok(MatchFormat::Doubles),
            _ => Err(format!("Unable to convert string to match format: {s}")),
        }
    }
}

/// Match identifier, derived deterministically so the same date, slot, and
/// participants always name the same match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn derive<S: AsRef<str>>(date: NaiveDate, slot: u8, players: &[S]) -> Self {
        let names = players.iter().map(|p| p.as_ref()).join("_");
        Self(format!("{date}_{slot}_{names}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One participant row of a match. The team tag is carried for doubles and
/// left empty for singles, matching the stored table layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub player: String,
    pub team: Option<Team>,
}

/// The participants of one match, split into the two sides.
///
/// For singles the side assignment is positional: the first entry scores as
/// side A, the second as side B.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    format: MatchFormat,
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn singles(a: impl Into<String>, b: impl Into<String>) -> Result<Self, RallyError> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(RallyError::BadRoster(format!(
                "{a} cannot play both sides of a singles match"
            )));
        }
        Ok(Self {
            format: MatchFormat::Singles,
            entries: vec![
                RosterEntry { player: a, team: None },
                RosterEntry { player: b, team: None },
            ],
        })
    }

    pub fn doubles(team_a: Vec<String>, team_b: Vec<String>) -> Result<Self, RallyError> {
        if team_a.len() != 2 || team_b.len() != 2 {
            return Err(RallyError::BadRoster(format!(
                "doubles needs two players per side, got {} and {}",
                team_a.len(),
                team_b.len()
            )));
        }
        if let Some(shared) = team_a.iter().find(|p| team_b.contains(p)) {
            return Err(RallyError::BadRoster(format!(
                "{shared} is listed on both sides"
            )));
        }
        if team_a.iter().chain(&team_b).duplicates().next().is_some() {
            return Err(RallyError::BadRoster(
                "duplicate player within a side".to_string(),
            ));
        }
        let entries = team_a
            .into_iter()
            .map(|player| RosterEntry { player, team: Some(Team::A) })
            .chain(team_b.into_iter().map(|player| RosterEntry { player, team: Some(Team::B) }))
            .collect();
        Ok(Self {
            format: MatchFormat::Doubles,
            entries,
        })
    }

    /// Rebuild a roster from stored participant rows, in stored order.
    pub fn from_rows(
        format: MatchFormat,
        rows: Vec<(String, Option<Team>)>,
    ) -> Result<Self, RallyError> {
        match format {
            MatchFormat::Singles => {
                let mut players = rows.into_iter().map(|(player, _)| player);
                match (players.next(), players.next(), players.next()) {
                    (Some(a), Some(b), None) => Self::singles(a, b),
                    _ => Err(RallyError::BadRoster(
                        "singles needs exactly two participant rows".to_string(),
                    )),
                }
            }
            MatchFormat::Doubles => {
                let (team_a, team_b): (Vec<_>, Vec<_>) =
                    rows.into_iter().partition(|(_, team)| *team == Some(Team::A));
                if team_b.iter().any(|(_, team)| *team != Some(Team::B)) {
                    return Err(RallyError::BadRoster(
                        "doubles row without a team tag".to_string(),
                    ));
                }
                Self::doubles(
                    team_a.into_iter().map(|(player, _)| player).collect(),
                    team_b.into_iter().map(|(player, _)| player).collect(),
                )
            }
        }
    }

    pub fn format(&self) -> MatchFormat {
        self.format
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.player.as_str())
    }

    pub fn contains(&self, player: &str) -> bool {
        self.entries.iter().any(|entry| entry.player == player)
    }

    pub fn first_player(&self) -> &str {
        &self.entries[0].player
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which side a participant scores for.
    pub fn side_of(&self, player: &str) -> Option<Team> {
        let idx = self.entries.iter().position(|entry| entry.player == player)?;
        match self.format {
            MatchFormat::Doubles => self.entries[idx].team,
            MatchFormat::Singles => Some(if idx == 0 { Team::A } else { Team::B }),
        }
    }

    pub fn opponents_of(&self, player: &str) -> Vec<&str> {
        let Some(side) = self.side_of(player) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| {
                self.side_of(&entry.player)
                    .map(|s| s == side.opponent())
                    .unwrap_or(false)
            })
            .map(|entry| entry.player.as_str())
            .collect()
    }

    fn side_players(&self, side: Team) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| self.side_of(&entry.player) == Some(side))
            .map(|entry| entry.player.as_str())
            .collect()
    }
}

impl Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {}",
            self.side_players(Team::A).iter().join("/"),
            self.side_players(Team::B).iter().join("/"),
        )
    }
}
