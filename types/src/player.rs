use std::fmt::Display;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Handedness {
    Right,
    Left,
}

impl Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handedness::Right => write!(f, "right"),
            Handedness::Left => write!(f, "left"),
        }
    }
}

impl FromStr for Handedness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" | "r" => Ok(Handedness::Right),
            "left" | "l" => Ok(Handedness::Left),
            _ => Err(format!("Unable to convert string to handedness: {s}")),
        }
    }
}

/// A registered player. The name is the unique key; a player is never
/// updated or deleted once registered.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub handedness: Handedness,
    pub club: String,
}

impl Player {
    pub fn new(name: impl Into<String>, handedness: Handedness, club: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handedness,
            club: club.into(),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.handedness, self.club)
    }
}
