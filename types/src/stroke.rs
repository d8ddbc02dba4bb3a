use std::fmt::Display;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stroke {
    Clear,
    Smash,
    Drop,
    LongReturn,
    ShortReturn,
    Drive,
    Lob,
    Push,
    Hairpin,
}

impl Stroke {
    pub const ALL: [Stroke; 9] = [
        Stroke::Clear,
        Stroke::Smash,
        Stroke::Drop,
        Stroke::LongReturn,
        Stroke::ShortReturn,
        Stroke::Drive,
        Stroke::Lob,
        Stroke::Push,
        Stroke::Hairpin,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Stroke::Clear => "clear",
            Stroke::Smash => "smash",
            Stroke::Drop => "drop",
            Stroke::LongReturn => "long-return",
            Stroke::ShortReturn => "short-return",
            Stroke::Drive => "drive",
            Stroke::Lob => "lob",
            Stroke::Push => "push",
            Stroke::Hairpin => "hairpin",
        }
    }
}

impl Display for Stroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Stroke {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "clear" => Ok(Stroke::Clear),
            "smash" => Ok(Stroke::Smash),
            "drop" => Ok(Stroke::Drop),
            "long-return" => Ok(Stroke::LongReturn),
            "short-return" => Ok(Stroke::ShortReturn),
            "drive" => Ok(Stroke::Drive),
            "lob" => Ok(Stroke::Lob),
            "push" => Ok(Stroke::Push),
            "hairpin" => Ok(Stroke::Hairpin),
            _ => Err(format!("Unable to convert string to stroke: {s}")),
        }
    }
}

/// What the shot did to the rally. Anything but `Continue` ends it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Continue,
    Point,
    Miss,
    Out,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Outcome::Continue => "continue",
            Outcome::Point => "point",
            Outcome::Miss => "miss",
            Outcome::Out => "out",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continue" | "cont" => Ok(Outcome::Continue),
            "point" => Ok(Outcome::Point),
            "miss" => Ok(Outcome::Miss),
            "out" => Ok(Outcome::Out),
            _ => Err(format!("Unable to convert string to outcome: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_continue_is_non_terminal() {
        assert!(!Outcome::Continue.is_terminal());
        assert!(Outcome::Point.is_terminal());
        assert!(Outcome::Miss.is_terminal());
        assert!(Outcome::Out.is_terminal());
    }

    #[test]
    fn stroke_codes_parse_back() {
        for stroke in Stroke::ALL {
            assert_eq!(stroke.code().parse::<Stroke>(), Ok(stroke));
        }
    }

    #[test]
    fn underscores_accepted_for_hyphenated_strokes() {
        assert_eq!("long_return".parse::<Stroke>(), Ok(Stroke::LongReturn));
    }
}
