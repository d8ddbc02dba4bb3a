use std::fmt::Display;
use std::str::FromStr;

/// One of the nine court regions, coded column-first: R/C/L for
/// right/center/left, then R/M/F for rear/mid/front.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    RightRear,
    CenterRear,
    LeftRear,
    RightMid,
    CenterMid,
    LeftMid,
    RightFront,
    CenterFront,
    LeftFront,
}

impl Zone {
    pub const ALL: [Zone; 9] = [
        Zone::RightRear,
        Zone::CenterRear,
        Zone::LeftRear,
        Zone::RightMid,
        Zone::CenterMid,
        Zone::LeftMid,
        Zone::RightFront,
        Zone::CenterFront,
        Zone::LeftFront,
    ];

    /// Default strike zone when no previous landing zone is known.
    pub const FALLBACK: Zone = Zone::CenterMid;

    pub fn code(&self) -> &'static str {
        match self {
            Zone::RightRear => "RR",
            Zone::CenterRear => "CR",
            Zone::LeftRear => "LR",
            Zone::RightMid => "RM",
            Zone::CenterMid => "CM",
            Zone::LeftMid => "LM",
            Zone::RightFront => "RF",
            Zone::CenterFront => "CF",
            Zone::LeftFront => "LF",
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RR" => Ok(Zone::RightRear),
            "CR" => Ok(Zone::CenterRear),
            "LR" => Ok(Zone::LeftRear),
            "RM" => Ok(Zone::RightMid),
            "CM" => Ok(Zone::CenterMid),
            "LM" => Ok(Zone::LeftMid),
            "RF" => Ok(Zone::RightFront),
            "CF" => Ok(Zone::CenterFront),
            "LF" => Ok(Zone::LeftFront),
            _ => Err(format!("Unable to convert string to zone: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back_to_themselves() {
        for zone in Zone::ALL {
            assert_eq!(zone.code().parse::<Zone>(), Ok(zone));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("cm".parse::<Zone>(), Ok(Zone::CenterMid));
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("XX".parse::<Zone>().is_err());
    }
}
