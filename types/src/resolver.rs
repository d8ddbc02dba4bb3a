//! Pure defaulting rules for the next form render. Deterministic and
//! store-free so they can be tested on their own.

use crate::court::Zone;
use crate::roster::Roster;

/// Who is expected to hit next: the last receiver while a rally is underway
/// (and still on the roster), otherwise the first roster entry.
pub fn next_hitter<'a>(
    last_receiver: Option<&'a str>,
    shot_order: u32,
    roster: &'a Roster,
) -> &'a str {
    match last_receiver {
        Some(receiver) if shot_order > 1 && roster.contains(receiver) => receiver,
        _ => roster.first_player(),
    }
}

/// Default strike zone for the next shot: where the previous one landed,
/// else the fixed fallback.
pub fn default_strike_zone(last_landing: Option<Zone>) -> Zone {
    last_landing.unwrap_or(Zone::FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::doubles(
            vec!["P1".to_string(), "P2".to_string()],
            vec!["P3".to_string(), "P4".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn mid_rally_receiver_hits_next() {
        let roster = roster();
        assert_eq!(next_hitter(Some("P3"), 2, &roster), "P3");
    }

    #[test]
    fn rally_start_defaults_to_first_roster_entry() {
        let roster = roster();
        assert_eq!(next_hitter(Some("P3"), 1, &roster), "P1");
        assert_eq!(next_hitter(None, 1, &roster), "P1");
    }

    #[test]
    fn off_roster_receiver_falls_back() {
        let roster = roster();
        assert_eq!(next_hitter(Some("P9"), 3, &roster), "P1");
    }

    #[test]
    fn resolver_is_deterministic() {
        let roster = roster();
        let first = next_hitter(Some("P4"), 5, &roster);
        for _ in 0..10 {
            assert_eq!(next_hitter(Some("P4"), 5, &roster), first);
        }
    }

    #[test]
    fn strike_zone_defaults_to_last_landing_then_center() {
        assert_eq!(default_strike_zone(Some(Zone::LeftRear)), Zone::LeftRear);
        assert_eq!(default_strike_zone(None), Zone::CenterMid);
    }
}
