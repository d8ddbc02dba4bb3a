use std::fmt::Display;

use crate::court::Zone;
use crate::error::RallyError;
use crate::roster::{MatchId, Roster, Team};
use crate::shot::{ShotEvent, ShotForm};

/// Running score of the two sides.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Score {
    pub fn of(&self, side: Team) -> u32 {
        match side {
            Team::A => self.a,
            Team::B => self.b,
        }
    }

    pub fn award(&mut self, side: Team) {
        match side {
            Team::A => self.a += 1,
            Team::B => self.b += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.a + self.b
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Per-session turn state of one open match. Created by `open`, mutated on
/// every submitted or undone shot, dropped when the match is closed. Never
/// persisted; everything here can be rebuilt from the stored events with
/// [`RallyState::replay`].
#[derive(Clone, Debug, PartialEq)]
pub struct RallyState {
    pub match_id: MatchId,
    pub rally: u32,
    pub order: u32,
    pub score: Score,
    pub next_hitter: Option<String>,
    pub last_landing: Option<Zone>,
    pub last_receiver: Option<String>,
}

impl RallyState {
    pub fn open(match_id: MatchId) -> Self {
        Self {
            match_id,
            rally: 1,
            order: 1,
            score: Score::default(),
            next_hitter: None,
            last_landing: None,
            last_receiver: None,
        }
    }

    /// Validate a submitted form and stamp it into a [`ShotEvent`] carrying
    /// the rally number and shot order the machine currently holds. Pure:
    /// the machine only advances once the event is persisted and
    /// [`apply`](Self::apply)'d.
    pub fn stage(&self, roster: &Roster, form: &ShotForm) -> Result<ShotEvent, RallyError> {
        if form.hitter == form.receiver {
            return Err(RallyError::HitterIsReceiver(form.hitter.clone()));
        }
        let hitter_side = roster
            .side_of(&form.hitter)
            .ok_or_else(|| RallyError::UnknownPlayer(form.hitter.clone()))?;
        let receiver_side = roster
            .side_of(&form.receiver)
            .ok_or_else(|| RallyError::UnknownPlayer(form.receiver.clone()))?;
        if hitter_side == receiver_side {
            return Err(RallyError::SameSide {
                hitter: form.hitter.clone(),
                receiver: form.receiver.clone(),
            });
        }

        Ok(ShotEvent {
            match_id: self.match_id.clone(),
            rally: self.rally,
            order: self.order,
            hitter: form.hitter.clone(),
            receiver: form.receiver.clone(),
            strike: form.strike,
            landing: form.landing,
            stroke: form.stroke,
            outcome: form.outcome,
        })
    }

    /// Advance the machine past a persisted event.
    ///
    /// A terminal outcome scores for the side opposite the hitter (miss and
    /// out benefit the opponent just like a point), opens the next rally,
    /// and leaves the opening hitter to the resolver default. A continue
    /// hands the turn to the receiver.
    pub fn apply(&mut self, roster: &Roster, event: &ShotEvent) {
        self.last_landing = Some(event.landing);
        self.last_receiver = Some(event.receiver.clone());

        if event.outcome.is_terminal() {
            if let Some(side) = roster.side_of(&event.hitter) {
                self.score.award(side.opponent());
            }
            self.rally += 1;
            self.order = 1;
            self.next_hitter = None;
        } else {
            self.order += 1;
            self.next_hitter = Some(event.receiver.clone());
        }
        log::debug!("{event}; now {self}");
    }

    /// Rebuild the machine by folding [`apply`](Self::apply) over an ordered
    /// event slice. Used after an undo and when reopening a match that
    /// already has persisted shots.
    pub fn replay(match_id: MatchId, roster: &Roster, events: &[ShotEvent]) -> Self {
        let mut state = Self::open(match_id);
        for event in events {
            state.apply(roster, event);
        }
        state
    }
}

impl Display for RallyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rally {} shot {}, score {}",
            self.rally, self.order, self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::Zone;
    use crate::stroke::{Outcome, Stroke};

    fn roster() -> Roster {
        Roster::doubles(
            vec!["P1".to_string(), "P2".to_string()],
            vec!["P3".to_string(), "P4".to_string()],
        )
        .unwrap()
    }

    fn form(hitter: &str, receiver: &str, outcome: Outcome) -> ShotForm {
        ShotForm {
            hitter: hitter.to_string(),
            receiver: receiver.to_string(),
            strike: Zone::CenterMid,
            landing: Zone::CenterFront,
            stroke: Stroke::Drive,
            outcome,
        }
    }

    fn submit(state: &mut RallyState, roster: &Roster, form: &ShotForm) -> ShotEvent {
        let event = state.stage(roster, form).unwrap();
        state.apply(roster, &event);
        event
    }

    #[test]
    fn continues_increment_order_and_keep_rally() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        for expected_order in 1..=5 {
            let hitter = if expected_order % 2 == 1 { "P1" } else { "P3" };
            let receiver = if expected_order % 2 == 1 { "P3" } else { "P1" };
            let event = submit(&mut state, &roster, &form(hitter, receiver, Outcome::Continue));
            assert_eq!(event.rally, 1);
            assert_eq!(event.order, expected_order);
        }
        assert_eq!(state.rally, 1);
        assert_eq!(state.order, 6);
    }

    #[test]
    fn terminal_opens_next_rally() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        submit(&mut state, &roster, &form("P1", "P3", Outcome::Continue));
        submit(&mut state, &roster, &form("P3", "P1", Outcome::Point));
        assert_eq!(state.rally, 2);
        assert_eq!(state.order, 1);
        assert_eq!(state.next_hitter, None);
    }

    #[test]
    fn terminal_scores_for_the_hitters_opponents() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        // P3 (side B) misses: side A scores.
        submit(&mut state, &roster, &form("P3", "P1", Outcome::Miss));
        assert_eq!(state.score, Score { a: 1, b: 0 });
        // P1 (side A) hits out: side B scores.
        submit(&mut state, &roster, &form("P1", "P4", Outcome::Out));
        assert_eq!(state.score, Score { a: 1, b: 1 });
    }

    #[test]
    fn score_total_matches_terminal_count() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        let outcomes = [Outcome::Point, Outcome::Miss, Outcome::Out, Outcome::Point];
        for outcome in outcomes {
            submit(&mut state, &roster, &form("P1", "P3", outcome));
        }
        assert_eq!(state.score.total(), outcomes.len() as u32);
        assert_eq!(state.rally, outcomes.len() as u32 + 1);
    }

    #[test]
    fn stage_stamps_pre_increment_numbers() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        submit(&mut state, &roster, &form("P1", "P3", Outcome::Continue));
        let staged = state.stage(&roster, &form("P3", "P1", Outcome::Continue)).unwrap();
        // Staging twice without applying yields the same numbers.
        assert_eq!(staged.rally, 1);
        assert_eq!(staged.order, 2);
        let staged_again = state.stage(&roster, &form("P3", "P1", Outcome::Continue)).unwrap();
        assert_eq!(staged, staged_again);
    }

    #[test]
    fn continue_hands_turn_to_receiver() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        submit(&mut state, &roster, &form("P1", "P3", Outcome::Continue));
        assert_eq!(state.next_hitter.as_deref(), Some("P3"));
        assert_eq!(state.last_landing, Some(Zone::CenterFront));
    }

    #[test]
    fn same_side_submission_is_rejected_without_mutation() {
        let roster = roster();
        let state = RallyState::open(MatchId::new("m1"));
        let before = state.clone();
        let result = state.stage(&roster, &form("P1", "P2", Outcome::Continue));
        assert_eq!(
            result,
            Err(RallyError::SameSide {
                hitter: "P1".to_string(),
                receiver: "P2".to_string()
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_players_are_rejected() {
        let roster = roster();
        let state = RallyState::open(MatchId::new("m1"));
        let result = state.stage(&roster, &form("P9", "P3", Outcome::Continue));
        assert_eq!(result, Err(RallyError::UnknownPlayer("P9".to_string())));
        let result = state.stage(&roster, &form("P1", "P1", Outcome::Continue));
        assert_eq!(result, Err(RallyError::HitterIsReceiver("P1".to_string())));
    }

    #[test]
    fn replay_matches_sequential_application() {
        let roster = roster();
        let mut state = RallyState::open(MatchId::new("m1"));
        let mut events = Vec::new();
        events.push(submit(&mut state, &roster, &form("P1", "P3", Outcome::Continue)));
        events.push(submit(&mut state, &roster, &form("P3", "P2", Outcome::Continue)));
        events.push(submit(&mut state, &roster, &form("P2", "P4", Outcome::Miss)));
        events.push(submit(&mut state, &roster, &form("P4", "P1", Outcome::Continue)));

        let replayed = RallyState::replay(MatchId::new("m1"), &roster, &events);
        assert_eq!(replayed, state);
    }
}
