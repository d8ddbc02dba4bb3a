use std::fmt::Display;

use crate::court::Zone;
use crate::roster::MatchId;
use crate::stroke::{Outcome, Stroke};

/// A submitted shot form, before the machine stamps sequence numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotForm {
    pub hitter: String,
    pub receiver: String,
    pub strike: Zone,
    pub landing: Zone,
    pub stroke: Stroke,
    pub outcome: Outcome,
}

/// One recorded strike within a rally.
///
/// `rally` and `order` are the values the state machine held when the shot
/// was submitted, never the post-increment values. The receiver is recorded
/// on terminal shots too.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotEvent {
    pub match_id: MatchId,
    pub rally: u32,
    pub order: u32,
    pub hitter: String,
    pub receiver: String,
    pub strike: Zone,
    pub landing: Zone,
    pub stroke: Stroke,
    pub outcome: Outcome,
}

impl Display for ShotEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rally {} shot {}: {} -> {} ({} {} -> {}, {})",
            self.rally,
            self.order,
            self.hitter,
            self.receiver,
            self.stroke,
            self.strike,
            self.landing,
            self.outcome,
        )
    }
}
