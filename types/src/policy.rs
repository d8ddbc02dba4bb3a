use std::fmt::Debug;

use crate::rally::RallyState;
use crate::roster::Roster;

/// Turn-rotation rule used to suggest the next hitter. Kept behind a trait
/// so the receiver-rotation convention is a choice, not a hard-coded rule.
pub trait RotationPolicy: Debug {
    fn next_hitter(&self, state: &RallyState, roster: &Roster) -> String;
}
