pub mod court;
pub mod error;
pub mod player;
pub mod policy;
pub mod rally;
pub mod resolver;
pub mod roster;
pub mod shot;
pub mod stroke;

pub use court::Zone;
pub use error::RallyError;
pub use player::{Handedness, Player};
pub use policy::RotationPolicy;
pub use rally::{RallyState, Score};
pub use roster::{MatchFormat, MatchId, Roster, RosterEntry, Team};
pub use shot::{ShotEvent, ShotForm};
pub use stroke::{Outcome, Stroke};
