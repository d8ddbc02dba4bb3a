use thiserror::Error;

/// Validation failures of the rally state machine. The rejected operation
/// leaves both the session state and the store untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RallyError {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("{hitter} and {receiver} are on the same side")]
    SameSide { hitter: String, receiver: String },

    #[error("hitter and receiver are both {0}")]
    HitterIsReceiver(String),

    #[error("bad roster: {0}")]
    BadRoster(String),
}
