use async_trait::async_trait;

use types::{MatchId, Player, Roster, ShotEvent};

use crate::error::StoreError;

/// Append-only table of shot events, keyed by match. The append is the
/// point of durability for a submitted shot.
#[async_trait]
pub trait ShotStore: Send + Sync {
    async fn append(&mut self, event: &ShotEvent) -> Result<(), StoreError>;

    /// All events for a match, ordered by rally number then shot order.
    async fn read_all(&self, match_id: &MatchId) -> Result<Vec<ShotEvent>, StoreError>;

    /// Remove and return the most recently appended event for a match, by
    /// physical append order. `None` when the match has no events.
    async fn delete_last(&mut self, match_id: &MatchId) -> Result<Option<ShotEvent>, StoreError>;

    async fn delete_all(&mut self, match_id: &MatchId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait MatchRegistry: Send + Sync {
    async fn create_match(&mut self, match_id: &MatchId, roster: &Roster)
        -> Result<(), StoreError>;

    async fn list_matches(&self) -> Result<Vec<MatchId>, StoreError>;

    /// The stored roster for a match, or `None` when no rows exist for the
    /// id.
    async fn roster(&self, match_id: &MatchId) -> Result<Option<Roster>, StoreError>;

    /// Delete a match's roster rows and, with them, all of its shot events.
    async fn delete_match(&mut self, match_id: &MatchId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    async fn register(&mut self, player: &Player) -> Result<(), StoreError>;

    async fn list_players(&self) -> Result<Vec<Player>, StoreError>;
}
