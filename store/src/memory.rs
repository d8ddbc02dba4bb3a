use std::collections::HashMap;

use async_trait::async_trait;

use types::{MatchId, Player, Roster, ShotEvent};

use crate::error::StoreError;
use crate::traits::{MatchRegistry, PlayerDirectory, ShotStore};

/// In-memory store for tests and dry runs. Shots are held in one vector in
/// physical append order, same as the SQLite `seq` column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: HashMap<String, Roster>,
    shots: Vec<ShotEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShotStore for MemoryStore {
    async fn append(&mut self, event: &ShotEvent) -> Result<(), StoreError> {
        self.shots.push(event.clone());
        Ok(())
    }

    async fn read_all(&self, match_id: &MatchId) -> Result<Vec<ShotEvent>, StoreError> {
        let mut events: Vec<_> = self
            .shots
            .iter()
            .filter(|event| &event.match_id == match_id)
            .cloned()
            .collect();
        events.sort_by_key(|event| (event.rally, event.order));
        Ok(events)
    }

    async fn delete_last(&mut self, match_id: &MatchId) -> Result<Option<ShotEvent>, StoreError> {
        let last = self
            .shots
            .iter()
            .rposition(|event| &event.match_id == match_id);
        Ok(last.map(|idx| self.shots.remove(idx)))
    }

    async fn delete_all(&mut self, match_id: &MatchId) -> Result<(), StoreError> {
        self.shots.retain(|event| &event.match_id != match_id);
        Ok(())
    }
}

#[async_trait]
impl MatchRegistry for MemoryStore {
    async fn create_match(
        &mut self,
        match_id: &MatchId,
        roster: &Roster,
    ) -> Result<(), StoreError> {
        if self.matches.contains_key(match_id.as_str()) {
            return Err(StoreError::DuplicateMatch(match_id.to_string()));
        }
        self.matches
            .insert(match_id.as_str().to_string(), roster.clone());
        Ok(())
    }

    async fn list_matches(&self) -> Result<Vec<MatchId>, StoreError> {
        let mut ids: Vec<_> = self
            .matches
            .keys()
            .map(|id| MatchId::new(id.as_str()))
            .collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }

    async fn roster(&self, match_id: &MatchId) -> Result<Option<Roster>, StoreError> {
        Ok(self.matches.get(match_id.as_str()).cloned())
    }

    async fn delete_match(&mut self, match_id: &MatchId) -> Result<(), StoreError> {
        self.matches.remove(match_id.as_str());
        self.delete_all(match_id).await
    }
}

#[async_trait]
impl PlayerDirectory for MemoryStore {
    async fn register(&mut self, player: &Player) -> Result<(), StoreError> {
        if self.players.iter().any(|p| p.name == player.name) {
            return Err(StoreError::DuplicatePlayer(player.name.clone()));
        }
        self.players.push(player.clone());
        Ok(())
    }

    async fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Handedness, Outcome, RallyState, ShotForm, Stroke, Zone};

    fn event(state: &RallyState, roster: &Roster, hitter: &str, receiver: &str, outcome: Outcome) -> ShotEvent {
        state
            .stage(
                roster,
                &ShotForm {
                    hitter: hitter.to_string(),
                    receiver: receiver.to_string(),
                    strike: Zone::CenterMid,
                    landing: Zone::CenterFront,
                    stroke: Stroke::Clear,
                    outcome,
                },
            )
            .unwrap()
    }

    #[tokio::test]
    async fn delete_last_follows_append_order_not_numbering() {
        let mut store = MemoryStore::new();
        let roster = Roster::singles("P1", "P2").unwrap();
        let id = MatchId::new("m1");
        let mut state = RallyState::open(id.clone());

        // Rally 1 ends, rally 2 starts: (rally, order) goes 1,1 / 1,2 / 2,1.
        for (hitter, receiver, outcome) in [
            ("P1", "P2", Outcome::Continue),
            ("P2", "P1", Outcome::Point),
            ("P1", "P2", Outcome::Continue),
        ] {
            let ev = event(&state, &roster, hitter, receiver, outcome);
            store.append(&ev).await.unwrap();
            state.apply(&roster, &ev);
        }

        let removed = store.delete_last(&id).await.unwrap().unwrap();
        assert_eq!((removed.rally, removed.order), (2, 1));
        let removed = store.delete_last(&id).await.unwrap().unwrap();
        assert_eq!((removed.rally, removed.order), (1, 2));
        let removed = store.delete_last(&id).await.unwrap().unwrap();
        assert_eq!((removed.rally, removed.order), (1, 1));
        assert_eq!(store.delete_last(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_registrations_are_rejected() {
        let mut store = MemoryStore::new();
        let player = Player::new("P1", Handedness::Right, "Club");
        store.register(&player).await.unwrap();
        assert!(matches!(
            store.register(&player).await,
            Err(StoreError::DuplicatePlayer(_))
        ));

        let roster = Roster::singles("P1", "P2").unwrap();
        let id = MatchId::new("m1");
        store.create_match(&id, &roster).await.unwrap();
        assert!(matches!(
            store.create_match(&id, &roster).await,
            Err(StoreError::DuplicateMatch(_))
        ));
    }

    #[tokio::test]
    async fn delete_match_cascades_to_shots() {
        let mut store = MemoryStore::new();
        let roster = Roster::singles("P1", "P2").unwrap();
        let id = MatchId::new("m1");
        store.create_match(&id, &roster).await.unwrap();

        let state = RallyState::open(id.clone());
        let ev = event(&state, &roster, "P1", "P2", Outcome::Point);
        store.append(&ev).await.unwrap();

        store.delete_match(&id).await.unwrap();
        assert_eq!(store.roster(&id).await.unwrap(), None);
        assert!(store.read_all(&id).await.unwrap().is_empty());
    }
}
