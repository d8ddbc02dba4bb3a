//! The recording session: one open match, one mutable turn state, and the
//! store appends that make each submitted shot durable.

pub mod config;
pub mod input;

use std::collections::HashSet;

use thiserror::Error;

use store::{MatchRegistry, PlayerDirectory, ShotStore, StoreError};
use types::{
    resolver, MatchId, Player, RallyError, RallyState, Roster, RotationPolicy, Score, ShotEvent,
    ShotForm, Zone,
};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("no shots to undo for match {0}")]
    NoShotsToUndo(MatchId),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Rally(#[from] RallyError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One match being recorded. Holds the only mutable [`RallyState`]; every
/// operation completes its store call before the next one is accepted.
pub struct RecordingSession<'a, S> {
    store: &'a mut S,
    roster: Roster,
    policy: Box<dyn RotationPolicy>,
    state: RallyState,
}

impl<'a, S: ShotStore + MatchRegistry> RecordingSession<'a, S> {
    /// Open a match for recording. Fails with `MatchNotFound` when the
    /// registry has no roster rows for the id. A match that already has
    /// persisted shots resumes with its counters rebuilt from the store.
    pub async fn open(
        store: &'a mut S,
        match_id: MatchId,
        policy: Box<dyn RotationPolicy>,
    ) -> Result<Self, SessionError> {
        let roster = store
            .roster(&match_id)
            .await?
            .ok_or_else(|| SessionError::MatchNotFound(match_id.clone()))?;
        let events = store.read_all(&match_id).await?;
        let state = RallyState::replay(match_id, &roster, &events);
        log::info!(
            "opened {} ({}) at {}",
            state.match_id,
            roster,
            state
        );
        Ok(Self {
            store,
            roster,
            policy,
            state,
        })
    }

    /// Validate, persist, and apply one shot. The append is the point of
    /// durability; the returned event carries the pre-increment rally and
    /// shot order.
    pub async fn submit_shot(&mut self, form: &ShotForm) -> Result<ShotEvent, SessionError> {
        let event = self.state.stage(&self.roster, form)?;
        self.store.append(&event).await?;
        self.state.apply(&self.roster, &event);
        log::info!("{event}");
        Ok(event)
    }

    /// Remove the most recently appended shot and rebuild the turn state by
    /// replaying what remains, so undoing a rally-ending shot restores the
    /// true prior rally number and shot order.
    pub async fn undo_last(&mut self) -> Result<ShotEvent, SessionError> {
        let match_id = self.state.match_id.clone();
        let removed = self
            .store
            .delete_last(&match_id)
            .await?
            .ok_or_else(|| SessionError::NoShotsToUndo(match_id.clone()))?;
        let events = self.store.read_all(&match_id).await?;
        self.state = RallyState::replay(match_id, &self.roster, &events);
        log::info!("undid {removed}; now {}", self.state);
        Ok(removed)
    }

    /// Policy suggestion for who hits next.
    pub fn suggested_hitter(&self) -> String {
        self.policy.next_hitter(&self.state, &self.roster)
    }

    /// Resolver default for the next strike zone.
    pub fn suggested_strike_zone(&self) -> Zone {
        resolver::default_strike_zone(self.state.last_landing)
    }

    pub fn state(&self) -> &RallyState {
        &self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// End the session, releasing the store borrow.
    pub fn close(self) -> Score {
        log::info!("closed {} at {}", self.state.match_id, self.state);
        self.state.score
    }
}

/// Register any roster players the directory does not know yet; returns how
/// many were added.
pub async fn register_missing_players<S: PlayerDirectory>(
    store: &mut S,
    players: &[Player],
) -> Result<usize, SessionError> {
    let known: HashSet<String> = store
        .list_players()
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();
    let mut added = 0;
    for player in players {
        if !known.contains(&player.name) {
            store.register(player).await?;
            added += 1;
        }
    }
    Ok(added)
}

/// Create the match unless it already exists; returns whether it was new.
pub async fn ensure_match<S: MatchRegistry>(
    store: &mut S,
    match_id: &MatchId,
    roster: &Roster,
) -> Result<bool, SessionError> {
    match store.create_match(match_id, roster).await {
        Ok(()) => Ok(true),
        Err(StoreError::DuplicateMatch(_)) => {
            log::info!("match {match_id} already registered; resuming");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
