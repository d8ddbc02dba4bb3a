use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use types::{MatchId, Player, Roster, ShotEvent};

use crate::error::StoreError;
use crate::models::{roster_from_rows, PlayerRow, RosterRow, ShotRow};
use crate::traits::{MatchRegistry, PlayerDirectory, ShotStore};

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn shot_row(r: &sqlx::sqlite::SqliteRow) -> ShotRow {
    ShotRow {
        seq: Some(r.get("seq")),
        match_id: r.get("match_id"),
        rally_no: r.get("rally_no"),
        shot_order: r.get("shot_order"),
        hitter: r.get("hitter"),
        receiver: r.get("receiver"),
        strike_zone: r.get("strike_zone"),
        landing_zone: r.get("landing_zone"),
        stroke: r.get("stroke"),
        outcome: r.get("outcome"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl ShotStore for SqliteStore {
    async fn append(&mut self, event: &ShotEvent) -> Result<(), StoreError> {
        let row = ShotRow::from_event(event);
        sqlx::query(
            "INSERT INTO shots (match_id, rally_no, shot_order, hitter, receiver, strike_zone, landing_zone, stroke, outcome, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&row.match_id)
        .bind(row.rally_no)
        .bind(row.shot_order)
        .bind(&row.hitter)
        .bind(&row.receiver)
        .bind(&row.strike_zone)
        .bind(&row.landing_zone)
        .bind(&row.stroke)
        .bind(&row.outcome)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn read_all(&self, match_id: &MatchId) -> Result<Vec<ShotEvent>, StoreError> {
        let rows = sqlx::query(
            "SELECT seq, match_id, rally_no, shot_order, hitter, receiver, strike_zone, landing_zone, stroke, outcome, created_at
             FROM shots WHERE match_id = ? ORDER BY rally_no, shot_order",
        )
        .bind(match_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.iter().map(|r| shot_row(r).into_event()).collect()
    }

    async fn delete_last(&mut self, match_id: &MatchId) -> Result<Option<ShotEvent>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        let last = sqlx::query(
            "SELECT seq, match_id, rally_no, shot_order, hitter, receiver, strike_zone, landing_zone, stroke, outcome, created_at
             FROM shots WHERE match_id = ? ORDER BY seq DESC LIMIT 1",
        )
        .bind(match_id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let Some(r) = last else {
            return Ok(None);
        };
        let row = shot_row(&r);

        sqlx::query("DELETE FROM shots WHERE seq = ?")
            .bind(row.seq)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        row.into_event().map(Some)
    }

    async fn delete_all(&mut self, match_id: &MatchId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM shots WHERE match_id = ?")
            .bind(match_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl MatchRegistry for SqliteStore {
    async fn create_match(
        &mut self,
        match_id: &MatchId,
        roster: &Roster,
    ) -> Result<(), StoreError> {
        let existing = sqlx::query("SELECT 1 FROM matches WHERE match_id = ? LIMIT 1")
            .bind(match_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        if existing.is_some() {
            return Err(StoreError::DuplicateMatch(match_id.to_string()));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        for row in RosterRow::rows_for(match_id, roster) {
            sqlx::query(
                "INSERT INTO matches (match_id, format, player, team) VALUES (?, ?, ?, ?)",
            )
            .bind(&row.match_id)
            .bind(&row.format)
            .bind(&row.player)
            .bind(&row.team)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;
        tracing::info!("registered match {match_id} ({roster})");
        Ok(())
    }

    async fn list_matches(&self) -> Result<Vec<MatchId>, StoreError> {
        let rows = sqlx::query("SELECT DISTINCT match_id FROM matches ORDER BY match_id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(rows
            .iter()
            .map(|r| MatchId::new(r.get::<String, _>("match_id")))
            .collect())
    }

    async fn roster(&self, match_id: &MatchId) -> Result<Option<Roster>, StoreError> {
        let rows = sqlx::query(
            "SELECT match_id, format, player, team FROM matches WHERE match_id = ? ORDER BY rowid",
        )
        .bind(match_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let rows = rows
            .iter()
            .map(|r| RosterRow {
                match_id: r.get("match_id"),
                format: r.get("format"),
                player: r.get("player"),
                team: r.get("team"),
            })
            .collect();
        roster_from_rows(rows)
    }

    async fn delete_match(&mut self, match_id: &MatchId) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        sqlx::query("DELETE FROM matches WHERE match_id = ?")
            .bind(match_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        sqlx::query("DELETE FROM shots WHERE match_id = ?")
            .bind(match_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;
        tracing::info!("deleted match {match_id} and its shots");
        Ok(())
    }
}

#[async_trait]
impl PlayerDirectory for SqliteStore {
    async fn register(&mut self, player: &Player) -> Result<(), StoreError> {
        let existing = sqlx::query("SELECT id FROM players WHERE name = ?")
            .bind(&player.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        if existing.is_some() {
            return Err(StoreError::DuplicatePlayer(player.name.clone()));
        }

        let row = PlayerRow::from_player(player);
        sqlx::query(
            "INSERT INTO players (id, name, handedness, club, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(row.id.to_string())
        .bind(&row.name)
        .bind(&row.handedness)
        .bind(&row.club)
        .bind(row.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, handedness, club, created_at FROM players ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.iter()
            .map(|r| {
                let id: String = r.get("id");
                Ok(PlayerRow {
                    id: Uuid::parse_str(&id).map_err(|e| StoreError::CorruptRow(e.to_string()))?,
                    name: r.get("name"),
                    handedness: r.get("handedness"),
                    club: r.get("club"),
                    created_at: r.get("created_at"),
                })
            })
            .map(|row: Result<PlayerRow, StoreError>| row?.into_player())
            .collect()
    }
}
