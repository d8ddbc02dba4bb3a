use serde::{Deserialize, Serialize};
use uuid::Uuid;

use types::{Handedness, MatchFormat, MatchId, Player, Roster, ShotEvent, Team};

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub name: String,
    pub handedness: String,
    pub club: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PlayerRow {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: player.name.clone(),
            handedness: player.handedness.to_string(),
            club: player.club.clone(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn into_player(self) -> Result<Player, StoreError> {
        let handedness: Handedness = self
            .handedness
            .parse()
            .map_err(StoreError::CorruptRow)?;
        Ok(Player::new(self.name, handedness, self.club))
    }
}

/// One participant row of a match, as stored. A match is the set of rows
/// sharing a match id; deleting the match deletes them together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRow {
    pub match_id: String,
    pub format: String,
    pub player: String,
    pub team: String,
}

impl RosterRow {
    pub fn rows_for(match_id: &MatchId, roster: &Roster) -> Vec<Self> {
        roster
            .entries()
            .iter()
            .map(|entry| Self {
                match_id: match_id.as_str().to_string(),
                format: roster.format().to_string(),
                player: entry.player.clone(),
                team: entry.team.map(|t| t.to_string()).unwrap_or_default(),
            })
            .collect()
    }

    fn team(&self) -> Result<Option<Team>, StoreError> {
        if self.team.is_empty() {
            return Ok(None);
        }
        self.team.parse().map(Some).map_err(StoreError::CorruptRow)
    }
}

/// Rebuild a roster from its stored rows, in stored order. Empty input is
/// the caller's signal that the match does not exist.
pub fn roster_from_rows(rows: Vec<RosterRow>) -> Result<Option<Roster>, StoreError> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };
    let format: MatchFormat = first.format.parse().map_err(StoreError::CorruptRow)?;
    let entries = rows
        .into_iter()
        .map(|row| Ok((row.player.clone(), row.team()?)))
        .collect::<Result<Vec<_>, StoreError>>()?;
    Roster::from_rows(format, entries)
        .map(Some)
        .map_err(|e| StoreError::CorruptRow(e.to_string()))
}

/// One shot event as stored. `seq` is the AUTOINCREMENT primary key and
/// preserves physical append order, which `(rally, shot order)` alone cannot
/// recover once shots have been undone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRow {
    pub seq: Option<i64>,
    pub match_id: String,
    pub rally_no: i64,
    pub shot_order: i64,
    pub hitter: String,
    pub receiver: String,
    pub strike_zone: String,
    pub landing_zone: String,
    pub stroke: String,
    pub outcome: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ShotRow {
    pub fn from_event(event: &ShotEvent) -> Self {
        Self {
            seq: None,
            match_id: event.match_id.as_str().to_string(),
            rally_no: event.rally as i64,
            shot_order: event.order as i64,
            hitter: event.hitter.clone(),
            receiver: event.receiver.clone(),
            strike_zone: event.strike.to_string(),
            landing_zone: event.landing.to_string(),
            stroke: event.stroke.to_string(),
            outcome: event.outcome.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn into_event(self) -> Result<ShotEvent, StoreError> {
        Ok(ShotEvent {
            match_id: MatchId::new(self.match_id),
            rally: self.rally_no as u32,
            order: self.shot_order as u32,
            hitter: self.hitter,
            receiver: self.receiver,
            strike: self.strike_zone.parse().map_err(StoreError::CorruptRow)?,
            landing: self.landing_zone.parse().map_err(StoreError::CorruptRow)?,
            stroke: self.stroke.parse().map_err(StoreError::CorruptRow)?,
            outcome: self.outcome.parse().map_err(StoreError::CorruptRow)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Outcome, ShotForm, Stroke, Zone};

    #[test]
    fn shot_row_roundtrips_an_event() {
        let roster = Roster::singles("P1", "P2").unwrap();
        let state = types::RallyState::open(MatchId::new("m1"));
        let event = state
            .stage(
                &roster,
                &ShotForm {
                    hitter: "P1".to_string(),
                    receiver: "P2".to_string(),
                    strike: Zone::RightRear,
                    landing: Zone::LeftFront,
                    stroke: Stroke::Drop,
                    outcome: Outcome::Continue,
                },
            )
            .unwrap();
        let row = ShotRow::from_event(&event);
        assert_eq!(row.strike_zone, "RR");
        assert_eq!(row.into_event().unwrap(), event);
    }

    #[test]
    fn corrupt_zone_code_is_reported() {
        let mut row = ShotRow {
            seq: Some(1),
            match_id: "m1".to_string(),
            rally_no: 1,
            shot_order: 1,
            hitter: "P1".to_string(),
            receiver: "P2".to_string(),
            strike_zone: "??".to_string(),
            landing_zone: "CM".to_string(),
            stroke: "smash".to_string(),
            outcome: "point".to_string(),
            created_at: chrono::Utc::now(),
        };
        assert!(matches!(
            row.clone().into_event(),
            Err(StoreError::CorruptRow(_))
        ));
        row.strike_zone = "CM".to_string();
        assert!(row.into_event().is_ok());
    }

    #[test]
    fn singles_roster_rows_have_empty_team_tags() {
        let roster = Roster::singles("P1", "P2").unwrap();
        let rows = RosterRow::rows_for(&MatchId::new("m1"), &roster);
        assert!(rows.iter().all(|row| row.team.is_empty()));
        let rebuilt = roster_from_rows(rows).unwrap().unwrap();
        assert_eq!(rebuilt, roster);
    }
}
