//! Seating data models.

use crate::selection::Selection;
use crate::table::{GameType, SessionTiming, TableId, TableStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Seat number at a table, starting at 1
pub type SeatNumber = usize;

/// Waitlist entry ID type
pub type EntryId = u64;

/// Player identifier
///
/// The single identifier used to match a seated player against waitlist
/// entries. Surrounding whitespace is stripped on construction and when
/// deserializing.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(PlayerId::new)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player holding a seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub player_id: PlayerId,
    pub player_name: String,
    pub seated_at: DateTime<Utc>,
}

/// Request to put a player in a specific seat
///
/// Built by the preferred-seat shortcut, the manual seat picker, or the
/// next-waiting helper. Not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignmentRequest {
    pub player_id: PlayerId,
    pub player_name: String,
    pub table_id: TableId,
    pub seat: SeatNumber,
}

impl SeatAssignmentRequest {
    pub fn new(
        player_id: PlayerId,
        player_name: impl Into<String>,
        table_id: TableId,
        seat: SeatNumber,
    ) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            table_id,
            seat,
        }
    }
}

/// Outcome of a successful seat assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub table_id: TableId,
    pub seat: SeatNumber,
    pub occupant: Occupant,
    /// Waitlist entries removed because the player is now seated
    pub removed_entries: Vec<EntryId>,
}

/// Request to join the waitlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistRequest {
    pub player_id: PlayerId,
    pub player_name: String,
    pub game_type: GameType,
    pub preferred_table: Option<TableId>,
    pub preferred_seat: Option<SeatNumber>,
}

impl WaitlistRequest {
    pub fn new(player_id: PlayerId, player_name: impl Into<String>, game_type: GameType) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            game_type,
            preferred_table: None,
            preferred_seat: None,
        }
    }

    /// Attach a table preference, optionally down to the seat
    pub fn prefer(mut self, table_id: TableId, seat: Option<SeatNumber>) -> Self {
        self.preferred_table = Some(table_id);
        self.preferred_seat = seat;
        self
    }
}

/// Direction for an adjacent waitlist swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the front of the queue
    Up,
    /// Toward the back of the queue
    Down,
}

/// Initial floor layout loaded from JSON
///
/// Selection-style fields accept either a raw value or an option object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSeed {
    #[serde(default)]
    pub tables: Vec<SeedTable>,
    #[serde(default)]
    pub waitlist: Vec<SeedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTable {
    pub id: TableId,
    pub name: String,
    pub game_type: Selection<GameType>,
    pub stakes: String,
    pub max_seats: usize,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub timing: SessionTiming,
    #[serde(default)]
    pub occupied: Vec<SeedOccupant>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedOccupant {
    pub seat: SeatNumber,
    pub player_id: PlayerId,
    pub player_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub game_type: Selection<GameType>,
    #[serde(default)]
    pub preferred_table: Option<Selection<TableId>>,
    #[serde(default)]
    pub preferred_seat: Option<Selection<SeatNumber>>,
}
