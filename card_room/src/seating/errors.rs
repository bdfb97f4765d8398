//! Seat allocation error types.

use super::models::{EntryId, PlayerId, SeatNumber};
use crate::table::TableId;
use thiserror::Error;

/// Reasons a floor operation is rejected
///
/// Every rejection leaves the floor exactly as it was before the call.
#[derive(Debug, Clone, Eq, Error, PartialEq)]
pub enum AllocationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("table {0} not found")]
    TableNotFound(TableId),

    #[error("table {0} is no longer seating players")]
    TableClosed(TableId),

    #[error("table {0} still has seated players")]
    TableNotEmpty(TableId),

    #[error("table {0} has no open seats")]
    TableFull(TableId),

    #[error("seat {seat} does not exist at table {table_id} (max {max_seats})")]
    InvalidSeat {
        table_id: TableId,
        seat: SeatNumber,
        max_seats: usize,
    },

    #[error("seat {seat} at table {table_id} is already taken")]
    SeatTaken { table_id: TableId, seat: SeatNumber },

    #[error("seat {seat} at table {table_id} is already empty")]
    SeatEmpty { table_id: TableId, seat: SeatNumber },

    #[error("player {player_id} is already seated at table {table_id}, seat {seat}")]
    PlayerAlreadySeated {
        player_id: PlayerId,
        table_id: TableId,
        seat: SeatNumber,
    },

    #[error("player {0} is already on the waitlist")]
    AlreadyWaiting(PlayerId),

    #[error("waitlist entry {0} not found")]
    EntryNotFound(EntryId),

    #[error("no preference specified")]
    NoPreference,

    #[error("no waiting player fits table {0}")]
    NoMatchingEntry(TableId),

    #[error("cannot move waitlist entry at index {index}")]
    InvalidReorder { index: usize },
}

/// Result type for floor operations
pub type AllocationResult<T> = Result<T, AllocationError>;
