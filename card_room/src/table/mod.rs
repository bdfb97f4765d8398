//! Table module providing table configuration and the table registry.
//!
//! This module implements:
//! - TableConfig: name, game, stakes, seat count and session timing
//! - TableStatus: Active, Paused and Inactive (session ended)
//! - TableRegistry: ID allocation and in-place edits
//!
//! Seat occupancy is not tracked here; see [`crate::seating::FloorState`].

pub mod config;
pub mod registry;

pub use config::{GameType, MAX_SEATS, SessionTiming, TableConfig, TableStatus};
pub use registry::{Table, TableId, TableRegistry};
