//! Seating module providing the seat allocator and the waitlist.
//!
//! This module implements:
//! - FloorState: single owner of tables, seat occupancy and the waitlist
//! - Seat availability queries and the seat assignment transition
//! - Waitlist with dense 1-based positions and adjacent reordering
//! - Preference matching for the next waiting player
//!
//! ## Seat lifecycle
//!
//! A seat goes `Empty -> Occupied` through [`FloorState::assign_seat`] and
//! back through [`FloorState::vacate_seat`]. A waitlist entry leaves the queue
//! either when its player is seated or when staff remove it.
//!
//! ## Example
//!
//! ```
//! use card_room::{
//!     AllocationError, FloorState, GameType, PlayerId, TableConfig, WaitlistRequest,
//! };
//!
//! let mut floor = FloorState::new();
//! let table_id = floor
//!     .add_table(TableConfig::new("Table 2", GameType::Omaha, "2/5", 6))
//!     .unwrap();
//!
//! let entry_id = floor
//!     .join_waitlist(
//!         WaitlistRequest::new(PlayerId::new("P007"), "Jo", GameType::Omaha)
//!             .prefer(table_id, None),
//!     )
//!     .unwrap();
//!
//! // A table without a seat is not a usable preference
//! assert_eq!(
//!     floor.assign_preferred_seat(entry_id),
//!     Err(AllocationError::NoPreference)
//! );
//! assert_eq!(floor.waitlist().len(), 1);
//! ```

pub mod allocator;
pub mod errors;
pub mod models;
pub mod seat_randomizer;
pub mod waitlist;

pub use allocator::FloorState;
pub use errors::{AllocationError, AllocationResult};
pub use models::{
    Direction, EntryId, FloorSeed, Occupant, PlayerId, SeatAssignment, SeatAssignmentRequest,
    SeatNumber, SeedEntry, SeedOccupant, SeedTable, WaitlistRequest,
};
pub use seat_randomizer::SeatRandomizer;
pub use waitlist::{Waitlist, WaitlistEntry};
