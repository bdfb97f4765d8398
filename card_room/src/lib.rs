//! # Card Room
//!
//! Floor management for a poker room back office: the table registry, seat
//! occupancy, the player waitlist, and notification groups.
//!
//! The floor is held in a single owned store, [`FloorState`]. Every change to
//! occupancy or the waitlist goes through its operations, so the manual seat
//! picker, the preferred-seat shortcut and the next-waiting helper all share
//! one availability check.
//!
//! ## Core Modules
//!
//! - [`table`]: Table configuration, status and the table registry
//! - [`seating`]: Seat allocator, waitlist and assignment errors
//! - [`notify`]: Persisted notification groups
//! - [`selection`]: Normalization of raw-or-option selection inputs
//!
//! ## Example
//!
//! ```
//! use card_room::{FloorState, GameType, PlayerId, SeatAssignmentRequest, TableConfig};
//!
//! let mut floor = FloorState::new();
//! let table_id = floor
//!     .add_table(TableConfig::new("Table 1", GameType::TexasHoldem, "1/2", 9))
//!     .unwrap();
//!
//! assert!(floor.is_seat_available(table_id, 3));
//!
//! let request = SeatAssignmentRequest::new(PlayerId::new("P003"), "Dana", table_id, 3);
//! floor.assign_seat(request).unwrap();
//!
//! assert!(!floor.is_seat_available(table_id, 3));
//! ```

/// Persisted notification groups.
pub mod notify;
pub use notify::{GroupKind, GroupStore, GroupStoreError, NotificationGroup};

/// Seat allocation and waitlist management.
pub mod seating;
pub use seating::{
    AllocationError, AllocationResult, Direction, EntryId, FloorSeed, FloorState, Occupant,
    PlayerId, SeatAssignment, SeatAssignmentRequest, SeatNumber, Waitlist, WaitlistEntry,
    WaitlistRequest,
};

/// Normalization of selection inputs.
pub mod selection;
pub use selection::Selection;

/// Table configuration and registry.
pub mod table;
pub use table::{
    GameType, MAX_SEATS, SessionTiming, Table, TableConfig, TableId, TableRegistry, TableStatus,
};
