//! Floor state: table registry, seat occupancy and waitlist behind one owner.

use super::{
    errors::{AllocationError, AllocationResult},
    models::{
        Direction, EntryId, FloorSeed, Occupant, PlayerId, SeatAssignment,
        SeatAssignmentRequest, SeatNumber, WaitlistRequest,
    },
    seat_randomizer::SeatRandomizer,
    waitlist::{Waitlist, WaitlistEntry},
};
use crate::table::{Table, TableConfig, TableId, TableRegistry, TableStatus};
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};

/// Owned store for everything the floor staff mutate
///
/// The occupied-seat map is the only source of truth for whether a seat is
/// free. Every seating path re-checks it inside [`FloorState::assign_seat`]
/// at call time, so a preference or picker view computed earlier can never
/// double-book a seat.
#[derive(Debug, Clone, Default)]
pub struct FloorState {
    tables: TableRegistry,

    /// Occupied seats per table
    occupancy: HashMap<TableId, BTreeMap<SeatNumber, Occupant>>,

    waitlist: Waitlist,
}

impl FloorState {
    /// Create an empty floor
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a floor from a seed layout
    ///
    /// Seeded occupants and waitlist entries go through the regular
    /// operations, so a seed that double-books a seat is rejected.
    pub fn from_seed(seed: FloorSeed) -> AllocationResult<Self> {
        let mut floor = Self::new();

        for table in seed.tables {
            let config = TableConfig {
                name: table.name,
                game_type: table.game_type.into_value(),
                stakes: table.stakes,
                max_seats: table.max_seats,
                timing: table.timing,
            };
            floor
                .tables
                .insert_with_id(table.id, config, TableStatus::Active)?;

            for occupant in table.occupied {
                floor.assign_seat(SeatAssignmentRequest::new(
                    occupant.player_id,
                    occupant.player_name,
                    table.id,
                    occupant.seat,
                ))?;
            }

            if table.status != TableStatus::Active {
                floor.tables.set_status(table.id, table.status)?;
            }
        }

        for entry in seed.waitlist {
            floor.join_waitlist(WaitlistRequest {
                player_id: entry.player_id,
                player_name: entry.player_name,
                game_type: entry.game_type.into_value(),
                preferred_table: entry.preferred_table.map(|s| s.into_value()),
                preferred_seat: entry.preferred_seat.map(|s| s.into_value()),
            })?;
        }

        log::info!(
            "Loaded floor seed: {} tables, {} waiting",
            floor.tables.len(),
            floor.waitlist.len()
        );

        Ok(floor)
    }

    // === Tables ===

    /// Register a new table
    pub fn add_table(&mut self, config: TableConfig) -> AllocationResult<TableId> {
        self.tables.create(config)
    }

    /// Replace a table's configuration
    ///
    /// Rejected if the new seat count would strand an occupied seat.
    pub fn update_table(&mut self, table_id: TableId, config: TableConfig) -> AllocationResult<()> {
        self.tables.get(table_id)?;

        if let Some(highest) = self
            .occupancy
            .get(&table_id)
            .and_then(|seats| seats.keys().next_back())
        {
            if *highest > config.max_seats {
                return Err(AllocationError::InvalidConfig(format!(
                    "seat {highest} is occupied; max seats cannot drop to {}",
                    config.max_seats
                )));
            }
        }

        self.tables.update(table_id, config)
    }

    /// Change a table's status
    pub fn set_table_status(&mut self, table_id: TableId, status: TableStatus) -> AllocationResult<()> {
        self.tables.set_status(table_id, status)
    }

    /// Remove a table that has nobody seated
    pub fn delete_table(&mut self, table_id: TableId) -> AllocationResult<Table> {
        self.tables.get(table_id)?;

        if self
            .occupancy
            .get(&table_id)
            .is_some_and(|seats| !seats.is_empty())
        {
            return Err(AllocationError::TableNotEmpty(table_id));
        }

        self.occupancy.remove(&table_id);
        self.tables.remove(table_id)
    }

    pub fn table(&self, table_id: TableId) -> AllocationResult<&Table> {
        self.tables.get(table_id)
    }

    /// All tables, ordered by ID
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    // === Seats ===

    /// Whether `seat` is free at `table_id`
    ///
    /// A table with no recorded occupancy (including one never seen) is
    /// entirely free. Capacity is not considered here.
    pub fn is_seat_available(&self, table_id: TableId, seat: SeatNumber) -> bool {
        !self
            .occupancy
            .get(&table_id)
            .is_some_and(|seats| seats.contains_key(&seat))
    }

    /// Occupied seat numbers at a table, ascending
    pub fn occupied_seats(&self, table_id: TableId) -> Vec<SeatNumber> {
        self.occupancy
            .get(&table_id)
            .map(|seats| seats.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn occupant(&self, table_id: TableId, seat: SeatNumber) -> Option<&Occupant> {
        self.occupancy.get(&table_id)?.get(&seat)
    }

    /// Free seats at a table within its capacity, ascending
    pub fn open_seats(&self, table_id: TableId) -> AllocationResult<Vec<SeatNumber>> {
        let table = self.tables.get(table_id)?;

        Ok((1..=table.config.max_seats)
            .filter(|&seat| self.is_seat_available(table_id, seat))
            .collect())
    }

    /// Where a player is currently seated
    pub fn seat_of(&self, player_id: &PlayerId) -> Option<(TableId, SeatNumber)> {
        self.occupancy.iter().find_map(|(&table_id, seats)| {
            seats
                .iter()
                .find(|(_, occupant)| &occupant.player_id == player_id)
                .map(|(&seat, _)| (table_id, seat))
        })
    }

    /// Seat a player and drop their waitlist entries
    ///
    /// All checks run before any mutation; a rejection leaves occupancy and
    /// the waitlist untouched.
    ///
    /// # Arguments
    ///
    /// * `request` - Player, table and seat to fill
    ///
    /// # Returns
    ///
    /// * `AllocationResult<SeatAssignment>` - The filled seat and removed entries
    pub fn assign_seat(&mut self, request: SeatAssignmentRequest) -> AllocationResult<SeatAssignment> {
        if request.player_id.is_empty() {
            return Err(AllocationError::MissingField("player_id"));
        }
        if request.player_name.trim().is_empty() {
            return Err(AllocationError::MissingField("player_name"));
        }

        let table = self.tables.get(request.table_id)?;
        if !table.accepts_players() {
            return Err(AllocationError::TableClosed(request.table_id));
        }

        if request.seat == 0 || request.seat > table.config.max_seats {
            return Err(AllocationError::InvalidSeat {
                table_id: request.table_id,
                seat: request.seat,
                max_seats: table.config.max_seats,
            });
        }

        if !self.is_seat_available(request.table_id, request.seat) {
            log::debug!(
                "Rejected {} for table {} seat {}: taken",
                request.player_id,
                request.table_id,
                request.seat
            );
            return Err(AllocationError::SeatTaken {
                table_id: request.table_id,
                seat: request.seat,
            });
        }

        if let Some((table_id, seat)) = self.seat_of(&request.player_id) {
            return Err(AllocationError::PlayerAlreadySeated {
                player_id: request.player_id,
                table_id,
                seat,
            });
        }

        let occupant = Occupant {
            player_id: request.player_id,
            player_name: request.player_name,
            seated_at: Utc::now(),
        };

        self.occupancy
            .entry(request.table_id)
            .or_default()
            .insert(request.seat, occupant.clone());
        let removed_entries = self.waitlist.remove_player(&occupant.player_id);

        log::info!(
            "Seated {} ({}) at table {} seat {}",
            occupant.player_name,
            occupant.player_id,
            request.table_id,
            request.seat
        );

        Ok(SeatAssignment {
            table_id: request.table_id,
            seat: request.seat,
            occupant,
            removed_entries,
        })
    }

    /// Seat a waitlist entry at its declared preference
    ///
    /// The preference is only a value captured when the player joined; it is
    /// re-checked against current occupancy like any other request.
    pub fn assign_preferred_seat(&mut self, entry_id: EntryId) -> AllocationResult<SeatAssignment> {
        let entry = self
            .waitlist
            .get(entry_id)
            .ok_or(AllocationError::EntryNotFound(entry_id))?;

        let (table_id, seat) = entry.preference().ok_or(AllocationError::NoPreference)?;
        let request =
            SeatAssignmentRequest::new(entry.player_id.clone(), entry.player_name.clone(), table_id, seat);

        self.assign_seat(request)
    }

    /// Seat the first waiting player who fits a table
    ///
    /// An entry fits if it prefers this table, or has no table preference and
    /// wants this table's game. A preferred seat that is still open is used;
    /// otherwise a random open seat is drawn.
    pub fn seat_next_waiting(&mut self, table_id: TableId) -> AllocationResult<SeatAssignment> {
        let table = self.tables.get(table_id)?;
        let game_type = table.config.game_type;

        let open = self.open_seats(table_id)?;
        if open.is_empty() {
            return Err(AllocationError::TableFull(table_id));
        }

        let entry = self
            .waitlist
            .first_match(|entry| match entry.preferred_table {
                Some(preferred) => preferred == table_id,
                None => entry.game_type == game_type,
            })
            .ok_or(AllocationError::NoMatchingEntry(table_id))?;

        let seat = match entry.preferred_seat {
            Some(seat) if entry.preferred_table == Some(table_id) && open.contains(&seat) => seat,
            _ => SeatRandomizer::new()
                .pick(&open)
                .ok_or(AllocationError::TableFull(table_id))?,
        };

        let request =
            SeatAssignmentRequest::new(entry.player_id.clone(), entry.player_name.clone(), table_id, seat);

        self.assign_seat(request)
    }

    /// Return a seat to empty (cash-out or table reset)
    pub fn vacate_seat(&mut self, table_id: TableId, seat: SeatNumber) -> AllocationResult<Occupant> {
        self.tables.get(table_id)?;

        let occupant = self
            .occupancy
            .get_mut(&table_id)
            .and_then(|seats| seats.remove(&seat))
            .ok_or(AllocationError::SeatEmpty { table_id, seat })?;

        log::info!(
            "Vacated table {} seat {} ({})",
            table_id,
            seat,
            occupant.player_id
        );

        Ok(occupant)
    }

    // === Waitlist ===

    /// Add a player to the back of the waitlist
    pub fn join_waitlist(&mut self, request: WaitlistRequest) -> AllocationResult<EntryId> {
        if request.player_id.is_empty() {
            return Err(AllocationError::MissingField("player_id"));
        }
        if request.player_name.trim().is_empty() {
            return Err(AllocationError::MissingField("player_name"));
        }

        if let Some((table_id, seat)) = self.seat_of(&request.player_id) {
            return Err(AllocationError::PlayerAlreadySeated {
                player_id: request.player_id,
                table_id,
                seat,
            });
        }

        if self.waitlist.contains_player(&request.player_id) {
            return Err(AllocationError::AlreadyWaiting(request.player_id));
        }

        let player_id = request.player_id.clone();
        let entry_id = self.waitlist.push(request);

        log::info!(
            "Waitlisted {} as entry {} (position {})",
            player_id,
            entry_id,
            self.waitlist.len()
        );

        Ok(entry_id)
    }

    /// Manually remove an entry without seating it
    pub fn remove_from_waitlist(&mut self, entry_id: EntryId) -> AllocationResult<WaitlistEntry> {
        let entry = self
            .waitlist
            .remove(entry_id)
            .ok_or(AllocationError::EntryNotFound(entry_id))?;

        log::info!("Removed waitlist entry {} ({})", entry_id, entry.player_id);
        Ok(entry)
    }

    /// Move the entry at `from_index` one step up or down
    pub fn reorder_waitlist(
        &mut self,
        from_index: usize,
        direction: Direction,
    ) -> AllocationResult<&[WaitlistEntry]> {
        self.waitlist.swap_adjacent(from_index, direction)?;
        log::debug!("Moved waitlist index {} {:?}", from_index, direction);
        Ok(self.waitlist.entries())
    }

    /// Waitlist in queue order
    pub fn waitlist(&self) -> &[WaitlistEntry] {
        self.waitlist.entries()
    }

    pub fn entry(&self, entry_id: EntryId) -> Option<&WaitlistEntry> {
        self.waitlist.get(entry_id)
    }
}
