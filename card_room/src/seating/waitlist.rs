//! Ordered player waitlist with dense 1-based positions.

use super::errors::{AllocationError, AllocationResult};
use super::models::{Direction, EntryId, PlayerId, SeatNumber, WaitlistRequest};
use crate::table::{GameType, TableId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A queued request for a seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: EntryId,
    pub player_id: PlayerId,
    pub player_name: String,
    /// 1-based queue position
    pub position: usize,
    pub game_type: GameType,
    pub preferred_table: Option<TableId>,
    pub preferred_seat: Option<SeatNumber>,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Preferred table and seat, only when both are present
    pub fn preference(&self) -> Option<(TableId, SeatNumber)> {
        self.preferred_table.zip(self.preferred_seat)
    }
}

/// Player waitlist
///
/// Invariant: entry `i` has `position == i + 1`.
#[derive(Debug, Clone)]
pub struct Waitlist {
    entries: Vec<WaitlistEntry>,
    next_entry_id: EntryId,
}

impl Waitlist {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_entry_id: 1,
        }
    }

    /// Append a request to the back of the queue
    pub fn push(&mut self, request: WaitlistRequest) -> EntryId {
        let id = self.next_entry_id;
        self.next_entry_id += 1;

        self.entries.push(WaitlistEntry {
            id,
            player_id: request.player_id,
            player_name: request.player_name,
            position: self.entries.len() + 1,
            game_type: request.game_type,
            preferred_table: request.preferred_table,
            preferred_seat: request.preferred_seat,
            joined_at: Utc::now(),
        });

        id
    }

    pub fn get(&self, entry_id: EntryId) -> Option<&WaitlistEntry> {
        self.entries.iter().find(|entry| entry.id == entry_id)
    }

    pub fn contains_player(&self, player_id: &PlayerId) -> bool {
        self.entries.iter().any(|entry| &entry.player_id == player_id)
    }

    /// Remove a single entry and close the gap it leaves
    pub fn remove(&mut self, entry_id: EntryId) -> Option<WaitlistEntry> {
        let index = self.entries.iter().position(|entry| entry.id == entry_id)?;
        let removed = self.entries.remove(index);
        self.resequence();
        Some(removed)
    }

    /// Remove every entry belonging to a player
    ///
    /// # Returns
    ///
    /// * `Vec<EntryId>` - IDs of the removed entries, in queue order
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Vec<EntryId> {
        let removed: Vec<EntryId> = self
            .entries
            .iter()
            .filter(|entry| &entry.player_id == player_id)
            .map(|entry| entry.id)
            .collect();

        if !removed.is_empty() {
            self.entries.retain(|entry| &entry.player_id != player_id);
            self.resequence();
        }

        removed
    }

    /// Swap the entry at `index` with its neighbour
    ///
    /// Only the two swapped entries are renumbered. An adjacent swap of a
    /// dense queue is still dense, so nothing else needs touching.
    pub fn swap_adjacent(&mut self, index: usize, direction: Direction) -> AllocationResult<()> {
        let other = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1).filter(|&i| i < self.entries.len()),
        };

        let other = match other {
            Some(other) if index < self.entries.len() => other,
            _ => return Err(AllocationError::InvalidReorder { index }),
        };

        self.entries.swap(index, other);
        self.entries[index].position = index + 1;
        self.entries[other].position = other + 1;

        Ok(())
    }

    /// Renumber every entry to match its index
    pub fn resequence(&mut self) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.position = index + 1;
        }
    }

    /// First entry in queue order satisfying `predicate`
    pub fn first_match<F>(&self, predicate: F) -> Option<&WaitlistEntry>
    where
        F: Fn(&WaitlistEntry) -> bool,
    {
        self.entries.iter().find(|entry| predicate(entry))
    }

    /// Whether positions are exactly `1..=len` in order
    pub fn is_dense(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(index, entry)| entry.position == index + 1)
    }

    pub fn entries(&self) -> &[WaitlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Waitlist {
    fn default() -> Self {
        Self::new()
    }
}
