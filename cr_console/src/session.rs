//! Console session: applies parsed commands to the floor and group store.

use crate::commands::{FloorCommand, HELP};
use anyhow::Result;
use card_room::{
    AllocationError, FloorState, GroupStore, SeatAssignment, SeatAssignmentRequest, TableConfig,
    TableId, WaitlistRequest,
};
use std::fmt::Write;

/// What the console loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and read the next command
    Reply(String),
    Quit,
}

/// One operator session
pub struct Session {
    floor: FloorState,
    groups: GroupStore,
    default_seats: usize,
}

impl Session {
    pub fn new(floor: FloorState, groups: GroupStore, default_seats: usize) -> Self {
        Self {
            floor,
            groups,
            default_seats,
        }
    }

    pub fn floor(&self) -> &FloorState {
        &self.floor
    }

    /// Apply one command
    ///
    /// Rejections from the floor or the group store come back as errors; the
    /// session state is unchanged in that case.
    pub fn execute(&mut self, command: FloorCommand) -> Result<Outcome> {
        let reply = match command {
            FloorCommand::Quit => return Ok(Outcome::Quit),
            FloorCommand::Help => HELP.to_string(),
            FloorCommand::Tables => self.render_tables()?,
            FloorCommand::AddTable {
                name,
                game_type,
                stakes,
                seats,
            } => {
                let config = TableConfig::new(
                    name,
                    game_type,
                    stakes,
                    seats.unwrap_or(self.default_seats),
                );
                let table_id = self.floor.add_table(config)?;
                format!("Added table {}", table_id)
            }
            FloorCommand::SetStatus { table_id, status } => {
                self.floor.set_table_status(table_id, status)?;
                format!("Table {} is now {}", table_id, status)
            }
            FloorCommand::DeleteTable(table_id) => {
                let table = self.floor.delete_table(table_id)?;
                format!("Deleted table {} '{}'", table_id, table.config.name)
            }
            FloorCommand::Seats(table_id) => self.render_seats(table_id)?,
            FloorCommand::IsFree { table_id, seat } => {
                if self.floor.is_seat_available(table_id, seat) {
                    format!("Seat {} at table {} is free", seat, table_id)
                } else {
                    format!("Seat {} at table {} is taken", seat, table_id)
                }
            }
            FloorCommand::Vacate { table_id, seat } => {
                let occupant = self.floor.vacate_seat(table_id, seat)?;
                format!(
                    "{} left table {} seat {}",
                    occupant.player_name, table_id, seat
                )
            }
            FloorCommand::Wait {
                player_id,
                name,
                game_type,
                preferred_table,
                preferred_seat,
            } => {
                let request = WaitlistRequest {
                    player_id,
                    player_name: name,
                    game_type,
                    preferred_table,
                    preferred_seat,
                };
                let entry_id = self.floor.join_waitlist(request)?;
                format!(
                    "Waitlisted as entry {} (position {})",
                    entry_id,
                    self.floor.waitlist().len()
                )
            }
            FloorCommand::Waitlist => self.render_waitlist()?,
            FloorCommand::Unwait(entry_id) => {
                let entry = self.floor.remove_from_waitlist(entry_id)?;
                format!("Removed {} from the waitlist", entry.player_name)
            }
            FloorCommand::Assign {
                player_id,
                name,
                table_id,
                seat,
            } => {
                let request = SeatAssignmentRequest::new(player_id, name, table_id, seat);
                describe_assignment(&self.floor.assign_seat(request)?)
            }
            FloorCommand::AssignPreferred(entry_id) => {
                describe_assignment(&self.floor.assign_preferred_seat(entry_id)?)
            }
            FloorCommand::SeatNext(table_id) => {
                describe_assignment(&self.floor.seat_next_waiting(table_id)?)
            }
            FloorCommand::Move {
                position,
                direction,
            } => {
                let index = position
                    .checked_sub(1)
                    .ok_or(AllocationError::InvalidReorder { index: position })?;
                self.floor.reorder_waitlist(index, direction)?;
                self.render_waitlist()?
            }
            FloorCommand::Groups => self.render_groups()?,
            FloorCommand::AddGroup {
                name,
                kind,
                member_ids,
            } => {
                let group = self
                    .groups
                    .create(&name, kind, member_ids)
                    .map_err(|e| anyhow::anyhow!(e.client_message()))?;
                format!("Created group {} ({})", group.name, group.id)
            }
            FloorCommand::DeleteGroup(group_id) => {
                let group = self
                    .groups
                    .delete(group_id)
                    .map_err(|e| anyhow::anyhow!(e.client_message()))?;
                format!("Deleted group {}", group.name)
            }
        };

        Ok(Outcome::Reply(reply))
    }

    fn render_tables(&self) -> Result<String> {
        let mut out = String::new();
        for table in self.floor.tables() {
            let open = self.floor.open_seats(table.id)?;
            writeln!(
                out,
                "{:>3}  {:<16} {:<16} {:<6} {:<8} {}/{} open",
                table.id,
                table.config.name,
                table.config.game_type.to_string(),
                table.config.stakes,
                table.status.to_string(),
                open.len(),
                table.config.max_seats
            )?;
        }
        if out.is_empty() {
            out.push_str("No tables");
        }
        Ok(out)
    }

    fn render_seats(&self, table_id: TableId) -> Result<String> {
        let table = self.floor.table(table_id)?;
        let mut out = String::new();
        writeln!(out, "Table {} '{}'", table.id, table.config.name)?;
        for seat in 1..=table.config.max_seats {
            match self.floor.occupant(table_id, seat) {
                Some(occupant) => writeln!(
                    out,
                    "  {:>2}  {} ({})",
                    seat, occupant.player_name, occupant.player_id
                )?,
                None => writeln!(out, "  {:>2}  open", seat)?,
            }
        }
        Ok(out)
    }

    fn render_waitlist(&self) -> Result<String> {
        let mut out = String::new();
        for entry in self.floor.waitlist() {
            let preference = match (entry.preferred_table, entry.preferred_seat) {
                (Some(table), Some(seat)) => format!("table {} seat {}", table, seat),
                (Some(table), None) => format!("table {}", table),
                (None, Some(seat)) => format!("seat {}", seat),
                (None, None) => "any".to_string(),
            };
            writeln!(
                out,
                "{:>3}. [{}] {} ({}) {} - {}",
                entry.position,
                entry.id,
                entry.player_name,
                entry.player_id,
                entry.game_type,
                preference
            )?;
        }
        if out.is_empty() {
            out.push_str("Waitlist is empty");
        }
        Ok(out)
    }

    fn render_groups(&self) -> Result<String> {
        let mut out = String::new();
        for group in self.groups.list() {
            writeln!(
                out,
                "{}  {:<20} {:<6} {} members",
                group.id,
                group.name,
                group.kind.to_string(),
                group.member_ids.len()
            )?;
        }
        if out.is_empty() {
            out.push_str("No notification groups");
        }
        Ok(out)
    }
}

fn describe_assignment(assignment: &SeatAssignment) -> String {
    format!(
        "Seated {} at table {} seat {}",
        assignment.occupant.player_name, assignment.table_id, assignment.seat
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_command;
    use card_room::PlayerId;

    fn session() -> (Session, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let groups = GroupStore::open(dir.path().join("groups.json")).unwrap();
        (Session::new(FloorState::new(), groups, 9), dir)
    }

    fn run(session: &mut Session, line: &str) -> Result<Outcome> {
        session.execute(parse_command(line).unwrap())
    }

    fn reply(session: &mut Session, line: &str) -> String {
        match run(session, line).unwrap() {
            Outcome::Reply(text) => text,
            Outcome::Quit => panic!("Unexpected quit"),
        }
    }

    #[test]
    fn test_add_table_uses_default_seats() {
        let (mut session, _dir) = session();
        assert_eq!(reply(&mut session, "table add Main holdem 1/2"), "Added table 1");
        assert_eq!(session.floor().table(1).unwrap().config.max_seats, 9);
    }

    #[test]
    fn test_assign_then_taken() {
        let (mut session, _dir) = session();
        reply(&mut session, "table add Main holdem 1/2 6");

        assert_eq!(
            reply(&mut session, "assign P003 Dana 1 3"),
            "Seated Dana at table 1 seat 3"
        );
        let err = run(&mut session, "assign P004 Eli 1 3").unwrap_err();
        assert!(err.to_string().contains("already taken"));
        assert_eq!(
            reply(&mut session, "free 1 3"),
            "Seat 3 at table 1 is taken"
        );
    }

    #[test]
    fn test_prefer_without_seat_reports_no_preference() {
        let (mut session, _dir) = session();
        reply(&mut session, "table add Main holdem 1/2");
        reply(&mut session, "wait P1 Ana holdem 1");

        let err = run(&mut session, "prefer 1").unwrap_err();
        assert_eq!(err.to_string(), "no preference specified");
        assert_eq!(session.floor().waitlist().len(), 1);
    }

    #[test]
    fn test_move_uses_one_based_positions() {
        let (mut session, _dir) = session();
        reply(&mut session, "wait P1 Ana holdem");
        reply(&mut session, "wait P2 Bo holdem");

        reply(&mut session, "up 2");
        let order: Vec<&PlayerId> = session
            .floor()
            .waitlist()
            .iter()
            .map(|entry| &entry.player_id)
            .collect();
        assert_eq!(order, vec![&PlayerId::new("P2"), &PlayerId::new("P1")]);
    }

    #[test]
    fn test_move_position_zero_is_rejected() {
        let (mut session, _dir) = session();
        reply(&mut session, "wait P1 Ana holdem");

        let err = session
            .execute(FloorCommand::Move {
                position: 0,
                direction: card_room::Direction::Up,
            })
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<AllocationError>(),
            Some(&AllocationError::InvalidReorder { index: 0 })
        );
        assert_eq!(session.floor().waitlist().len(), 1);
    }

    #[test]
    fn test_groups_round_trip() {
        let (mut session, _dir) = session();
        assert!(reply(&mut session, "group add Regulars player P1 P2").starts_with("Created group"));
        assert!(reply(&mut session, "groups").contains("2 members"));
    }

    #[test]
    fn test_quit() {
        let (mut session, _dir) = session();
        assert_eq!(run(&mut session, "quit").unwrap(), Outcome::Quit);
    }
}
