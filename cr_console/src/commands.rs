use card_room::{Direction, EntryId, GameType, GroupKind, PlayerId, SeatNumber, TableId, TableStatus};
use std::fmt;
use uuid::Uuid;

/// Commands understood by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloorCommand {
    Tables,
    AddTable {
        name: String,
        game_type: GameType,
        stakes: String,
        seats: Option<usize>,
    },
    SetStatus {
        table_id: TableId,
        status: TableStatus,
    },
    DeleteTable(TableId),
    Seats(TableId),
    IsFree {
        table_id: TableId,
        seat: SeatNumber,
    },
    Wait {
        player_id: PlayerId,
        name: String,
        game_type: GameType,
        preferred_table: Option<TableId>,
        preferred_seat: Option<SeatNumber>,
    },
    Waitlist,
    Unwait(EntryId),
    Assign {
        player_id: PlayerId,
        name: String,
        table_id: TableId,
        seat: SeatNumber,
    },
    AssignPreferred(EntryId),
    SeatNext(TableId),
    /// Move the entry at a 1-based waitlist position
    Move {
        position: usize,
        direction: Direction,
    },
    Vacate {
        table_id: TableId,
        seat: SeatNumber,
    },
    Groups,
    AddGroup {
        name: String,
        kind: GroupKind,
        member_ids: Vec<String>,
    },
    DeleteGroup(Uuid),
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Required arguments missing; carries the usage line.
    MissingArgument(&'static str),
    /// Argument that should be a number (or ID) is not.
    InvalidNumber { what: &'static str, value: String },
    /// Argument outside the accepted set of words.
    InvalidValue(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(usage) => write!(f, "Missing arguments. Usage: {}", usage),
            Self::InvalidNumber { what, value } => {
                write!(f, "Invalid {} '{}'. Must be a positive number", what, value)
            }
            Self::InvalidValue(reason) => write!(f, "{}", reason),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
Tables
  tables                                   List tables and open seats
  table add NAME GAME STAKES [SEATS]       Add a table (GAME: holdem|omaha|stud|mixed)
  table status ID active|paused|inactive   Change table status
  table delete ID                          Delete an empty table
  seats ID                                 Show occupied and open seats
  free ID SEAT                             Check whether a seat is free
  vacate ID SEAT                           Cash a player out of a seat

Waitlist
  wait PLAYER NAME GAME [TABLE [SEAT]]     Join the waitlist
  waitlist                                 Show the waitlist
  unwait ENTRY                             Remove an entry
  up POSITION | down POSITION              Move an entry
  assign PLAYER NAME TABLE SEAT            Seat a player (manual pick)
  prefer ENTRY                             Seat an entry at its preferred seat
  next TABLE                               Seat the next matching player

Notification groups
  groups                                   List groups
  group add NAME player|staff [IDS...]     Create a group
  group delete ID                          Delete a group

  help | quit
";

/// Parse a command line into a FloorCommand.
///
/// # Examples
///
/// ```
/// use cr_console::commands::{parse_command, FloorCommand};
///
/// assert!(matches!(parse_command("tables"), Ok(FloorCommand::Tables)));
/// assert!(matches!(parse_command("next 2"), Ok(FloorCommand::SeatNext(2))));
/// ```
pub fn parse_command(input: &str) -> Result<FloorCommand, ParseError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();

    match parts.as_slice() {
        ["tables"] => Ok(FloorCommand::Tables),
        ["waitlist"] => Ok(FloorCommand::Waitlist),
        ["groups"] => Ok(FloorCommand::Groups),
        ["help"] | ["?"] => Ok(FloorCommand::Help),
        ["quit"] | ["exit"] => Ok(FloorCommand::Quit),
        ["table", rest @ ..] => parse_table_command(rest),
        ["group", rest @ ..] => parse_group_command(rest),
        ["seats", id] => Ok(FloorCommand::Seats(number(id, "table id")?)),
        ["free", id, seat] => Ok(FloorCommand::IsFree {
            table_id: number(id, "table id")?,
            seat: number(seat, "seat")?,
        }),
        ["vacate", id, seat] => Ok(FloorCommand::Vacate {
            table_id: number(id, "table id")?,
            seat: number(seat, "seat")?,
        }),
        ["wait", player, name, game, rest @ ..] if rest.len() <= 2 => Ok(FloorCommand::Wait {
            player_id: PlayerId::new(*player),
            name: name.to_string(),
            game_type: game_type(game)?,
            preferred_table: rest.first().map(|id| number(id, "table id")).transpose()?,
            preferred_seat: rest.get(1).map(|seat| number(seat, "seat")).transpose()?,
        }),
        ["unwait", entry] => Ok(FloorCommand::Unwait(number(entry, "entry id")?)),
        ["assign", player, name, id, seat] => Ok(FloorCommand::Assign {
            player_id: PlayerId::new(*player),
            name: name.to_string(),
            table_id: number(id, "table id")?,
            seat: number(seat, "seat")?,
        }),
        ["prefer", entry] => Ok(FloorCommand::AssignPreferred(number(entry, "entry id")?)),
        ["next", id] => Ok(FloorCommand::SeatNext(number(id, "table id")?)),
        ["up", position] => parse_move(position, Direction::Up),
        ["down", position] => parse_move(position, Direction::Down),
        ["seats" | "unwait" | "prefer" | "next", ..] => {
            Err(ParseError::MissingArgument("COMMAND ID"))
        }
        ["free" | "vacate", ..] => Err(ParseError::MissingArgument("free|vacate TABLE SEAT")),
        ["wait", ..] => Err(ParseError::MissingArgument(
            "wait PLAYER NAME GAME [TABLE [SEAT]]",
        )),
        ["assign", ..] => Err(ParseError::MissingArgument("assign PLAYER NAME TABLE SEAT")),
        ["up" | "down", ..] => Err(ParseError::MissingArgument("up|down POSITION")),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse "table add|status|delete ..."
fn parse_table_command(parts: &[&str]) -> Result<FloorCommand, ParseError> {
    match parts {
        ["add", name, game, stakes, rest @ ..] if rest.len() <= 1 => Ok(FloorCommand::AddTable {
            name: name.to_string(),
            game_type: game_type(game)?,
            stakes: stakes.to_string(),
            seats: rest.first().map(|seats| number(seats, "seat count")).transpose()?,
        }),
        ["status", id, status] => Ok(FloorCommand::SetStatus {
            table_id: number(id, "table id")?,
            status: status
                .parse()
                .map_err(|e: card_room::AllocationError| ParseError::InvalidValue(e.to_string()))?,
        }),
        ["delete", id] => Ok(FloorCommand::DeleteTable(number(id, "table id")?)),
        ["add", ..] => Err(ParseError::MissingArgument("table add NAME GAME STAKES [SEATS]")),
        ["status", ..] => Err(ParseError::MissingArgument(
            "table status ID active|paused|inactive",
        )),
        ["delete", ..] => Err(ParseError::MissingArgument("table delete ID")),
        _ => Err(ParseError::UnrecognizedCommand(format!(
            "table {}",
            parts.join(" ")
        ))),
    }
}

/// Parse "group add|delete ..."
fn parse_group_command(parts: &[&str]) -> Result<FloorCommand, ParseError> {
    match parts {
        ["add", name, kind, members @ ..] => Ok(FloorCommand::AddGroup {
            name: name.to_string(),
            kind: kind
                .parse()
                .map_err(|e: card_room::GroupStoreError| ParseError::InvalidValue(e.to_string()))?,
            member_ids: members.iter().map(|id| id.to_string()).collect(),
        }),
        ["delete", id] => Ok(FloorCommand::DeleteGroup(id.parse().map_err(|_| {
            ParseError::InvalidValue(format!("Invalid group id '{}'", id))
        })?)),
        ["add", ..] => Err(ParseError::MissingArgument(
            "group add NAME player|staff [IDS...]",
        )),
        ["delete", ..] => Err(ParseError::MissingArgument("group delete ID")),
        _ => Err(ParseError::UnrecognizedCommand(format!(
            "group {}",
            parts.join(" ")
        ))),
    }
}

fn parse_move(position: &str, direction: Direction) -> Result<FloorCommand, ParseError> {
    let position: usize = number(position, "position")?;
    if position == 0 {
        return Err(ParseError::InvalidNumber {
            what: "position",
            value: "0".to_string(),
        });
    }
    Ok(FloorCommand::Move {
        position,
        direction,
    })
}

fn number<T: std::str::FromStr>(value: &str, what: &'static str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        what,
        value: value.to_string(),
    })
}

fn game_type(value: &str) -> Result<GameType, ParseError> {
    value
        .parse()
        .map_err(|e: card_room::AllocationError| ParseError::InvalidValue(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Single-word commands ===

    #[test]
    fn test_parse_listing_commands() {
        assert_eq!(parse_command("tables"), Ok(FloorCommand::Tables));
        assert_eq!(parse_command("waitlist"), Ok(FloorCommand::Waitlist));
        assert_eq!(parse_command("groups"), Ok(FloorCommand::Groups));
        assert_eq!(parse_command("help"), Ok(FloorCommand::Help));
        assert_eq!(parse_command("exit"), Ok(FloorCommand::Quit));
    }

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        assert_eq!(parse_command("   next 3  "), Ok(FloorCommand::SeatNext(3)));
    }

    // === Tables ===

    #[test]
    fn test_parse_table_add() {
        assert_eq!(
            parse_command("table add Table_7 plo 2/5 6"),
            Ok(FloorCommand::AddTable {
                name: "Table_7".to_string(),
                game_type: GameType::Omaha,
                stakes: "2/5".to_string(),
                seats: Some(6),
            })
        );

        let default_seats = parse_command("table add Main holdem 1/2").unwrap();
        assert!(matches!(
            default_seats,
            FloorCommand::AddTable { seats: None, .. }
        ));
    }

    #[test]
    fn test_parse_table_add_bad_game() {
        assert!(matches!(
            parse_command("table add Main bingo 1/2"),
            Err(ParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_parse_table_status() {
        assert_eq!(
            parse_command("table status 2 paused"),
            Ok(FloorCommand::SetStatus {
                table_id: 2,
                status: TableStatus::Paused,
            })
        );
        assert!(parse_command("table status 2 sleeping").is_err());
        assert!(matches!(
            parse_command("table status 2"),
            Err(ParseError::MissingArgument(_))
        ));
    }

    // === Seating ===

    #[test]
    fn test_parse_assign() {
        assert_eq!(
            parse_command("assign P003 Dana 1 3"),
            Ok(FloorCommand::Assign {
                player_id: PlayerId::new("P003"),
                name: "Dana".to_string(),
                table_id: 1,
                seat: 3,
            })
        );
    }

    #[test]
    fn test_parse_assign_invalid_seat() {
        assert_eq!(
            parse_command("assign P003 Dana 1 three"),
            Err(ParseError::InvalidNumber {
                what: "seat",
                value: "three".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_assign_missing_args() {
        assert!(matches!(
            parse_command("assign P003 Dana"),
            Err(ParseError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_parse_wait_with_and_without_preference() {
        assert!(matches!(
            parse_command("wait P1 Ana holdem"),
            Ok(FloorCommand::Wait {
                preferred_table: None,
                preferred_seat: None,
                ..
            })
        ));
        assert!(matches!(
            parse_command("wait P1 Ana holdem 2"),
            Ok(FloorCommand::Wait {
                preferred_table: Some(2),
                preferred_seat: None,
                ..
            })
        ));
        assert!(matches!(
            parse_command("wait P1 Ana holdem 2 5"),
            Ok(FloorCommand::Wait {
                preferred_table: Some(2),
                preferred_seat: Some(5),
                ..
            })
        ));
        assert!(parse_command("wait P1 Ana holdem 2 5 9").is_err());
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_command("up 2"),
            Ok(FloorCommand::Move {
                position: 2,
                direction: Direction::Up,
            })
        );
        assert!(matches!(
            parse_command("down 0"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    // === Groups ===

    #[test]
    fn test_parse_group_add() {
        assert_eq!(
            parse_command("group add Regulars player P1 P2"),
            Ok(FloorCommand::AddGroup {
                name: "Regulars".to_string(),
                kind: GroupKind::Player,
                member_ids: vec!["P1".to_string(), "P2".to_string()],
            })
        );
    }

    #[test]
    fn test_parse_group_add_unknown_kind() {
        assert_eq!(
            parse_command("group add Regulars vip P1"),
            Err(ParseError::InvalidValue("Unknown group type 'vip'".to_string()))
        );
    }

    #[test]
    fn test_parse_group_delete_requires_uuid() {
        assert!(matches!(
            parse_command("group delete 12"),
            Err(ParseError::InvalidValue(_))
        ));
        let id = Uuid::new_v4();
        assert_eq!(
            parse_command(&format!("group delete {id}")),
            Ok(FloorCommand::DeleteGroup(id))
        );
    }

    // === Error display ===

    #[test]
    fn test_unrecognized_command() {
        let err = parse_command("deal cards").unwrap_err();
        assert_eq!(err, ParseError::UnrecognizedCommand("deal cards".to_string()));
        assert!(err.to_string().contains("help"));
    }
}
