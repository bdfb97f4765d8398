//! Integration tests for scripted console sessions.
//!
//! Drives the parser and session together the way the binary does, line by line.

use card_room::{FloorState, GroupStore, PlayerId};
use cr_console::{
    commands::parse_command,
    session::{Outcome, Session},
};

/// Run each line and collect replies; rejections are prefixed like the binary does
fn run_script(session: &mut Session, script: &[&str]) -> Vec<String> {
    script
        .iter()
        .map(|line| {
            let command = parse_command(line).expect("Script lines are valid commands");
            match session.execute(command) {
                Ok(Outcome::Reply(text)) => text,
                Ok(Outcome::Quit) => "quit".to_string(),
                Err(e) => format!("Rejected: {e}"),
            }
        })
        .collect()
}

fn new_session(dir: &tempfile::TempDir) -> Session {
    let groups = GroupStore::open(dir.path().join("groups.json")).expect("Store should open");
    Session::new(FloorState::new(), groups, 9)
}

#[test]
fn test_waitlist_to_seat_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(&dir);

    let replies = run_script(
        &mut session,
        &[
            "table add Table_1 holdem 1/2",
            "wait P001 Ana holdem 1 3",
            "wait P002 Bo holdem",
            "assign P900 Walkin 1 3",
            "prefer 1",
            "next 1",
            "waitlist",
        ],
    );

    assert_eq!(replies[0], "Added table 1");
    assert!(replies[4].starts_with("Rejected: seat 3 at table 1 is already taken"));
    // Ana's preference is stale; next-waiting still seats her at an open seat
    assert!(replies[5].starts_with("Seated Ana at table 1 seat"));
    assert!(replies[6].contains("Bo"));

    let floor = session.floor();
    assert_eq!(floor.waitlist().len(), 1);
    assert_eq!(floor.waitlist()[0].position, 1);
    assert!(floor.seat_of(&PlayerId::new("P001")).is_some());
}

#[test]
fn test_cash_out_and_delete_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(&dir);

    let replies = run_script(
        &mut session,
        &[
            "table add Table_1 omaha 2/5 6",
            "assign P1 Ana 1 2",
            "table delete 1",
            "vacate 1 2",
            "table delete 1",
            "tables",
        ],
    );

    assert!(replies[2].starts_with("Rejected: table 1 still has seated players"));
    assert_eq!(replies[3], "Ana left table 1 seat 2");
    assert_eq!(replies[4], "Deleted table 1 'Table_1'");
    assert_eq!(replies[5], "No tables");
}

#[test]
fn test_inactive_table_rejects_assignment() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(&dir);

    let replies = run_script(
        &mut session,
        &[
            "table add Table_1 holdem 1/2",
            "table status 1 inactive",
            "assign P1 Ana 1 1",
        ],
    );

    assert_eq!(replies[1], "Table 1 is now inactive");
    assert!(replies[2].contains("no longer seating players"));
}

#[test]
fn test_groups_persist_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = new_session(&dir);
        run_script(&mut session, &["group add Floor_staff staff S1 S2 S3"]);
    }

    let mut session = new_session(&dir);
    let replies = run_script(&mut session, &["groups"]);
    assert!(replies[0].contains("Floor_staff"));
    assert!(replies[0].contains("3 members"));
}
