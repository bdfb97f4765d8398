//! Operator console for card room seating.
//!
//! Reads floor commands from stdin, one per line, and applies them to an
//! in-memory floor. Notification groups are kept in a local JSON file.

use anyhow::{Context, Result};
use card_room::{FloorSeed, FloorState, GroupStore};
use cr_console::{
    commands::parse_command,
    config::ConsoleConfig,
    session::{Outcome, Session},
};
use log::info;
use pico_args::Arguments;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "\
Run the card room floor console

USAGE:
  cr_console [OPTIONS]

OPTIONS:
  --groups     PATH        Notification groups file  [default: env CARD_ROOM_GROUPS_PATH or notification_groups.json]
  --seed       PATH        JSON floor seed to load   [default: env CARD_ROOM_SEED_PATH]
  --seats      N           Default seats per table   [default: env CARD_ROOM_DEFAULT_SEATS or 9]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter (e.g., debug)
";

struct Args {
    groups: Option<PathBuf>,
    seed: Option<PathBuf>,
    seats: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        groups: pargs.opt_value_from_str("--groups")?,
        seed: pargs.opt_value_from_str("--seed")?,
        seats: pargs.opt_value_from_str("--seats")?,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = ConsoleConfig::from_env(args.groups, args.seed, args.seats)?;

    let floor = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => FloorState::new(),
    };
    let groups = GroupStore::open(&config.groups_path)
        .with_context(|| format!("Failed to open {}", config.groups_path.display()))?;
    info!(
        "Floor console ready ({} notification groups)",
        groups.list().len()
    );

    run(Session::new(floor, groups, config.default_seats))
}

fn load_seed(path: &Path) -> Result<FloorState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed {}", path.display()))?;
    let seed: FloorSeed = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid seed {}", path.display()))?;
    let floor = FloorState::from_seed(seed).context("Seed rejected")?;
    Ok(floor)
}

fn run(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse_command(&line) {
                Ok(command) => match session.execute(command) {
                    Ok(Outcome::Reply(text)) => println!("{}", text.trim_end()),
                    Ok(Outcome::Quit) => break,
                    Err(e) => println!("Rejected: {e}"),
                },
                Err(e) => println!("{e}"),
            }
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
