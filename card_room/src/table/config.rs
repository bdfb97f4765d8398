//! Table configuration models.

use crate::seating::AllocationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest seat count a table may be configured with.
pub const MAX_SEATS: usize = 10;

/// Game variants dealt on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    TexasHoldem,
    Omaha,
    SevenCardStud,
    Mixed,
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameType::TexasHoldem => write!(f, "texas_holdem"),
            GameType::Omaha => write!(f, "omaha"),
            GameType::SevenCardStud => write!(f, "seven_card_stud"),
            GameType::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for GameType {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "texas_holdem" | "holdem" | "nlh" => Ok(GameType::TexasHoldem),
            "omaha" | "plo" => Ok(GameType::Omaha),
            "seven_card_stud" | "stud" => Ok(GameType::SevenCardStud),
            "mixed" => Ok(GameType::Mixed),
            other => Err(AllocationError::InvalidConfig(format!(
                "unknown game type '{other}'"
            ))),
        }
    }
}

/// Table lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Active,
    Paused,
    /// Session ended; no new players may be seated.
    Inactive,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableStatus::Active => write!(f, "active"),
            TableStatus::Paused => write!(f, "paused"),
            TableStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for TableStatus {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TableStatus::Active),
            "paused" => Ok(TableStatus::Paused),
            "inactive" | "ended" => Ok(TableStatus::Inactive),
            other => Err(AllocationError::InvalidConfig(format!(
                "unknown table status '{other}'"
            ))),
        }
    }
}

/// Play-session timing parameters, all in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTiming {
    /// Minimum time a player must stay seated
    pub min_play_time: u32,

    /// Time allowed to return after a seat is called
    pub call_time: u32,

    /// Window in which a player may cash out
    pub cash_out_window: u32,

    /// Idle session timeout
    pub session_timeout: u32,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            min_play_time: 60,
            call_time: 5,
            cash_out_window: 15,
            session_timeout: 120,
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Display name
    pub name: String,

    /// Game dealt at this table
    pub game_type: GameType,

    /// Stakes label, e.g. "1/2"
    pub stakes: String,

    /// Number of seats (1..=MAX_SEATS)
    pub max_seats: usize,

    /// Session timing
    #[serde(default)]
    pub timing: SessionTiming,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "Default Table".to_string(),
            game_type: GameType::TexasHoldem,
            stakes: "1/2".to_string(),
            max_seats: 9,
            timing: SessionTiming::default(),
        }
    }
}

impl TableConfig {
    /// Create a configuration with default session timing
    pub fn new(
        name: impl Into<String>,
        game_type: GameType,
        stakes: impl Into<String>,
        max_seats: usize,
    ) -> Self {
        Self {
            name: name.into(),
            game_type,
            stakes: stakes.into(),
            max_seats,
            timing: SessionTiming::default(),
        }
    }

    /// Replace the session timing
    pub fn with_timing(mut self, timing: SessionTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.name.trim().is_empty() {
            return Err(AllocationError::MissingField("name"));
        }

        if self.stakes.trim().is_empty() {
            return Err(AllocationError::MissingField("stakes"));
        }

        if self.max_seats == 0 || self.max_seats > MAX_SEATS {
            return Err(AllocationError::InvalidConfig(format!(
                "max seats must be between 1 and {MAX_SEATS}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = TableConfig::new("  ", GameType::Omaha, "2/5", 6);
        assert_eq!(config.validate(), Err(AllocationError::MissingField("name")));
    }

    #[test]
    fn test_missing_stakes_rejected() {
        let config = TableConfig::new("Table 4", GameType::Omaha, "", 6);
        assert_eq!(
            config.validate(),
            Err(AllocationError::MissingField("stakes"))
        );
    }

    #[test]
    fn test_seat_count_bounds() {
        let zero = TableConfig::new("Table 1", GameType::TexasHoldem, "1/2", 0);
        assert!(matches!(
            zero.validate(),
            Err(AllocationError::InvalidConfig(_))
        ));

        let too_many = TableConfig::new("Table 1", GameType::TexasHoldem, "1/2", MAX_SEATS + 1);
        assert!(too_many.validate().is_err());

        let full_ring = TableConfig::new("Table 1", GameType::TexasHoldem, "1/2", MAX_SEATS);
        assert!(full_ring.validate().is_ok());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Paused".parse::<TableStatus>(), Ok(TableStatus::Paused));
        assert_eq!("ended".parse::<TableStatus>(), Ok(TableStatus::Inactive));
        assert!("closed".parse::<TableStatus>().is_err());
    }

    #[test]
    fn test_game_type_round_trips_through_display() {
        for game in [
            GameType::TexasHoldem,
            GameType::Omaha,
            GameType::SevenCardStud,
            GameType::Mixed,
        ] {
            assert_eq!(game.to_string().parse::<GameType>(), Ok(game));
        }
    }
}
