//! Console configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use card_room::MAX_SEATS;
use std::path::PathBuf;

/// Complete console configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// File backing the notification groups
    pub groups_path: PathBuf,
    /// Optional JSON floor seed loaded at startup
    pub seed_path: Option<PathBuf>,
    /// Seat count for `table add` without an explicit count
    pub default_seats: usize,
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `groups_override` - Optional groups file override (from CLI args)
    /// * `seed_override` - Optional seed file override (from CLI args)
    /// * `seats_override` - Optional default seat count override (from CLI args)
    pub fn from_env(
        groups_override: Option<PathBuf>,
        seed_override: Option<PathBuf>,
        seats_override: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let groups_path = groups_override
            .or_else(|| std::env::var("CARD_ROOM_GROUPS_PATH").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("notification_groups.json"));

        let seed_path = seed_override.or_else(|| {
            std::env::var("CARD_ROOM_SEED_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        });

        let default_seats = match seats_override {
            Some(seats) => seats,
            None => match std::env::var("CARD_ROOM_DEFAULT_SEATS") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "CARD_ROOM_DEFAULT_SEATS".to_string(),
                    reason: format!("'{}' is not a number", raw),
                })?,
                Err(_) => 9,
            },
        };

        let config = ConsoleConfig {
            groups_path,
            seed_path,
            default_seats,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_seats == 0 || self.default_seats > MAX_SEATS {
            return Err(ConfigError::Invalid {
                var: "CARD_ROOM_DEFAULT_SEATS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_SEATS),
            });
        }

        if self.groups_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: "CARD_ROOM_GROUPS_PATH".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
