//! Notification group models.

use super::errors::GroupStoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience of a notification group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Player,
    Staff,
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKind::Player => write!(f, "player"),
            GroupKind::Staff => write!(f, "staff"),
        }
    }
}

impl std::str::FromStr for GroupKind {
    type Err = GroupStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "player" | "players" => Ok(GroupKind::Player),
            "staff" => Ok(GroupKind::Staff),
            other => Err(GroupStoreError::UnknownKind(other.to_string())),
        }
    }
}

/// A named set of push-notification recipients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationGroup {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub member_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}
