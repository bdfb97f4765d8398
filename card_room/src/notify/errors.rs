//! Notification group store errors.

use thiserror::Error;
use uuid::Uuid;

/// Group store errors
#[derive(Debug, Error)]
pub enum GroupStoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Groups could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Group not found
    #[error("Notification group not found: {0}")]
    GroupNotFound(Uuid),

    /// Required field left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Group type other than player or staff
    #[error("Unknown group type '{0}'")]
    UnknownKind(String),
}

impl GroupStoreError {
    /// Message safe to show to staff
    ///
    /// File system details are not surfaced.
    pub fn client_message(&self) -> String {
        match self {
            GroupStoreError::Io(_) | GroupStoreError::Serialization(_) => {
                "Could not save notification groups".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for group store operations
pub type GroupStoreResult<T> = Result<T, GroupStoreError>;
