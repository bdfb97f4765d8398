//! Notification module providing persisted push-notification groups.
//!
//! Groups are the only floor data kept across sessions. They are stored as a
//! JSON array of `{ id, name, type, memberIds, createdAt }` records in a local
//! file; contents that fail to parse are treated as an empty list.

pub mod errors;
pub mod models;
pub mod store;

pub use errors::{GroupStoreError, GroupStoreResult};
pub use models::{GroupKind, NotificationGroup};
pub use store::GroupStore;
