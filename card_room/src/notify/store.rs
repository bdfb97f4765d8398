//! File-backed store for notification groups.

use super::errors::{GroupStoreError, GroupStoreResult};
use super::models::{GroupKind, NotificationGroup};
use chrono::Utc;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Notification groups mirrored to a JSON file
///
/// The file holds a single JSON array. Every change is written before it is
/// applied in memory, so a failed write leaves the store as it was.
#[derive(Debug)]
pub struct GroupStore {
    path: PathBuf,
    groups: Vec<NotificationGroup>,
}

impl GroupStore {
    /// Open the store at `path`
    ///
    /// A missing file, or one that does not parse as a group array, reads
    /// as an empty list. Other I/O failures are returned.
    pub fn open(path: impl Into<PathBuf>) -> GroupStoreResult<Self> {
        let path = path.into();
        let groups = Self::load(&path)?;

        log::debug!(
            "Loaded {} notification groups from {}",
            groups.len(),
            path.display()
        );

        Ok(Self { path, groups })
    }

    fn load(path: &Path) -> GroupStoreResult<Vec<NotificationGroup>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(groups) => Ok(groups),
            Err(e) => {
                log::warn!(
                    "Discarding unreadable notification groups in {}: {}",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn commit(&mut self, groups: Vec<NotificationGroup>) -> GroupStoreResult<()> {
        let json = serde_json::to_string_pretty(&groups)?;
        fs::write(&self.path, json)?;
        self.groups = groups;
        Ok(())
    }

    fn index_of(&self, group_id: Uuid) -> GroupStoreResult<usize> {
        self.groups
            .iter()
            .position(|group| group.id == group_id)
            .ok_or(GroupStoreError::GroupNotFound(group_id))
    }

    /// All groups in creation order
    pub fn list(&self) -> &[NotificationGroup] {
        &self.groups
    }

    pub fn get(&self, group_id: Uuid) -> Option<&NotificationGroup> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a group
    ///
    /// # Arguments
    ///
    /// * `name` - Display name (required)
    /// * `kind` - Player or staff audience
    /// * `member_ids` - Recipients; duplicates are dropped
    pub fn create(
        &mut self,
        name: &str,
        kind: GroupKind,
        member_ids: Vec<String>,
    ) -> GroupStoreResult<NotificationGroup> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupStoreError::MissingField("name"));
        }

        let group = NotificationGroup {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            member_ids: dedup_members(member_ids),
            created_at: Utc::now(),
        };

        let mut groups = self.groups.clone();
        groups.push(group.clone());
        self.commit(groups)?;

        log::info!("Created {} notification group '{}'", group.kind, group.name);
        Ok(group)
    }

    /// Rename a group
    pub fn rename(&mut self, group_id: Uuid, name: &str) -> GroupStoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupStoreError::MissingField("name"));
        }

        let index = self.index_of(group_id)?;
        let mut groups = self.groups.clone();
        groups[index].name = name.to_string();
        self.commit(groups)
    }

    /// Replace a group's members
    pub fn set_members(&mut self, group_id: Uuid, member_ids: Vec<String>) -> GroupStoreResult<()> {
        let index = self.index_of(group_id)?;
        let mut groups = self.groups.clone();
        groups[index].member_ids = dedup_members(member_ids);
        self.commit(groups)
    }

    /// Delete a group
    pub fn delete(&mut self, group_id: Uuid) -> GroupStoreResult<NotificationGroup> {
        let index = self.index_of(group_id)?;
        let mut groups = self.groups.clone();
        let removed = groups.remove(index);
        self.commit(groups)?;

        log::info!("Deleted notification group '{}'", removed.name);
        Ok(removed)
    }
}

/// Drop blank and repeated IDs, keeping first-seen order
fn dedup_members(member_ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    member_ids
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty() && seen.insert(id.clone()))
        .collect()
}
