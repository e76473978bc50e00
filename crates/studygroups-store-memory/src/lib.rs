//! In-memory study-group store.
//!
//! This implementation is suitable for:
//! - Development and testing
//! - Single-process deployments that don't need durability
//!
//! State lives in process memory and is lost on restart. For anything
//! persistent, implement [`StudyGroupStore`] over a real database.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use studygroups_storage::{
    ListOrder, StoreError, StudyGroup, StudyGroupId, StudyGroupMember, StudyGroupStore, Subject,
    UserId,
};

/// In-memory backend over concurrent maps.
///
/// Policy decisions the contract leaves to the backend:
/// - one group per subject; creating a second one is rejected
/// - joining a group twice is rejected
/// - leaving a group without being a member is rejected
#[derive(Default)]
pub struct MemoryStore {
    groups: DashMap<StudyGroupId, StudyGroup>,
    members: DashMap<StudyGroupId, BTreeMap<UserId, DateTime<Utc>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership rows for a group, ordered by user id.
    ///
    /// Empty if the group is unknown or has no members.
    pub fn members(&self, group_id: StudyGroupId) -> Vec<StudyGroupMember> {
        self.members
            .get(&group_id)
            .map(|rows| {
                rows.iter()
                    .map(|(user_id, joined_at)| StudyGroupMember {
                        study_group_id: group_id,
                        user_id: *user_id,
                        joined_at: *joined_at,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn sorted(mut groups: Vec<StudyGroup>) -> Vec<StudyGroup> {
        groups.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then(a.id.cmp(&b.id))
        });
        groups
    }
}

#[async_trait::async_trait]
impl StudyGroupStore for MemoryStore {
    async fn create_study_group(&self, group: &StudyGroup) -> Result<bool, StoreError> {
        if self.groups.contains_key(&group.id) {
            return Ok(false);
        }
        if self
            .groups
            .iter()
            .any(|g| g.value().subject == group.subject)
        {
            return Ok(false);
        }
        self.groups.insert(group.id, group.clone());
        Ok(true)
    }

    async fn join_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> Result<bool, StoreError> {
        if !self.groups.contains_key(&group_id) {
            return Ok(false);
        }
        let mut rows = self.members.entry(group_id).or_default();
        if rows.contains_key(&user_id) {
            return Ok(false);
        }
        rows.insert(user_id, Utc::now());
        Ok(true)
    }

    async fn leave_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> Result<bool, StoreError> {
        match self.members.get_mut(&group_id) {
            Some(mut rows) => Ok(rows.remove(&user_id).is_some()),
            None => Ok(false),
        }
    }

    async fn get_study_groups(&self, order: ListOrder) -> Result<Vec<StudyGroup>, StoreError> {
        let groups: Vec<StudyGroup> = self.groups.iter().map(|g| g.value().clone()).collect();
        Ok(match order {
            ListOrder::CreationDateAsc => Self::sorted(groups),
            ListOrder::Unordered => groups,
        })
    }

    async fn search_study_groups(&self, subject: &Subject) -> Result<Vec<StudyGroup>, StoreError> {
        let matches = self
            .groups
            .iter()
            .filter(|g| g.value().subject == *subject)
            .map(|g| g.value().clone())
            .collect();
        Ok(Self::sorted(matches))
    }
}
