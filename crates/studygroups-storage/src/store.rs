//! The StudyGroupStore trait that backends implement.

use crate::types::*;
use crate::StoreError;

/// The storage trait `studygroups-core` depends on.
///
/// Mutations return the store's accept/reject verdict as a boolean;
/// `Err` is reserved for infrastructure failures (backend down, I/O).
#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait::async_trait]
pub trait StudyGroupStore: Send + Sync {
    /// Persist a new study group. `Ok(false)` means the store rejected it
    /// (e.g., a group for that subject already exists).
    async fn create_study_group(&self, group: &StudyGroup) -> Result<bool, StoreError>;

    /// Add a user to a group. `Ok(false)` if the group is unknown or the
    /// user is already a member.
    async fn join_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> Result<bool, StoreError>;

    /// Remove a user from a group. `Ok(false)` if the user is not currently
    /// a member.
    async fn leave_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> Result<bool, StoreError>;

    /// All study groups, ordered per `order`.
    async fn get_study_groups(&self, order: ListOrder) -> Result<Vec<StudyGroup>, StoreError>;

    /// Study groups whose subject matches `subject` exactly, oldest first.
    async fn search_study_groups(&self, subject: &Subject) -> Result<Vec<StudyGroup>, StoreError>;
}
