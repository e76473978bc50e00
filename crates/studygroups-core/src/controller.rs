//! The study-group controller.

use std::sync::Arc;

use studygroups_storage::{ListOrder, StudyGroup, StudyGroupId, StudyGroupStore, Subject, UserId};

use crate::config::CoreConfig;
use crate::outcome::{Failure, Outcome};

/// Transport-facing orchestrator: validates input, delegates to the store,
/// maps results to [`Outcome`]s. Stateless per call; cancellation simply
/// drops the pending store future.
pub struct StudyGroupController {
    store: Arc<dyn StudyGroupStore>,
    config: CoreConfig,
}

impl StudyGroupController {
    pub fn new(store: Arc<dyn StudyGroupStore>, config: CoreConfig) -> Self {
        Self { store, config }
    }

    /// Create a study group. Subjects outside the allow-list are rejected
    /// without consulting the store.
    pub async fn create_study_group(&self, group: StudyGroup) -> Outcome<()> {
        if !self.config.is_subject_allowed(&group.subject) {
            tracing::debug!(subject = %group.subject, "rejected study group with disallowed subject");
            return Err(Failure::SubjectNotAllowed(group.subject));
        }
        if self.store.create_study_group(&group).await? {
            Ok(())
        } else {
            tracing::debug!(group = %group.id, "store rejected study group creation");
            Err(Failure::Rejected)
        }
    }

    /// Add a user to a group. The store's verdict passes through unchanged.
    pub async fn join_study_group(&self, group_id: StudyGroupId, user_id: UserId) -> Outcome<()> {
        if self.store.join_study_group(group_id, user_id).await? {
            Ok(())
        } else {
            Err(Failure::Rejected)
        }
    }

    /// Remove a user from a group. The store's verdict passes through unchanged.
    pub async fn leave_study_group(&self, group_id: StudyGroupId, user_id: UserId) -> Outcome<()> {
        if self.store.leave_study_group(group_id, user_id).await? {
            Ok(())
        } else {
            Err(Failure::Rejected)
        }
    }

    /// All study groups, oldest first.
    pub async fn get_study_groups(&self) -> Outcome<Vec<StudyGroup>> {
        Ok(self.store.get_study_groups(ListOrder::default()).await?)
    }

    /// Study groups whose subject matches `subject` exactly.
    pub async fn search_study_groups(&self, subject: &Subject) -> Outcome<Vec<StudyGroup>> {
        Ok(self.store.search_study_groups(subject).await?)
    }
}
