//! Common test helpers for controller tests.

use std::sync::Arc;

use chrono::{Duration, Utc};

use studygroups_storage::{MockStudyGroupStore, StudyGroup, StudyGroupId, Subject};
use studygroups_store_memory::MemoryStore;

use crate::{CoreConfig, StudyGroupController};

/// Test helper: controller wired to a prepared mock store.
pub fn mock_controller(mock: MockStudyGroupStore) -> StudyGroupController {
    StudyGroupController::new(Arc::new(mock), CoreConfig::default())
}

/// Test helper: controller backed by a fresh in-memory store.
///
/// Also returns the store so tests can observe membership directly.
pub fn memory_controller() -> (StudyGroupController, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let controller = StudyGroupController::new(store.clone(), CoreConfig::default());
    (controller, store)
}

/// Test helper: study group created `days_ago` days in the past.
pub fn group(id: i32, name: &str, subject: &str, days_ago: i64) -> StudyGroup {
    StudyGroup {
        id: StudyGroupId(id),
        name: name.to_string(),
        subject: Subject::new(subject),
        creation_date: Utc::now() - Duration::days(days_ago),
    }
}
