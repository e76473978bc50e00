//! Study-group records and the membership relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StudyGroupId, UserId};

/// Subject label attached to a study group.
///
/// Matching (search, allow-list checks) is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(pub String);

impl Subject {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Study group record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: StudyGroupId,
    pub name: String,
    pub subject: Subject,
    pub creation_date: DateTime<Utc>,
}

/// Membership record: one row per user per group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyGroupMember {
    pub study_group_id: StudyGroupId,
    pub user_id: UserId,
    pub joined_at: DateTime<Utc>,
}

/// Ordering applied by `get_study_groups`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Oldest group first (ties broken by id).
    #[default]
    CreationDateAsc,
    /// Whatever order the backend yields; callers sort themselves if they care.
    Unordered,
}
