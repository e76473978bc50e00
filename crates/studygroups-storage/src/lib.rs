//! Storage abstraction for the study-group service.
//!
//! Backend crates (e.g., studygroups-store-memory) implement [`StudyGroupStore`] so
//! `studygroups-core` doesn't depend on any specific storage engine or schema details.

use thiserror::Error;

mod store;
mod types;

#[cfg(feature = "test-support")]
pub use store::MockStudyGroupStore;
pub use store::StudyGroupStore;
pub use types::*;

/// Uniform error type for all storage backends.
///
/// Domain-level rejections (duplicate subject, unknown group, not a member)
/// travel as `Ok(false)` on the trait methods; `StoreError` is reserved for
/// the store itself misbehaving.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("conflict")]
    Conflict,
    #[error("backend error: {0}")]
    Backend(String),
}
