//! Controller outcomes, independent of transport encoding.

use thiserror::Error;

use studygroups_storage::{StoreError, Subject};

/// What a controller call produced. A transport layer encodes `Ok` as a
/// 200-class response and [`Failure`] via [`Failure::status_code`].
pub type Outcome<T> = Result<T, Failure>;

/// Flat failure surface of the controller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Failure {
    /// The subject is not in the configured allow-list; the store was
    /// never consulted.
    #[error("subject '{0}' is not an allowed subject")]
    SubjectNotAllowed(Subject),

    /// The store reported that the operation could not be applied.
    #[error("the store rejected the operation")]
    Rejected,

    /// The storage backend itself failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl Failure {
    /// HTTP-equivalent status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Failure::SubjectNotAllowed(_) => 400,
            Failure::Rejected => 409,
            Failure::Unavailable(_) => 503,
        }
    }
}

impl From<StoreError> for Failure {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Backend(msg) => Failure::Unavailable(msg),
            StoreError::NotFound | StoreError::AlreadyExists | StoreError::Conflict => {
                Failure::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_http_equivalents() {
        assert_eq!(
            Failure::SubjectNotAllowed(Subject::new("History")).status_code(),
            400
        );
        assert_eq!(Failure::Rejected.status_code(), 409);
        assert_eq!(Failure::Unavailable("down".into()).status_code(), 503);
    }

    #[test]
    fn store_errors_collapse_into_failures() {
        assert_eq!(
            Failure::from(StoreError::Backend("boom".into())),
            Failure::Unavailable("boom".into())
        );
        assert_eq!(Failure::from(StoreError::NotFound), Failure::Rejected);
        assert_eq!(Failure::from(StoreError::AlreadyExists), Failure::Rejected);
        assert_eq!(Failure::from(StoreError::Conflict), Failure::Rejected);
    }
}
