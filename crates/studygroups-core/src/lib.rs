//! Study-group controller: validation, delegation, outcome mapping.
//!
//! The controller is the transport-facing boundary of the service. It owns
//! exactly one piece of domain validation (the allowed-subjects set) and
//! otherwise translates [`StudyGroupStore`] results into [`Outcome`]s that
//! a transport layer can encode however it likes.
//!
//! [`StudyGroupStore`]: studygroups_storage::StudyGroupStore

mod config;
mod controller;
mod outcome;

pub use config::{ConfigError, CoreConfig, ALLOWED_SUBJECTS_VAR};
pub use controller::StudyGroupController;
pub use outcome::{Failure, Outcome};

#[cfg(test)]
mod tests;
