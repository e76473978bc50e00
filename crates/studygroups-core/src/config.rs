//! Controller configuration.
//!
//! Supports configuration via environment variables:
//!
//! ```bash
//! # Comma-separated subject allow-list (defaults to Math, Chemistry, Physics)
//! STUDYGROUPS_ALLOWED_SUBJECTS="Math,Chemistry,Physics"
//! ```

use std::env;

use thiserror::Error;

use studygroups_storage::Subject;

/// Environment variable holding the comma-separated subject allow-list.
pub const ALLOWED_SUBJECTS_VAR: &str = "STUDYGROUPS_ALLOWED_SUBJECTS";

/// Subjects permitted at group-creation time when nothing is configured.
const DEFAULT_ALLOWED_SUBJECTS: &[&str] = &["Math", "Chemistry", "Physics"];

/// Controller configuration
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Subjects permitted at group-creation time.
    pub allowed_subjects: Vec<Subject>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            allowed_subjects: DEFAULT_ALLOWED_SUBJECTS
                .iter()
                .map(|s| Subject::new(*s))
                .collect(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STUDYGROUPS_ALLOWED_SUBJECTS is set but contains no subjects")]
    EmptyAllowList,
}

impl CoreConfig {
    /// Load configuration from environment variables.
    ///
    /// An unset variable falls back to the default allow-list; a variable
    /// that is set but names no subjects is a configuration error.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ALLOWED_SUBJECTS_VAR) {
            Err(_) => Ok(Self::default()),
            Ok(raw) => {
                let allowed_subjects: Vec<Subject> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(Subject::new)
                    .collect();
                if allowed_subjects.is_empty() {
                    return Err(ConfigError::EmptyAllowList);
                }
                Ok(Self { allowed_subjects })
            }
        }
    }

    /// Whether `subject` is permitted at group-creation time.
    pub fn is_subject_allowed(&self, subject: &Subject) -> bool {
        self.allowed_subjects.contains(subject)
    }
}
