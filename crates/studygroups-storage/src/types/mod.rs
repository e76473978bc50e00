//! Data model shared by the controller and storage backends.

mod groups;
mod ids;

pub use groups::{ListOrder, StudyGroup, StudyGroupMember, Subject};
pub use ids::{StudyGroupId, UserId};
