//! Business rules applied to sprint and task writes before persistence.
//!
//! Every rule is a pure function of the proposed value, the prior record (on
//! update) and today's date. Rules stop at the first failure and nothing is
//! persisted when any rule fails.

mod error;
mod sprint;
mod task;

pub use error::ValidationError;
pub use sprint::{validate_sprint, validate_sprint_end};
pub use task::{
    TaskProposal, validate_backlog_status, validate_completed_date, validate_start_date,
    validate_task, validate_task_consistency, validate_task_name, validate_task_sprint,
};

/// Widest name the record store accepts, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Validates that a name fits the stored column width.
///
/// # Errors
///
/// Returns [`ValidationError::NameTooLong`] when the name exceeds
/// [`MAX_NAME_LENGTH`] characters.
pub fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let actual = name.chars().count();
    if actual > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
            actual,
        });
    }
    Ok(())
}
