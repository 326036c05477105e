//! Rejection type raised by the validation rules.

use crate::board::domain::{SprintId, Username};
use thiserror::Error;

/// Reason a proposed sprint or task was rejected.
///
/// The `Display` output is the client-facing message. [`Self::field`] tells
/// the HTTP layer which input the message belongs to.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A new or changed sprint end date lies before today.
    #[error("End date cannot be in the past.")]
    EndDateInPast,

    /// A completed task was moved to another sprint or to the backlog.
    #[error("Cannot change the sprint of a completed task.")]
    SprintOfCompletedTask,

    /// The task references a sprint that has already ended.
    #[error("Cannot assign tasks to past sprints")]
    PastSprint,

    /// The task references a sprint that does not exist.
    #[error("Invalid sprint \"{0}\" - object does not exist.")]
    UnknownSprint(SprintId),

    /// The task is assigned to a username that does not exist.
    #[error("Object with username={0} does not exist.")]
    UnknownAssignee(Username),

    /// A required name is empty or whitespace-only.
    #[error("This field may not be blank.")]
    BlankName,

    /// A name exceeds the stored column width.
    #[error("Ensure this field has no more than {max} characters.")]
    NameTooLong {
        /// Maximum number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// A backlog task has a status other than not started.
    #[error("Backlog tasks must have 'Not Started' status.")]
    BacklogTaskStarted,

    /// A not-started task carries a start date.
    #[error("'Not Started' tasks cannot have a start date.")]
    StartDateOnNotStartedTask,

    /// An unfinished task carries a completion date.
    #[error("Completed date cannot be set for incomplete tasks.")]
    CompletedDateOnIncompleteTask,

    /// A finished task has no completion date.
    #[error("Completed tasks must have a completed date")]
    MissingCompletedDate,
}

impl ValidationError {
    /// Returns the input field the rejection applies to, or `None` when the
    /// rejection concerns the combination of several fields.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::EndDateInPast => Some("end"),
            Self::SprintOfCompletedTask | Self::PastSprint | Self::UnknownSprint(_) => {
                Some("sprint")
            }
            Self::UnknownAssignee(_) => Some("assigned"),
            Self::BlankName | Self::NameTooLong { .. } => Some("name"),
            Self::BacklogTaskStarted
            | Self::StartDateOnNotStartedTask
            | Self::CompletedDateOnIncompleteTask
            | Self::MissingCompletedDate => None,
        }
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
