//! Sprint validation rules.

use super::{ValidationError, validate_name_length};
use crate::board::domain::{Sprint, SprintFields};
use chrono::NaiveDate;

/// Validates a sprint end date against today.
///
/// New sprints must not end in the past. An update may keep an end date that
/// has since passed, but may not move it to another past date.
///
/// # Errors
///
/// Returns [`ValidationError::EndDateInPast`] when the date is rejected.
pub fn validate_sprint_end(
    end: NaiveDate,
    prior: Option<&Sprint>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    let changed = prior.is_none_or(|sprint| sprint.end() != end);
    if changed && end < today {
        return Err(ValidationError::EndDateInPast);
    }
    Ok(())
}

/// Validates a proposed sprint, either new (`prior` is `None`) or the merged
/// result of an update.
///
/// # Errors
///
/// Returns the first [`ValidationError`] raised by the sprint rules.
pub fn validate_sprint(
    proposed: &SprintFields,
    prior: Option<&Sprint>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    validate_name_length(&proposed.name)?;
    validate_sprint_end(proposed.end, prior, today)
}
