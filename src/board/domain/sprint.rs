//! Sprint records and partial sprint updates.

use super::SprintId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Writable sprint attributes, as proposed by a client or loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintFields {
    /// Short sprint name; may be blank.
    pub name: String,
    /// Free-text description; may be blank.
    pub description: String,
    /// Last day of the sprint.
    pub end: NaiveDate,
}

impl SprintFields {
    /// Creates sprint attributes with a blank name and description.
    #[must_use]
    pub const fn new(end: NaiveDate) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            end,
        }
    }

    /// Sets the sprint name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sprint description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Stored sprint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    id: SprintId,
    fields: SprintFields,
}

impl Sprint {
    /// Binds stored attributes to their identifier.
    #[must_use]
    pub const fn from_fields(id: SprintId, fields: SprintFields) -> Self {
        Self { id, fields }
    }

    /// Returns the sprint identifier.
    #[must_use]
    pub const fn id(&self) -> SprintId {
        self.id
    }

    /// Returns the sprint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Returns the sprint description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the last day of the sprint.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.fields.end
    }

    /// Returns whether the sprint ended before `today`.
    #[must_use]
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.fields.end < today
    }

    /// Returns the writable attributes.
    #[must_use]
    pub const fn fields(&self) -> &SprintFields {
        &self.fields
    }

    /// Returns the attributes that result from applying `changes`.
    #[must_use]
    pub fn merged_with(&self, changes: &SprintChanges) -> SprintFields {
        SprintFields {
            name: changes
                .name
                .clone()
                .unwrap_or_else(|| self.fields.name.clone()),
            description: changes
                .description
                .clone()
                .unwrap_or_else(|| self.fields.description.clone()),
            end: changes.end.unwrap_or(self.fields.end),
        }
    }
}

/// Partial update of a sprint; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SprintChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement end date.
    pub end: Option<NaiveDate>,
}

impl SprintChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the end date.
    #[must_use]
    pub const fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns the change set replacing every field with `fields`.
    #[must_use]
    pub fn replacing(fields: SprintFields) -> Self {
        Self {
            name: Some(fields.name),
            description: Some(fields.description),
            end: Some(fields.end),
        }
    }
}
