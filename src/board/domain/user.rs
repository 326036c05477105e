//! Read-only user records referenced by task assignments.

use super::{UserId, Username};
use serde::{Deserialize, Serialize};

/// User account as seen by the board.
///
/// Accounts are managed outside this crate; the board only reads them to
/// resolve assignees and to build user representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    first_name: String,
    last_name: String,
    is_active: bool,
}

impl User {
    /// Creates an active user with empty name parts.
    #[must_use]
    pub const fn new(id: UserId, username: Username) -> Self {
        Self {
            id,
            username,
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
        }
    }

    /// Sets the given and family name.
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets whether the account is active.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the unique username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the given and family name separated by a space, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Returns whether the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}
