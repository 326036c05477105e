//! User representation.

use super::{Representable, RequestContext};
use crate::board::{
    domain::{User, UserId},
    filter::TaskFilter,
    ports::Route,
};
use serde::Serialize;

/// Links attached to a user representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLinks {
    /// Address of the user itself.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Task list filtered to the user's assignments.
    pub tasks: String,
}

/// Client-facing view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRepresentation {
    /// User identifier.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// Given and family name.
    pub full_name: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Related resources.
    pub links: UserLinks,
}

impl Representable for User {
    type Representation = UserRepresentation;

    fn represent(&self, context: &RequestContext<'_>) -> UserRepresentation {
        let assigned = TaskFilter::new().with_assigned(self.username().clone());
        UserRepresentation {
            id: self.id(),
            username: self.username().as_str().to_owned(),
            full_name: self.full_name(),
            is_active: self.is_active(),
            links: UserLinks {
                self_link: context.link(Route::UserDetail(self.username())),
                tasks: context.task_list_link(&assigned),
            },
        }
    }
}
