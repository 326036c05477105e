//! External representations of users, sprints and tasks.
//!
//! Each record type implements [`Representable`], producing a serialisable
//! value that carries the selected fields plus a `links` map of related
//! resource addresses. Links are built through the [`UrlResolver`] carried by
//! the [`RequestContext`] passed into each call.

mod sprint;
mod task;
mod user;

pub use sprint::{SprintLinks, SprintRepresentation};
pub use task::{TaskLinks, TaskRepresentation};
pub use user::{UserLinks, UserRepresentation};

use crate::board::{
    filter::TaskFilter,
    ports::{Route, UrlResolver},
};
use serde::Serialize;

/// Per-request information needed to build representations.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    resolver: &'a dyn UrlResolver,
}

impl<'a> RequestContext<'a> {
    /// Creates a context resolving links through `resolver`.
    #[must_use]
    pub const fn new(resolver: &'a dyn UrlResolver) -> Self {
        Self { resolver }
    }

    /// Returns the address of `route`.
    #[must_use]
    pub fn link(&self, route: Route<'_>) -> String {
        self.resolver.reverse(route)
    }

    /// Returns the task collection address narrowed by `filter`.
    #[must_use]
    pub fn task_list_link(&self, filter: &TaskFilter) -> String {
        let list = self.link(Route::TaskList);
        if filter.is_empty() {
            return list;
        }
        format!("{list}?{}", filter.to_query_string())
    }
}

impl std::fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext").finish_non_exhaustive()
    }
}

/// Record type with an external representation.
pub trait Representable {
    /// Serialisable representation produced for clients.
    type Representation: Serialize;

    /// Builds the representation of `self` for the current request.
    fn represent(&self, context: &RequestContext<'_>) -> Self::Representation;
}

/// Builds the representations of every record in `records`.
#[must_use]
pub fn represent_all<'r, T>(
    records: impl IntoIterator<Item = &'r T>,
    context: &RequestContext<'_>,
) -> Vec<T::Representation>
where
    T: Representable + 'r,
{
    records
        .into_iter()
        .map(|record| record.represent(context))
        .collect()
}
