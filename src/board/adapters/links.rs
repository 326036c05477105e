//! URL resolver that mounts every route under a fixed base address.

use crate::board::ports::{Route, UrlResolver};

/// Resolves routes to `{base_url}{prefix}/{collection}/{key}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixUrlResolver {
    base_url: String,
    prefix: String,
}

impl PrefixUrlResolver {
    /// Creates a resolver for the given origin and path prefix.
    ///
    /// Trailing slashes on either part are dropped, and a missing leading
    /// slash on a non-empty prefix is added.
    #[must_use]
    pub fn new(base_url: impl Into<String>, prefix: impl Into<String>) -> Self {
        let origin = base_url.into().trim_end_matches('/').to_owned();
        let path = prefix.into().trim_matches('/').to_owned();
        let mount = if path.is_empty() {
            path
        } else {
            format!("/{path}")
        };
        Self {
            base_url: origin,
            prefix: mount,
        }
    }

    fn collection(&self, name: &str) -> String {
        format!("{}{}/{name}/", self.base_url, self.prefix)
    }
}

impl UrlResolver for PrefixUrlResolver {
    fn reverse(&self, route: Route<'_>) -> String {
        match route {
            Route::UserDetail(username) => format!("{}{username}/", self.collection("users")),
            Route::SprintDetail(id) => format!("{}{id}/", self.collection("sprints")),
            Route::TaskDetail(id) => format!("{}{id}/", self.collection("tasks")),
            Route::TaskList => self.collection("tasks"),
        }
    }
}
