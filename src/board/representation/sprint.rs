//! Sprint representation.

use super::{Representable, RequestContext};
use crate::board::{
    domain::{Sprint, SprintId},
    filter::TaskFilter,
    ports::Route,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Links attached to a sprint representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintLinks {
    /// Address of the sprint itself.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Task list filtered to the sprint.
    pub tasks: String,
}

/// Client-facing view of a sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintRepresentation {
    /// Sprint identifier.
    pub id: SprintId,
    /// Sprint name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Last day of the sprint.
    pub end: NaiveDate,
    /// Related resources.
    pub links: SprintLinks,
}

impl Representable for Sprint {
    type Representation = SprintRepresentation;

    fn represent(&self, context: &RequestContext<'_>) -> SprintRepresentation {
        let planned = TaskFilter::new().with_sprint(self.id());
        SprintRepresentation {
            id: self.id(),
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            end: self.end(),
            links: SprintLinks {
                self_link: context.link(Route::SprintDetail(self.id())),
                tasks: context.task_list_link(&planned),
            },
        }
    }
}
