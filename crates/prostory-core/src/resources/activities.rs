use prostory_api::models::{Activity, ActivityCategory, Season};
use prostory_api::{Query, Resource, ResourceId};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

/// Activity list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub category: Option<ActivityCategory>,
    pub season: Option<Season>,
    pub ordering: Option<String>,
}

impl ActivityFilter {
    pub fn to_query(&self) -> Query {
        Resource::Activities
            .query()
            .param("category", self.category)
            .param("season", self.season)
            .param("ordering", self.ordering.as_deref())
    }
}

pub fn list(filter: &ActivityFilter) -> FetchDescriptor<Vec<Activity>> {
    let query = filter.to_query();
    FetchDescriptor::list(
        Resource::Activities.collection_path(&query),
        Resource::Activities.collection_key(&query),
    )
}

pub fn item(id: &ResourceId) -> FetchDescriptor<Option<Activity>> {
    FetchDescriptor::item(
        Resource::Activities.item_path(id),
        Resource::Activities.item_key(id),
    )
}

impl RenderPass {
    pub async fn activities(&self, filter: &ActivityFilter) -> AsyncData<Vec<Activity>> {
        self.use_fetch(list(filter)).await
    }

    pub async fn activity(&self, id: &ResourceId) -> AsyncData<Option<Activity>> {
        self.use_fetch(item(id)).await
    }
}
