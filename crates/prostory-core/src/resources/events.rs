use prostory_api::models::EventType;
use prostory_api::{Query, Resource, ResourceId};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

pub fn types() -> FetchDescriptor<Vec<EventType>> {
    FetchDescriptor::list(
        Resource::EventTypes.path(),
        Resource::EventTypes.collection_key(&Query::new()),
    )
}

pub fn type_item(id: &ResourceId) -> FetchDescriptor<Option<EventType>> {
    FetchDescriptor::item(
        Resource::EventTypes.item_path(id),
        Resource::EventTypes.item_key(id),
    )
}

impl RenderPass {
    pub async fn event_types(&self) -> AsyncData<Vec<EventType>> {
        self.use_fetch(types()).await
    }

    pub async fn event_type(&self, id: &ResourceId) -> AsyncData<Option<EventType>> {
        self.use_fetch(type_item(id)).await
    }
}
