use prostory_api::models::{NewsArticle, NewsSummary};
use prostory_api::{Query, Resource, ResourceId};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

pub fn list() -> FetchDescriptor<Vec<NewsSummary>> {
    FetchDescriptor::list(
        Resource::News.path(),
        Resource::News.collection_key(&Query::new()),
    )
}

pub fn item(id: &ResourceId) -> FetchDescriptor<Option<NewsArticle>> {
    FetchDescriptor::item(Resource::News.item_path(id), Resource::News.item_key(id))
}

impl RenderPass {
    pub async fn news(&self) -> AsyncData<Vec<NewsSummary>> {
        self.use_fetch(list()).await
    }

    pub async fn news_item(&self, id: &ResourceId) -> AsyncData<Option<NewsArticle>> {
        self.use_fetch(item(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptors() {
        let d = list();
        assert_eq!(d.path, "/news/");
        assert_eq!(d.key, "news");

        let d = item(&ResourceId::from("season-opening"));
        assert_eq!(d.path, "/news/season-opening/");
        assert_eq!(d.key, "news-season-opening");
    }
}
