use prostory_api::models::{GalleryColumn, GalleryImage, GalleryPosition};
use prostory_api::{Query, Resource};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

/// Gallery list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub position: Option<GalleryPosition>,
    pub ordering: Option<String>,
}

impl GalleryFilter {
    pub fn position(position: GalleryPosition) -> Self {
        Self {
            position: Some(position),
            ordering: None,
        }
    }

    pub fn to_query(&self) -> Query {
        Resource::Gallery
            .query()
            .param("position", self.position)
            .param("ordering", self.ordering.as_deref())
    }
}

/// Gallery images as fetched, with the position they were requested for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryView {
    pub position: Option<GalleryPosition>,
    pub images: Vec<GalleryImage>,
}

impl GalleryView {
    pub fn new(position: Option<GalleryPosition>, images: Vec<GalleryImage>) -> Self {
        Self { position, images }
    }

    /// Images in `column`, restricted to the requested position.
    pub fn images_by_column(&self, column: GalleryColumn) -> Vec<&GalleryImage> {
        let column = column.to_string();
        let position = self.position.map(|p| p.to_string());
        self.images
            .iter()
            .filter(|img| img.column.as_deref() == Some(column.as_str()))
            .filter(|img| match &position {
                Some(p) => img.position.as_deref() == Some(p.as_str()),
                None => true,
            })
            .collect()
    }

    pub fn images_by_position(&self, position: GalleryPosition) -> Vec<&GalleryImage> {
        let position = position.to_string();
        self.images
            .iter()
            .filter(|img| img.position.as_deref() == Some(position.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

pub fn list(filter: &GalleryFilter) -> FetchDescriptor<Vec<GalleryImage>> {
    let query = filter.to_query();
    FetchDescriptor::list(
        Resource::Gallery.collection_path(&query),
        Resource::Gallery.collection_key(&query),
    )
}

impl RenderPass {
    pub async fn gallery(&self, filter: &GalleryFilter) -> AsyncData<GalleryView> {
        let position = filter.position;
        self.use_fetch(list(filter))
            .await
            .map(|images| GalleryView::new(position, images))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn image(id: u64, position: &str, column: &str) -> GalleryImage {
        serde_json::from_value(json!({
            "id": id,
            "position": position,
            "column": column,
            "order": id,
        }))
        .unwrap()
    }

    fn ids(images: &[&GalleryImage]) -> Vec<String> {
        images.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn descriptors() {
        let d = list(&GalleryFilter::default());
        assert_eq!(d.path, "/gallery/");
        assert_eq!(d.key, "gallery-all");

        let d = list(&GalleryFilter::position(GalleryPosition::Main));
        assert_eq!(d.path, "/gallery/?position=main");
        assert_eq!(d.key, "gallery-position=main");
    }

    #[test]
    fn by_column_stays_within_requested_position() {
        let view = GalleryView::new(
            Some(GalleryPosition::Main),
            vec![
                image(1, "main", "left"),
                image(2, "main", "right"),
                image(3, "hero", "left"),
                image(4, "main", "left"),
            ],
        );
        assert_eq!(ids(&view.images_by_column(GalleryColumn::Left)), ["1", "4"]);
        assert_eq!(ids(&view.images_by_column(GalleryColumn::Right)), ["2"]);
        assert!(view.images_by_column(GalleryColumn::Center).is_empty());
    }

    #[test]
    fn by_column_without_position() {
        let view = GalleryView::new(
            None,
            vec![image(1, "main", "left"), image(3, "hero", "left")],
        );
        assert_eq!(ids(&view.images_by_column(GalleryColumn::Left)), ["1", "3"]);
        assert_eq!(ids(&view.images_by_position(GalleryPosition::Hero)), ["3"]);
    }
}
