use prostory_api::models::{Lodge, LodgeType};
use prostory_api::{Query, Resource, ResourceId};

use crate::render::{AsyncData, FetchDescriptor, RenderPass};

/// Lodge list filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LodgeFilter {
    /// Lodge type slug.
    pub lodge_type: Option<String>,
    pub price_from_min: Option<f64>,
    pub price_from_max: Option<f64>,
    pub capacity_min: Option<u32>,
    pub capacity_max: Option<u32>,
    pub ordering: Option<String>,
}

impl LodgeFilter {
    pub fn to_query(&self) -> Query {
        Resource::Lodges
            .query()
            .param("type", self.lodge_type.as_deref())
            .param("price_from_min", self.price_from_min)
            .param("price_from_max", self.price_from_max)
            .param("capacity_min", self.capacity_min)
            .param("capacity_max", self.capacity_max)
            .param("ordering", self.ordering.as_deref())
    }
}

pub fn list(filter: &LodgeFilter) -> FetchDescriptor<Vec<Lodge>> {
    let query = filter.to_query();
    FetchDescriptor::list(
        Resource::Lodges.collection_path(&query),
        Resource::Lodges.collection_key(&query),
    )
}

pub fn item(id: &ResourceId) -> FetchDescriptor<Option<Lodge>> {
    FetchDescriptor::item(Resource::Lodges.item_path(id), Resource::Lodges.item_key(id))
}

pub fn types() -> FetchDescriptor<Vec<LodgeType>> {
    FetchDescriptor::list(
        Resource::LodgeTypes.path(),
        Resource::LodgeTypes.collection_key(&Query::new()),
    )
}

impl RenderPass {
    pub async fn lodges(&self, filter: &LodgeFilter) -> AsyncData<Vec<Lodge>> {
        self.use_fetch(list(filter)).await
    }

    pub async fn lodge(&self, id: &ResourceId) -> AsyncData<Option<Lodge>> {
        self.use_fetch(item(id)).await
    }

    pub async fn lodge_types(&self) -> AsyncData<Vec<LodgeType>> {
        self.use_fetch(types()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::render::FetchMode;

    #[test]
    fn unfiltered_list() {
        let d = list(&LodgeFilter::default());
        assert_eq!(d.path, "/lodges/");
        assert_eq!(d.key, "lodges-all");
        assert_eq!(d.mode, FetchMode::Server);
    }

    #[test]
    fn filters_render_in_fixed_order() {
        let filter = LodgeFilter {
            ordering: Some("price_from".into()),
            capacity_min: Some(4),
            lodge_type: Some("house".into()),
            price_from_max: Some(15000.0),
            ..LodgeFilter::default()
        };
        let d = list(&filter);
        assert_eq!(
            d.path,
            "/lodges/?type=house&price_from_max=15000&capacity_min=4&ordering=price_from"
        );
        assert_eq!(
            d.key,
            "lodges-type=house&price_from_max=15000&capacity_min=4&ordering=price_from"
        );
    }

    #[test]
    fn item_and_types() {
        let d = item(&ResourceId::from(12_u64));
        assert_eq!(d.path, "/lodges/12/");
        assert_eq!(d.key, "lodge-12");
        assert_eq!((d.default)(), None);

        let d = types();
        assert_eq!(d.path, "/lodges/types/");
        assert_eq!(d.key, "lodge-types");
    }
}
