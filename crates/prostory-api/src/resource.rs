// Backend resource catalogue
//
// Every endpoint the frontend reads, with its path, cache key names and
// accepted filters. Paths follow the DRF router layout: collections at
// `/{resource}/`, items at `/{resource}/{id}/`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use url::form_urlencoded::byte_serialize;

use crate::cache_key::{derive_key, item_key};
use crate::query::Query;

/// Opaque item identifier: numeric primary key or slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Numeric(u64),
    Slug(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Slug(s) => f.write_str(s),
        }
    }
}

impl ResourceId {
    /// The id as a single percent-encoded path segment.
    ///
    /// `/`, `?`, `#` and `%` in a slug are escaped, so an id can never
    /// add segments or a query to the request.
    pub fn path_segment(&self) -> String {
        match self {
            Self::Numeric(n) => n.to_string(),
            Self::Slug(s) => byte_serialize(s.as_bytes())
                .collect::<String>()
                .replace('+', "%20"),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        s.parse::<u64>()
            .map_or_else(|_| Self::Slug(s.to_owned()), Self::Numeric)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        match s.parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Slug(s),
        }
    }
}

impl FromStr for ResourceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map_or_else(|_| Self::Slug(s.to_owned()), Self::Numeric))
    }
}

/// A backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Resource {
    #[strum(serialize = "activities")]
    Activities,
    #[strum(serialize = "events/types")]
    EventTypes,
    #[strum(serialize = "gallery")]
    Gallery,
    #[strum(serialize = "hero")]
    Hero,
    #[strum(serialize = "lodges")]
    Lodges,
    #[strum(serialize = "lodges/types")]
    LodgeTypes,
    #[strum(serialize = "news")]
    News,
    #[strum(serialize = "restaurant")]
    Restaurant,
    #[strum(serialize = "restaurant/images")]
    RestaurantImages,
    #[strum(serialize = "restaurant/meal-types")]
    MealTypes,
    #[strum(serialize = "restaurant/benefits")]
    RestaurantBenefits,
    #[strum(serialize = "statistics")]
    Statistics,
    #[strum(serialize = "sitemap.xml")]
    Sitemap,
}

impl Resource {
    /// Backend-relative collection path, e.g. `/lodges/`.
    pub fn path(self) -> String {
        match self {
            Self::Sitemap => "/sitemap.xml".into(),
            other => format!("/{other}/"),
        }
    }

    /// Backend-relative item path, e.g. `/lodges/42/`.
    pub fn item_path(self, id: &ResourceId) -> String {
        format!("/{self}/{}/", id.path_segment())
    }

    /// Collection path with the query string appended.
    pub fn collection_path(self, query: &Query) -> String {
        format!("{}{}", self.path(), query.build())
    }

    /// Name used for collection cache keys.
    pub fn key_name(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::EventTypes => "event-types",
            Self::Gallery => "gallery",
            Self::Hero => "hero",
            Self::Lodges => "lodges",
            Self::LodgeTypes => "lodge-types",
            Self::News => "news",
            Self::Restaurant => "restaurant",
            Self::RestaurantImages => "restaurant-images",
            Self::MealTypes => "meal-types",
            Self::RestaurantBenefits => "restaurant-benefits",
            Self::Statistics => "statistics",
            Self::Sitemap => "sitemap",
        }
    }

    /// Name used for single-item cache keys, for resources with item views.
    pub fn item_key_name(self) -> Option<&'static str> {
        match self {
            Self::Activities => Some("activity"),
            Self::EventTypes => Some("event-type"),
            Self::Lodges => Some("lodge"),
            Self::News => Some("news"),
            _ => None,
        }
    }

    /// Accepted filters in their fixed priority order.
    pub fn filters(self) -> &'static [&'static str] {
        match self {
            Self::Lodges => &[
                "type",
                "price_from_min",
                "price_from_max",
                "capacity_min",
                "capacity_max",
                "ordering",
            ],
            Self::Activities => &["category", "season", "ordering"],
            Self::Gallery => &["position", "ordering"],
            _ => &[],
        }
    }

    pub fn is_filterable(self) -> bool {
        !self.filters().is_empty()
    }

    /// Empty query carrying this resource's filter order.
    pub fn query(self) -> Query {
        Query::ordered(self.filters())
    }

    /// Cache key for a collection read.
    ///
    /// Filterable resources always carry a filter component (`lodges-all`);
    /// the others are keyed by name alone (`event-types`).
    pub fn collection_key(self, query: &Query) -> String {
        if self.is_filterable() {
            derive_key(self.key_name(), query)
        } else {
            self.key_name().to_owned()
        }
    }

    /// Cache key for an item read.
    pub fn item_key(self, id: &ResourceId) -> String {
        item_key(self.item_key_name().unwrap_or(self.key_name()), id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn collection_paths() {
        assert_eq!(Resource::Lodges.path(), "/lodges/");
        assert_eq!(Resource::EventTypes.path(), "/events/types/");
        assert_eq!(Resource::MealTypes.path(), "/restaurant/meal-types/");
        assert_eq!(Resource::Sitemap.path(), "/sitemap.xml");
    }

    #[test]
    fn item_paths() {
        assert_eq!(
            Resource::Lodges.item_path(&ResourceId::from(42_u64)),
            "/lodges/42/"
        );
        assert_eq!(
            Resource::News.item_path(&ResourceId::from("opening-day")),
            "/news/opening-day/"
        );
    }

    #[test]
    fn item_paths_escape_slugs() {
        assert_eq!(
            Resource::Lodges.item_path(&ResourceId::from("../statistics")),
            "/lodges/..%2Fstatistics/"
        );
        assert_eq!(
            Resource::Lodges.item_path(&ResourceId::from("a?type=x")),
            "/lodges/a%3Ftype%3Dx/"
        );
        assert_eq!(
            Resource::News.item_path(&ResourceId::from("день #1")),
            "/news/%D0%B4%D0%B5%D0%BD%D1%8C%20%231/"
        );
    }

    #[test]
    fn item_keys_keep_the_raw_id() {
        assert_eq!(
            Resource::Lodges.item_key(&ResourceId::from("a?type=x")),
            "lodge-a?type=x"
        );
    }

    #[test]
    fn collection_path_with_filters() {
        let query = Resource::Gallery.query().param("position", Some("main"));
        assert_eq!(
            Resource::Gallery.collection_path(&query),
            "/gallery/?position=main"
        );
        assert_eq!(
            Resource::Gallery.collection_path(&Resource::Gallery.query()),
            "/gallery/"
        );
    }

    #[test]
    fn collection_keys() {
        assert_eq!(
            Resource::Lodges.collection_key(&Resource::Lodges.query()),
            "lodges-all"
        );
        assert_eq!(
            Resource::Lodges
                .collection_key(&Resource::Lodges.query().param("type", Some("house"))),
            "lodges-type=house"
        );
        assert_eq!(
            Resource::EventTypes.collection_key(&Query::new()),
            "event-types"
        );
        assert_eq!(
            Resource::RestaurantBenefits.collection_key(&Query::new()),
            "restaurant-benefits"
        );
    }

    #[test]
    fn item_keys() {
        assert_eq!(Resource::Lodges.item_key(&7_u64.into()), "lodge-7");
        assert_eq!(Resource::EventTypes.item_key(&3_u64.into()), "event-type-3");
        assert_eq!(Resource::News.item_key(&"spring".into()), "news-spring");
        assert_eq!(Resource::Activities.item_key(&1_u64.into()), "activity-1");
    }

    #[test]
    fn parses_from_endpoint_name() {
        assert_eq!(
            "lodges/types".parse::<Resource>().unwrap(),
            Resource::LodgeTypes
        );
        assert!("unknown".parse::<Resource>().is_err());
    }

    #[test]
    fn every_collection_key_is_unique() {
        let mut keys: Vec<_> = Resource::iter().map(Resource::key_name).collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn resource_id_parsing() {
        assert_eq!("42".parse::<ResourceId>().unwrap(), ResourceId::Numeric(42));
        assert_eq!(
            ResourceId::from("glamping".to_string()),
            ResourceId::Slug("glamping".into())
        );
        let decoded: ResourceId = serde_json::from_str("5").unwrap();
        assert_eq!(decoded, ResourceId::Numeric(5));
    }
}
