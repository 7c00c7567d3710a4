// Collection responses
//
// The backend answers list endpoints either with a bare JSON array or,
// when DRF pagination is on, with `{ count, next, previous, results }`.
// Some endpoints answer `null` or nothing at all. `Collection` is the
// single boundary where that ambiguity is resolved.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// DRF page envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub results: Vec<Value>,
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Decoded shape of a collection response.
///
/// Shapes that fit neither form collapse to `Empty`; a collection
/// response never fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Collection {
    #[default]
    Empty,
    Bare(Vec<Value>),
    Paginated(Page),
}

impl From<Value> for Collection {
    fn from(raw: Value) -> Self {
        match raw {
            Value::Array(items) => Self::Bare(items),
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(results)) => Self::Paginated(Page {
                    results,
                    count: map.get("count").and_then(Value::as_u64),
                    next: map.get("next").and_then(Value::as_str).map(String::from),
                    previous: map
                        .get("previous")
                        .and_then(Value::as_str)
                        .map(String::from),
                }),
                _ => Self::Empty,
            },
            _ => Self::Empty,
        }
    }
}

impl Collection {
    /// Items in backend order.
    pub fn items(&self) -> &[Value] {
        match self {
            Self::Empty => &[],
            Self::Bare(items) => items,
            Self::Paginated(page) => &page.results,
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Empty => Vec::new(),
            Self::Bare(items) => items,
            Self::Paginated(page) => page.results,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Total reported by the page envelope, falling back to the item count.
    pub fn total(&self) -> usize {
        match self {
            Self::Paginated(Page {
                count: Some(count), ..
            }) => usize::try_from(*count).unwrap_or(usize::MAX),
            _ => self.len(),
        }
    }

    /// Decode the items into typed records.
    ///
    /// Only the items are checked; the envelope shape has already been
    /// resolved and never errors.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Vec<T>, Error> {
        self.into_items()
            .into_iter()
            .map(|item| {
                serde_json::from_value(item.clone()).map_err(|e| Error::Deserialization {
                    message: e.to_string(),
                    body: item.to_string(),
                })
            })
            .collect()
    }
}

/// Normalize any collection response into an ordered sequence.
pub fn normalize(raw: Value) -> Vec<Value> {
    Collection::from(raw).into_items()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn null_is_empty() {
        assert_eq!(normalize(Value::Null), Vec::<Value>::new());
    }

    #[test]
    fn bare_array_is_returned_unchanged() {
        let items = json!([{ "id": 2 }, { "id": 1 }]);
        assert_eq!(normalize(items.clone()), items.as_array().unwrap().clone());
    }

    #[test]
    fn envelope_is_unwrapped() {
        let raw = json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{ "id": 1 }, { "id": 2 }]
        });
        assert_eq!(normalize(raw), vec![json!({ "id": 1 }), json!({ "id": 2 })]);
    }

    #[test]
    fn results_are_not_recursively_normalized() {
        let raw = json!({ "results": [{ "results": [1] }] });
        assert_eq!(normalize(raw), vec![json!({ "results": [1] })]);
    }

    #[test]
    fn other_shapes_are_empty() {
        assert!(normalize(json!({ "images": [] })).is_empty());
        assert!(normalize(json!("text")).is_empty());
        assert!(normalize(json!(42)).is_empty());
        assert!(normalize(json!({ "results": "oops" })).is_empty());
    }

    #[test]
    fn page_metadata_is_kept() {
        let collection = Collection::from(json!({
            "count": 40,
            "next": "http://localhost:8000/api/news/?page=2",
            "previous": null,
            "results": [{ "id": 1 }]
        }));
        match &collection {
            Collection::Paginated(page) => {
                assert_eq!(page.count, Some(40));
                assert_eq!(
                    page.next.as_deref(),
                    Some("http://localhost:8000/api/news/?page=2")
                );
                assert_eq!(page.previous, None);
            }
            other => panic!("expected Paginated, got {other:?}"),
        }
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.total(), 40);
    }

    #[test]
    fn deserializes_through_serde() {
        let collection: Collection = serde_json::from_str("null").unwrap();
        assert_eq!(collection, Collection::Empty);

        let collection: Collection = serde_json::from_str(r#"[1, 2, 3]"#).unwrap();
        assert_eq!(collection.total(), 3);
    }

    #[test]
    fn decode_reports_bad_items() {
        #[derive(Debug, serde::Deserialize)]
        struct Item {
            #[allow(dead_code)]
            id: u32,
        }

        let ok = Collection::from(json!([{ "id": 1 }])).decode::<Item>();
        assert_eq!(ok.unwrap().len(), 1);

        let bad = Collection::from(json!([{ "id": "x" }])).decode::<Item>();
        assert!(matches!(bad, Err(Error::Deserialization { .. })));
    }
}
