// Query string construction
//
// Filter parameters are emitted in a fixed priority order declared by the
// caller, never in insertion order, so the same filter set always yields
// the same string (and therefore the same cache key).

use std::collections::BTreeMap;

use url::form_urlencoded::byte_serialize;

use crate::cache_key::ALL_SENTINEL;

/// Optional filters for one request, rendered in a fixed key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    order: Vec<&'static str>,
    params: BTreeMap<String, String>,
}

impl Query {
    /// An empty query with no declared order (keys sort by name).
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty query whose keys render in `order`.
    pub fn ordered(order: &[&'static str]) -> Self {
        Self {
            order: order.to_vec(),
            params: BTreeMap::new(),
        }
    }

    /// Record a parameter. `None` and empty values are dropped.
    pub fn param(mut self, key: &str, value: Option<impl ToString>) -> Self {
        self.set(key, value);
        self
    }

    /// In-place form of [`Query::param`].
    pub fn set(&mut self, key: &str, value: Option<impl ToString>) {
        match value.map(|v| v.to_string()).filter(|v| !v.trim().is_empty()) {
            Some(v) => {
                self.params.insert(key.to_owned(), v);
            }
            None => {
                self.params.remove(key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Present parameters in output order: declared keys first, then any
    /// undeclared keys by name.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let declared = self
            .order
            .iter()
            .filter_map(|k| self.params.get_key_value(*k));
        let undeclared = self
            .params
            .iter()
            .filter(|(k, _)| !self.order.iter().any(|o| *o == k.as_str()));

        declared
            .chain(undeclared)
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// `k1=v1&k2=v2` with keys and values form-urlencoded; empty when no
    /// parameter is present.
    pub fn encoded(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Cache key component: the encoded query, or `"all"` when empty.
    pub fn canonical(&self) -> String {
        let encoded = self.encoded();
        if encoded.is_empty() {
            ALL_SENTINEL.to_owned()
        } else {
            encoded
        }
    }

    /// `""` or `"?k1=v1&k2=v2"`, ready to append to a resource path.
    pub fn build(&self) -> String {
        let encoded = self.encoded();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{encoded}")
        }
    }
}

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

/// Build a query string from optional parameters in the given key order.
pub fn build_query<'a, I, V>(order: &[&'static str], params: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<V>)>,
    V: ToString,
{
    params
        .into_iter()
        .fold(Query::ordered(order), |q, (k, v)| q.param(k, v))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GALLERY: &[&str] = &["position", "ordering"];

    #[test]
    fn empty_query_is_empty_string() {
        assert_eq!(build_query(GALLERY, Vec::<(&str, Option<&str>)>::new()), "");
        assert_eq!(Query::new().build(), "");
    }

    #[test]
    fn single_param() {
        assert_eq!(
            build_query(GALLERY, [("position", Some("main"))]),
            "?position=main"
        );
    }

    #[test]
    fn fixed_order_regardless_of_insertion() {
        let forward = build_query(
            GALLERY,
            [("position", Some("main")), ("ordering", Some("order"))],
        );
        let backward = build_query(
            GALLERY,
            [("ordering", Some("order")), ("position", Some("main"))],
        );
        assert_eq!(forward, "?position=main&ordering=order");
        assert_eq!(forward, backward);
    }

    #[test]
    fn absent_and_empty_values_are_skipped() {
        let query = Query::ordered(GALLERY)
            .param("position", None::<&str>)
            .param("ordering", Some(""));
        assert!(query.is_empty());
        assert_eq!(query.build(), "");
    }

    #[test]
    fn undeclared_keys_follow_declared_ones_by_name() {
        let query = Query::ordered(GALLERY)
            .param("zeta", Some("1"))
            .param("alpha", Some("2"))
            .param("position", Some("main"));
        assert_eq!(query.build(), "?position=main&alpha=2&zeta=1");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let query = Query::ordered(GALLERY).param("position", Some("a&b=c d"));
        assert_eq!(query.build(), "?position=a%26b%3Dc+d");
    }

    #[test]
    fn cyrillic_values_are_encoded() {
        let query = Query::new().param("category", Some("зима"));
        assert_eq!(query.build(), "?category=%D0%B7%D0%B8%D0%BC%D0%B0");
    }

    #[test]
    fn numbers_are_accepted() {
        let query = Query::ordered(&["capacity_min"]).param("capacity_min", Some(4));
        assert_eq!(query.get("capacity_min"), Some("4"));
        assert_eq!(query.build(), "?capacity_min=4");
    }

    #[test]
    fn canonical_form_has_no_question_mark() {
        let query = Query::ordered(GALLERY).param("position", Some("main"));
        assert_eq!(query.canonical(), "position=main");
        assert_eq!(Query::ordered(GALLERY).canonical(), "all");
    }

    #[test]
    fn set_none_clears_a_value() {
        let mut query = Query::new().param("position", Some("main"));
        query.set("position", None::<&str>);
        assert!(query.is_empty());
    }
}
