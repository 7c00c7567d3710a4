// Cache key derivation
//
// A cache key names one logical query: resource plus filter set. Keys
// drive request coalescing and result memoization in the render pass, so
// two equivalent filter sets must map to the same key and two different
// ones must not.

use std::fmt::Display;

use crate::query::Query;

/// Canonical filter component when no filter is present.
pub const ALL_SENTINEL: &str = "all";

/// Key for a collection query: `{resource}-{canonical filters}`.
///
/// "No filter" and "filter present but empty" both canonicalize to
/// `{resource}-all`. Otherwise the canonical part is the encoded query in
/// its fixed key order, so distinct filter sets cannot collide.
pub fn derive_key(resource_name: &str, query: &Query) -> String {
    format!("{resource_name}-{}", query.canonical())
}

/// Key for a single item: `{item_name}-{id}`.
pub fn item_key(item_name: &str, id: impl Display) -> String {
    format!("{item_name}-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GALLERY: &[&str] = &["position", "ordering"];

    #[test]
    fn no_filter_and_empty_filter_share_the_sentinel() {
        let none = derive_key("gallery", &Query::ordered(GALLERY));
        let null = derive_key(
            "gallery",
            &Query::ordered(GALLERY).param("position", None::<&str>),
        );
        let blank = derive_key("gallery", &Query::ordered(GALLERY).param("position", Some("")));
        assert_eq!(none, "gallery-all");
        assert_eq!(none, null);
        assert_eq!(none, blank);
    }

    #[test]
    fn filters_change_the_key() {
        let main = derive_key("gallery", &Query::ordered(GALLERY).param("position", Some("main")));
        let side = derive_key("gallery", &Query::ordered(GALLERY).param("position", Some("side")));
        assert_eq!(main, "gallery-position=main");
        assert_ne!(main, side);
    }

    #[test]
    fn key_is_independent_of_insertion_order() {
        let a = Query::ordered(GALLERY)
            .param("ordering", Some("order"))
            .param("position", Some("main"));
        let b = Query::ordered(GALLERY)
            .param("position", Some("main"))
            .param("ordering", Some("order"));
        assert_eq!(derive_key("gallery", &a), derive_key("gallery", &b));
    }

    #[test]
    fn values_that_look_like_separators_do_not_collide() {
        let joined = Query::new().param("a", Some("1&b=2"));
        let split = Query::new().param("a", Some("1")).param("b", Some("2"));
        assert_ne!(derive_key("x", &joined), derive_key("x", &split));
    }

    #[test]
    fn a_value_equal_to_the_sentinel_is_not_the_sentinel() {
        let literal = Query::new().param("position", Some("all"));
        assert_ne!(derive_key("gallery", &literal), derive_key("gallery", &Query::new()));
    }

    #[test]
    fn item_keys() {
        assert_eq!(item_key("lodge", 42), "lodge-42");
        assert_eq!(item_key("news", "opening-day"), "news-opening-day");
    }
}
