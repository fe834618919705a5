//! View criteria in query strings and form bodies.

use catalog_core::{SortOrder, ViewCriteria};
use url::form_urlencoded;

const SEARCH_PARAM: &str = "search";
const CATEGORY_PARAM: &str = "category";
const SORT_PARAM: &str = "sort";

/// Parse criteria from a query string (without the leading `?`).
///
/// Returns `None` when none of `search`, `category` or `sort` is present,
/// so callers can fall back to remembered criteria.
pub fn criteria_from_query(query: &str) -> Option<ViewCriteria> {
    let mut criteria = ViewCriteria::new();
    let mut explicit = false;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match &*key {
            SEARCH_PARAM => criteria.search_term = value.into_owned(),
            CATEGORY_PARAM => criteria.category = value.into_owned(),
            SORT_PARAM => criteria.sort_order = SortOrder::parse(&value),
            _ => continue,
        }
        explicit = true;
    }

    explicit.then_some(criteria)
}

/// A single field of an `application/x-www-form-urlencoded` body.
pub fn form_field(body: &[u8], name: &str) -> Option<String> {
    form_urlencoded::parse(body)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Split `/path?query` into its parts.
pub fn split_path(path_with_query: &str) -> (&str, &str) {
    match path_with_query.split_once('?') {
        Some((path, query)) => (path, query),
        None => (path_with_query, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let criteria =
            criteria_from_query("search=red+shirt&category=men%27s%20clothing&sort=price-desc")
                .unwrap();

        assert_eq!(criteria.search_term, "red shirt");
        assert_eq!(criteria.category, "men's clothing");
        assert_eq!(criteria.sort_order, SortOrder::PriceDesc);
    }

    #[test]
    fn test_browser_encoded_query() {
        // URLSearchParams output for the controls form.
        let criteria =
            criteria_from_query("search=caf%C3%A9+%26+t%C3%A9&category=&sort=name-asc").unwrap();

        assert_eq!(
            criteria,
            ViewCriteria::new()
                .with_search("café & té")
                .with_sort(SortOrder::NameAsc)
        );
    }

    #[test]
    fn test_no_criteria_params() {
        assert_eq!(criteria_from_query(""), None);
        assert_eq!(criteria_from_query("utm_source=mail"), None);
    }

    #[test]
    fn test_empty_params_are_explicit() {
        let criteria = criteria_from_query("search=&category=&sort=").unwrap();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_unknown_sort_is_none() {
        let criteria = criteria_from_query("sort=rating").unwrap();
        assert_eq!(criteria.sort_order, SortOrder::None);
    }

    #[test]
    fn test_form_field() {
        assert_eq!(form_field(b"id=3&x=1", "id").as_deref(), Some("3"));
        assert_eq!(form_field(b"x=1", "id"), None);
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/results?sort=none"), ("/results", "sort=none"));
        assert_eq!(split_path("/product"), ("/product", ""));
    }
}
