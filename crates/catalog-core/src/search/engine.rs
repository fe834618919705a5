//! Filter/sort engine.
//!
//! [`derive`] is a pure function of the catalog snapshot and the criteria:
//! it never mutates the snapshot and always re-derives from it, so the
//! result does not depend on any earlier call.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::product::Product;
use crate::search::{SortOrder, ViewCriteria};

/// Derive the view list for `criteria` from the authoritative `catalog`.
///
/// Search and category filters are conjunctive; the sort runs over the
/// filtered subset. Sorting is stable, so equal keys keep catalog order.
pub fn derive(catalog: &[Product], criteria: &ViewCriteria) -> Vec<Product> {
    let needle = criteria.normalized_search();
    let category = criteria.category_filter();

    let mut view: Vec<Product> = catalog
        .iter()
        .filter(|product| matches_search(product, needle.as_deref()))
        .filter(|product| matches_category(product, category))
        .cloned()
        .collect();

    sort_view(&mut view, criteria.sort_order);

    tracing::debug!(
        total = catalog.len(),
        matched = view.len(),
        sort = criteria.sort_order.as_str(),
        "derived view list"
    );

    view
}

/// Title containment; `needle` is already lower-cased.
fn matches_search(product: &Product, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => product.title.to_lowercase().contains(needle),
        None => true,
    }
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        Some(category) => product.category == category,
        None => true,
    }
}

fn sort_view(view: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::PriceAsc => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::NameAsc => view.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::NameDesc => view.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
}

/// Locale-style title comparison in three levels.
///
/// Base letters first, ignoring accents and case (`Éclair` sorts with the
/// e's); then accents, unaccented first; then case, lower-case first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
