//! Properties of the derived view list over arbitrary catalogs.

use catalog_core::prelude::*;
use proptest::prelude::*;

const CATEGORIES: [&str; 4] = ["clothing", "electronics", "jewelery", ""];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        0i64..1_000,
        "[a-zA-Z ]{0,12}",
        0u32..50_000,
        0usize..CATEGORIES.len(),
    )
        .prop_map(|(id, title, cents, category)| {
            Product::new(id, title, f64::from(cents) / 100.0, CATEGORIES[category])
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..30)
}

fn arb_sort() -> impl Strategy<Value = SortOrder> {
    prop::sample::select(SortOrder::ALL.to_vec())
}

fn arb_criteria() -> impl Strategy<Value = ViewCriteria> {
    ("[a-zA-Z ]{0,3}", 0usize..CATEGORIES.len(), arb_sort()).prop_map(
        |(search, category, sort)| {
            ViewCriteria::new()
                .with_search(search)
                .with_category(CATEGORIES[category])
                .with_sort(sort)
        },
    )
}

proptest! {
    #[test]
    fn derive_is_deterministic(catalog in arb_catalog(), criteria in arb_criteria()) {
        let first = derive(&catalog, &criteria);
        let second = derive(&catalog, &criteria);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unconstrained_criteria_return_catalog(catalog in arb_catalog()) {
        prop_assert_eq!(derive(&catalog, &ViewCriteria::new()), catalog);
    }

    #[test]
    fn search_keeps_exactly_matching_titles(catalog in arb_catalog(), term in "[a-zA-Z]{1,2}") {
        let criteria = ViewCriteria::new().with_search(term.clone());
        let view = derive(&catalog, &criteria);
        let needle = term.to_lowercase();

        for product in &view {
            prop_assert!(product.title.to_lowercase().contains(&needle));
        }

        let kept = catalog
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(kept, view.len());
    }

    #[test]
    fn price_desc_reverses_price_asc(catalog in arb_catalog(), category in 0usize..CATEGORIES.len()) {
        // Distinct prices, so the only difference between the two orders is direction.
        let mut seen = std::collections::HashSet::new();
        let catalog: Vec<Product> = catalog
            .into_iter()
            .filter(|p| seen.insert(p.price.to_bits()))
            .collect();

        let base = ViewCriteria::new().with_category(CATEGORIES[category]);
        let mut asc = derive(&catalog, &base.clone().with_sort(SortOrder::PriceAsc));
        let desc = derive(&catalog, &base.with_sort(SortOrder::PriceDesc));

        asc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn sort_none_restores_order_after_any_sort(catalog in arb_catalog(), sort in arb_sort()) {
        let mut store = ProductStore::new(catalog.clone());
        store.set_sort_order(sort);
        store.set_sort_order(SortOrder::None);
        prop_assert_eq!(store.view(), catalog.as_slice());
    }

    #[test]
    fn derive_never_touches_snapshot(catalog in arb_catalog(), criteria in arb_criteria()) {
        let before = catalog.clone();
        let _ = derive(&catalog, &criteria);
        prop_assert_eq!(catalog, before);
    }
}

#[test]
fn test_end_to_end_category_and_price_sort() {
    let catalog: Vec<Product> = serde_json::from_str(
        r#"[
            {"title": "Red Shirt", "price": 20, "category": "clothing"},
            {"title": "Blue Mouse", "price": 15, "category": "electronics"}
        ]"#,
    )
    .unwrap();

    let criteria = ViewCriteria::new()
        .with_search("")
        .with_category("electronics")
        .with_sort(SortOrder::PriceAsc);

    let view = derive(&catalog, &criteria);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].title, "Blue Mouse");
}

#[test]
fn test_detail_view_from_round_tripped_product() {
    let product = Product::new(9, "Backpack", 109.95, "men's clothing")
        .with_image("https://fakestoreapi.com/img/backpack.jpg")
        .with_rating(3.9, 120);

    let raw = serde_json::to_value(&product).unwrap();
    let view = DetailView::from_raw(&raw).unwrap();

    assert_eq!(view.id, "9");
    assert_eq!(view.title, "Backpack");
    assert_eq!(view.price_display(), "$109.95");
    assert_eq!(view.rate_display(), "3.9");
    assert_eq!(view.count_display(), "120");
    assert!(view.image.is_some());
}
