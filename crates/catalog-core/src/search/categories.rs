//! Category selector helpers.

use crate::product::Product;

/// Distinct category labels in first-seen order.
pub fn distinct_categories(catalog: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in catalog {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// Display label for a category: first character upper-cased.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let catalog = vec![
            Product::new(1, "a", 1.0, "men's clothing"),
            Product::new(2, "b", 1.0, "jewelery"),
            Product::new(3, "c", 1.0, "men's clothing"),
            Product::new(4, "d", 1.0, "electronics"),
            Product::new(5, "e", 1.0, "jewelery"),
        ];

        assert_eq!(
            distinct_categories(&catalog),
            vec!["men's clothing", "jewelery", "electronics"]
        );
    }

    #[test]
    fn test_distinct_categories_empty() {
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("electronics"), "Electronics");
        assert_eq!(category_label("women's clothing"), "Women's clothing");
        assert_eq!(category_label("étagères"), "Étagères");
        assert_eq!(category_label(""), "");
    }
}
