//! Results section: product cards, empty state and fetch error.

use catalog_core::{CardView, CatalogState};

use crate::html::escape_html;
use crate::sections::layout::{render_loading, RESULTS_ID};

pub const NO_RESULTS_MESSAGE: &str = "No se encontraron productos";
pub const FETCH_ERROR_MESSAGE: &str = "Error al cargar productos";
pub const FETCH_ERROR_HINT: &str = "Por favor, intenta nuevamente más tarde.";

/// The results container with its current content.
pub fn render_results_section(state: &CatalogState) -> String {
    format!(
        r#"<section id="{RESULTS_ID}" class="catalog-results" data-section="results" aria-live="polite">
{}
</section>
"#,
        render_results(state)
    )
}

/// The content of the results container; also served as the `/results` fragment.
pub fn render_results(state: &CatalogState) -> String {
    match state {
        CatalogState::Loading => render_loading(),
        CatalogState::Failed(_) => render_fetch_error(),
        CatalogState::Ready(store) if store.view().is_empty() => {
            format!(r#"<p class="empty-state">{NO_RESULTS_MESSAGE}</p>"#)
        }
        CatalogState::Ready(store) => {
            let cards: String = CardView::from_view(store.view())
                .iter()
                .map(render_card)
                .collect();
            format!(r#"<div class="product-grid">{cards}</div>"#)
        }
    }
}

fn render_card(card: &CardView) -> String {
    let image = if card.image.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="product-image"><img src="{}" alt="{}" loading="lazy"></span>"#,
            escape_html(&card.image),
            escape_html(&card.full_title)
        )
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <form method="post" action="/select">
        <input type="hidden" name="id" value="{id}">
        <button type="submit" class="card-select" title="{full_title}">
            {image}
            <span class="product-info">
                <span class="product-category">{category}</span>
                <span class="product-title">{title}</span>
                <span class="product-rating">⭐ {rating} <span class="rating-count">({count})</span></span>
                <span class="product-price">${price}</span>
            </span>
        </button>
    </form>
</article>"#,
        id = card.id,
        full_title = escape_html(&card.full_title),
        image = image,
        category = escape_html(&card.category),
        title = escape_html(&card.title),
        rating = escape_html(&card.rating),
        count = card.rating_count,
        price = escape_html(&card.price)
    )
}

/// Inline alert for a failed catalog fetch. The upstream reason is only logged.
pub fn render_fetch_error() -> String {
    format!(
        r#"<div class="alert-error" role="alert">
    <strong>{FETCH_ERROR_MESSAGE}</strong>
    <p>{FETCH_ERROR_HINT}</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Product, SortOrder, ViewCriteria};

    fn ready(products: Vec<Product>, criteria: ViewCriteria) -> CatalogState {
        CatalogState::ready(products, criteria)
    }

    #[test]
    fn test_cards_follow_view_order() {
        let state = ready(
            vec![
                Product::new(1, "Red Shirt", 20.0, "clothing"),
                Product::new(2, "Blue Mouse", 15.0, "electronics"),
            ],
            ViewCriteria::new().with_sort(SortOrder::PriceAsc),
        );
        let html = render_results(&state);

        let mouse = html.find("Blue Mouse").unwrap();
        let shirt = html.find("Red Shirt").unwrap();
        assert!(mouse < shirt);
        assert!(html.contains("$15.00"));
        assert!(html.contains(r#"<input type="hidden" name="id" value="2">"#));
    }

    #[test]
    fn test_product_text_is_escaped() {
        let hostile = Product::new(7, r#"<img src=x onerror="alert(1)">"#, 1.0, "<b>cat</b>")
            .with_image(r#"https://example.com/a.png" onload="alert(2)"#)
            .with_rating(4.0, 3);
        let html = render_results(&ready(vec![hostile], ViewCriteria::new()));

        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<b>cat</b>"));
        assert!(!html.contains(r#"" onload=""#));
        assert!(html.contains("&lt;img src=x onerror=&quot;alert(1)&quot;&gt;"));
        assert!(html.contains("&lt;b&gt;cat&lt;/b&gt;"));
    }

    #[test]
    fn test_long_title_truncated_but_kept_in_tooltip() {
        let title = "x".repeat(60);
        let html = render_results(&ready(
            vec![Product::new(1, title.as_str(), 9.5, "misc")],
            ViewCriteria::new(),
        ));

        assert!(html.contains(&format!(r#"<span class="product-title">{}...</span>"#, "x".repeat(50))));
        assert!(html.contains(&format!(r#"title="{title}""#)));
    }

    #[test]
    fn test_empty_view_message() {
        let state = ready(
            vec![Product::new(1, "Red Shirt", 20.0, "clothing")],
            ViewCriteria::new().with_search("lamp"),
        );
        assert!(render_results(&state).contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_failed_and_loading_states() {
        let failed = render_results(&CatalogState::Failed(
            "HTTP 503: <pre>stack at upstream.internal:8080</pre>".to_string(),
        ));
        assert!(failed.contains(FETCH_ERROR_MESSAGE));
        assert!(failed.contains(FETCH_ERROR_HINT));
        assert!(!failed.contains("503"));
        assert!(!failed.contains("upstream.internal"));

        assert!(render_results(&CatalogState::Loading).contains("Cargando productos..."));
    }

    #[test]
    fn test_section_wraps_fragment() {
        let html = render_results_section(&CatalogState::Loading);
        assert!(html.starts_with(r#"<section id="catalog-results""#));
    }
}
