//! Search box, category selector and sort selector.

use catalog_core::{category_label, SortOrder, ViewCriteria};

use crate::html::escape_html;

/// Render the controls form. Submits to `/` so it also works without script.
pub fn render_controls(criteria: &ViewCriteria, categories: &[String]) -> String {
    let category_options: String = categories
        .iter()
        .map(|category| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(category),
                selected(criteria.category == *category),
                escape_html(&category_label(category))
            )
        })
        .collect();

    let sort_options: String = SortOrder::ALL
        .iter()
        .map(|order| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                order.as_str(),
                selected(criteria.sort_order == *order),
                order.display_name()
            )
        })
        .collect();

    format!(
        r#"<form id="catalog-controls" class="catalog-controls" action="/" method="get" role="search">
    <input type="search" name="search" value="{search}" placeholder="Buscar productos..." aria-label="Buscar productos" autocomplete="off">
    <select name="category" aria-label="Categoría">
        <option value=""{all_selected}>Todas las categorías</option>
        {category_options}
    </select>
    <select name="sort" aria-label="Ordenar">
        {sort_options}
    </select>
</form>
"#,
        search = escape_html(&criteria.search_term),
        all_selected = selected(criteria.category.is_empty()),
        category_options = category_options,
        sort_options = sort_options
    )
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["electronics".to_string(), "men's clothing".to_string()]
    }

    #[test]
    fn test_categories_in_order_with_labels() {
        let html = render_controls(&ViewCriteria::new(), &categories());

        let electronics = html.find(r#"value="electronics""#).unwrap();
        let clothing = html.find(r#"value="men&#39;s clothing""#).unwrap();
        assert!(electronics < clothing);
        assert!(html.contains(">Electronics</option>"));
        assert!(html.contains(">Men&#39;s clothing</option>"));
        assert!(html.contains(r#"<option value="" selected>Todas las categorías</option>"#));
    }

    #[test]
    fn test_current_criteria_are_selected() {
        let criteria = ViewCriteria::new()
            .with_search("\"mouse\"")
            .with_category("electronics")
            .with_sort(SortOrder::PriceDesc);
        let html = render_controls(&criteria, &categories());

        assert!(html.contains(r#"value="&quot;mouse&quot;""#));
        assert!(html.contains(r#"<option value="electronics" selected>"#));
        assert!(html.contains(r#"<option value="price-desc" selected>Precio: mayor a menor</option>"#));
        assert!(html.contains(r#"<option value="">Todas las categorías</option>"#));
    }

    #[test]
    fn test_all_sort_modes_offered() {
        let html = render_controls(&ViewCriteria::new(), &[]);
        for order in SortOrder::ALL {
            assert!(html.contains(&format!(r#"value="{}""#, order.as_str())));
        }
        assert!(html.contains(r#"<option value="none" selected>Ordenar por...</option>"#));
    }
}
