//! Product details page body.

use catalog_core::DetailView;

use crate::html::escape_html;

pub const NO_SELECTION_MESSAGE: &str = "No hay producto seleccionado";

const BACK_LINK: &str = r#"<a href="/" class="back-link">&larr; Volver al catálogo</a>"#;

/// Render a sanitized product. Every text field goes through [`escape_html`].
pub fn render_detail(view: &DetailView) -> String {
    let image = match &view.image {
        Some(url) => format!(
            r#"<div class="detail-image"><img src="{}" alt="{}"></div>"#,
            escape_html(url),
            escape_html(&view.image_alt)
        ),
        None => r#"<div class="detail-image"></div>"#.to_string(),
    };

    let facts: String = view
        .facts()
        .into_iter()
        .map(|(label, value)| {
            format!(
                "<li><strong>{}</strong> {}</li>",
                escape_html(label),
                escape_html(&value)
            )
        })
        .collect();

    format!(
        r#"{back}
<article class="product-detail" data-section="detail" data-product-id="{id}">
    {image}
    <div class="detail-info">
        <span class="category-badge">{category}</span>
        <h1 class="detail-title">{title}</h1>
        <div class="detail-rating">
            <span>⭐ {rate} / 5.0</span>
            <div class="rating-bar" role="img" aria-label="{rate} de 5"><div class="rating-fill" style="width: {percentage:.0}%"></div></div>
            <span class="rating-count">({count} reseñas)</span>
        </div>
        <p class="detail-price">{price}</p>
        <p class="price-note">Precio incluye impuestos</p>
        <p class="detail-description">{description}</p>
        <h2>Información del producto</h2>
        <ul class="detail-facts">{facts}</ul>
        <section class="related-note">
            <h2>Productos relacionados</h2>
            <p>Más productos de la categoría {category} en el catálogo.</p>
        </section>
    </div>
</article>
"#,
        back = BACK_LINK,
        id = escape_html(&view.id),
        image = image,
        category = escape_html(&view.category),
        title = escape_html(&view.title),
        rate = escape_html(&view.rate_display()),
        percentage = view.rating_percentage,
        count = escape_html(&view.count_display()),
        price = escape_html(&view.price_display()),
        description = escape_html(&view.description),
        facts = facts
    )
}

/// Shown when the slot is empty or held unreadable data.
pub fn render_no_selection() -> String {
    format!(
        r#"<div class="selection-empty" data-section="detail">
    <p>{NO_SELECTION_MESSAGE}</p>
    {BACK_LINK}
</div>
"#
    )
}

/// Body for 404/405 and similar pages.
pub fn render_message(heading: &str, message: &str) -> String {
    format!(
        r#"<div class="selection-empty">
    <h1>{}</h1>
    <p>{}</p>
    {BACK_LINK}
</div>
"#,
        escape_html(heading),
        escape_html(message)
    )
}
