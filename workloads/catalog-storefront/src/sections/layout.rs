//! Page shell, loading state and the controls script.

use crate::html::escape_html;

/// `id` of the element the results fragment is swapped into.
pub const RESULTS_ID: &str = "catalog-results";

const LOADING_ID: &str = "catalog-loading";

/// Document opening: head, styles, site header and `<main>`.
pub fn render_shell_opening(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
<header class="site-header">
    <a href="/" class="logo">Catálogo</a>
    <nav class="header-nav"><a href="/product">Producto seleccionado</a></nav>
</header>
<main>
"#,
        title = escape_html(title),
        styles = STYLES
    )
}

/// Document closing, with the controls script on catalog pages.
pub fn render_shell_closing(with_controls_script: bool) -> String {
    let script = if with_controls_script {
        CONTROLS_SCRIPT
    } else {
        ""
    };
    format!("</main>\n{script}\n</body>\n</html>")
}

/// Shown while the catalog fetch is pending.
pub fn render_loading() -> String {
    format!(
        r#"<div id="{LOADING_ID}" class="loading" role="status">
    <div class="spinner" aria-hidden="true"></div>
    <p>Cargando productos...</p>
</div>
"#
    )
}

/// Removes the loading indicator once the results have streamed in.
pub fn render_loading_done() -> String {
    format!(r#"<script>document.getElementById("{LOADING_ID}")?.remove();</script>"#)
}

/// Re-requests the results fragment on every control input and swaps it in.
const CONTROLS_SCRIPT: &str = r#"<script>
(function () {
    const form = document.getElementById('catalog-controls');
    const results = document.getElementById('catalog-results');
    if (!form || !results) return;

    function refresh() {
        const params = new URLSearchParams(new FormData(form));
        fetch('/results?' + params.toString(), { headers: { 'accept': 'text/html' } })
            .then(function (resp) { return resp.text(); })
            .then(function (html) {
                results.innerHTML = html;
                history.replaceState(null, '', '/?' + params.toString());
            })
            .catch(function () {});
    }

    form.addEventListener('submit', function (e) { e.preventDefault(); refresh(); });
    form.querySelector('[name="search"]')?.addEventListener('input', refresh);
    form.querySelectorAll('select').forEach(function (el) {
        el.addEventListener('change', refresh);
    });
})();
</script>"#;

const STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-hover: #1d4ed8;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --warning: #f59e0b;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }
.header-nav a { color: var(--text); text-decoration: none; }

main { max-width: 1200px; margin: 0 auto; padding: 2rem; }

.catalog-controls {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.catalog-controls input,
.catalog-controls select {
    padding: 0.6rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--card-bg);
    font-size: 1rem;
}

.catalog-controls input { flex: 1; min-width: 220px; }

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    transition: box-shadow 0.2s;
}

.product-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }

.card-select {
    display: block;
    width: 100%;
    border: none;
    background: none;
    text-align: left;
    font: inherit;
    color: inherit;
    cursor: pointer;
}

.card-select > span, .product-info > span { display: block; }
.product-image { aspect-ratio: 1; background: #f1f5f9; overflow: hidden; }
.product-image img { width: 100%; height: 100%; object-fit: contain; }

.product-info { padding: 1rem; }
.product-category { font-size: 0.8rem; text-transform: uppercase; color: var(--text-muted); }
.product-title { font-size: 1rem; font-weight: 500; margin: 0.25rem 0 0.5rem; }
.product-rating { color: var(--warning); font-size: 0.9rem; }
.rating-count { color: var(--text-muted); }
.product-price { font-size: 1.25rem; font-weight: 700; margin-top: 0.5rem; }

.empty-state, .selection-empty { text-align: center; padding: 4rem 2rem; color: var(--text-muted); }

.alert-error {
    padding: 1rem 1.25rem;
    border: 1px solid var(--error);
    border-radius: 8px;
    background: #fef2f2;
    color: #991b1b;
}

.loading { text-align: center; padding: 4rem 2rem; color: var(--text-muted); }

.spinner {
    width: 40px;
    height: 40px;
    margin: 0 auto 1rem;
    border: 4px solid var(--border);
    border-top-color: var(--primary);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.product-detail {
    display: grid;
    grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
    gap: 2rem;
    background: var(--card-bg);
    border-radius: 12px;
    padding: 2rem;
}

.detail-image img { width: 100%; max-height: 480px; object-fit: contain; }
.category-badge {
    display: inline-block;
    padding: 0.2rem 0.6rem;
    border-radius: 999px;
    background: var(--primary);
    color: white;
    font-size: 0.8rem;
}
.detail-title { font-size: 1.75rem; margin: 0.75rem 0; }
.rating-bar { height: 8px; background: var(--border); border-radius: 4px; overflow: hidden; margin: 0.5rem 0; }
.rating-fill { height: 100%; background: var(--warning); }
.detail-price { font-size: 2rem; font-weight: 700; margin-top: 1rem; }
.price-note { color: var(--text-muted); font-size: 0.85rem; }
.detail-description { margin: 1.5rem 0; }
.detail-facts li { list-style: none; padding: 0.25rem 0; border-bottom: 1px solid var(--border); }
.related-note { margin-top: 1.5rem; color: var(--text-muted); }
.back-link { display: inline-block; margin-bottom: 1rem; color: var(--primary); }

@media (max-width: 768px) {
    .product-detail { grid-template-columns: 1fr; }
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_escapes_title() {
        let html = render_shell_opening("<Catálogo>");
        assert!(html.contains("<title>&lt;Catálogo&gt;</title>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_closing_script_only_on_catalog() {
        assert!(render_shell_closing(true).contains("/results?"));
        assert!(!render_shell_closing(false).contains("<script>"));
    }

    #[test]
    fn test_loading_pair() {
        assert!(render_loading().contains(r#"id="catalog-loading""#));
        assert!(render_loading_done().contains("catalog-loading"));
    }
}
