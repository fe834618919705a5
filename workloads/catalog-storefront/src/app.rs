//! Request handling that does not depend on the Spin host.
//!
//! The component handler does the I/O (fetch, key-value store, response
//! streaming) and delegates every decision to the functions here.

use catalog_cache::{CacheError, KeyValueStore, PreferenceStore, Selection, SelectionBridge, SessionId};
use catalog_core::{CatalogError, CatalogState, DetailView, Product, ViewCriteria};
use catalog_data::FetchError;

use crate::query::{criteria_from_query, form_field};
use crate::sections::{
    render_controls, render_detail, render_fetch_error, render_loading_done, render_message,
    render_no_selection, render_results, render_results_section, render_shell_closing,
    render_shell_opening,
};

pub const CATALOG_TITLE: &str = "Catálogo de productos";
pub const DETAIL_TITLE: &str = "Detalle del producto";

/// Routes served by the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Catalog,
    /// `GET /results`
    Results,
    /// `POST /select`
    Select,
    /// `GET /product`
    Product,
    MethodNotAllowed,
    NotFound,
}

impl Route {
    pub fn resolve(method: &str, path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match (method, path) {
            ("GET", "/") => Route::Catalog,
            ("GET", "/results") => Route::Results,
            ("POST", "/select") => Route::Select,
            ("GET", "/product") => Route::Product,
            (_, "/" | "/results" | "/select" | "/product") => Route::MethodNotAllowed,
            _ => Route::NotFound,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Catalog => "catalog",
            Route::Results => "results",
            Route::Select => "select",
            Route::Product => "product",
            Route::MethodNotAllowed => "method-not-allowed",
            Route::NotFound => "not-found",
        }
    }
}

/// A buffered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Reply {
    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: body.into(),
        }
    }

    /// `303 See Other`, so the browser follows with a `GET`.
    pub fn see_other(location: &str) -> Self {
        Self {
            status: 303,
            headers: vec![("location".to_string(), location.to_string())],
            body: String::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// A full page with a heading and a message.
    pub fn message_page(status: u16, heading: &str, message: &str) -> Self {
        Self::html(status, render_page(heading, &render_message(heading, message), false))
    }

    pub fn not_found() -> Self {
        Self::message_page(404, "Página no encontrada", "La página solicitada no existe.")
    }

    pub fn method_not_allowed() -> Self {
        Self::message_page(405, "Método no permitido", "Este recurso no admite ese método.")
            .with_header("allow", "GET, POST")
    }

    /// `500` without any detail of what failed.
    pub fn internal_error() -> Self {
        Self::message_page(500, "Error interno", "No se pudo completar la solicitud.")
    }
}

/// Split headers into those a response can carry and the names of those it cannot.
pub fn partition_headers(headers: Vec<(String, String)>) -> (Vec<(String, String)>, Vec<String>) {
    let mut valid = Vec::with_capacity(headers.len());
    let mut rejected = Vec::new();
    for (name, value) in headers {
        if is_header_name(&name) && is_header_value(&value) {
            valid.push((name, value));
        } else {
            rejected.push(name);
        }
    }
    (valid, rejected)
}

fn is_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

fn is_header_value(value: &str) -> bool {
    value.chars().all(|c| c == '\t' || !c.is_control())
}

/// A complete, non-streamed document.
pub fn render_page(title: &str, body: &str, with_controls_script: bool) -> String {
    format!(
        "{}{}{}",
        render_shell_opening(title),
        body,
        render_shell_closing(with_controls_script)
    )
}

/// Criteria for a catalog request: explicit query parameters win and are
/// remembered; otherwise the session's remembered criteria apply.
pub fn resolve_criteria<S: KeyValueStore>(
    prefs: &PreferenceStore<S>,
    session: &SessionId,
    query: &str,
) -> ViewCriteria {
    match criteria_from_query(query) {
        Some(criteria) => {
            if let Err(e) = prefs.remember(session, &criteria) {
                tracing::warn!(error = %e, "could not remember criteria");
            }
            criteria
        }
        None => prefs.criteria(session).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not restore criteria");
            ViewCriteria::default()
        }),
    }
}

/// The state a page renders from, once the fetch has settled.
pub fn catalog_state(fetched: Result<Vec<Product>, FetchError>, criteria: ViewCriteria) -> CatalogState {
    match fetched {
        Ok(snapshot) => CatalogState::ready(snapshot, criteria),
        Err(e) => CatalogState::Failed(e.to_string()),
    }
}

/// Everything the catalog page streams after the fetch: controls, results
/// and the script that hides the loading indicator.
pub fn render_catalog_sections(state: &CatalogState) -> String {
    let controls = match state.store() {
        Some(store) => render_controls(store.criteria(), &store.categories()),
        None => String::new(),
    };
    format!(
        "{controls}{}{}",
        render_results_section(state),
        render_loading_done()
    )
}

/// The `/results` fragment.
pub fn results_reply(state: &CatalogState) -> Reply {
    Reply::html(200, render_results(state)).with_header("cache-control", "no-store")
}

/// Resolve the product named by a `/select` form body.
pub fn find_selected<'a>(snapshot: &'a [Product], form: &[u8]) -> Result<&'a Product, CatalogError> {
    let raw = form_field(form, "id").unwrap_or_default();
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CatalogError::InvalidId(raw.clone()))?;
    snapshot
        .iter()
        .find(|p| p.id == id)
        .ok_or(CatalogError::ProductNotFound(id))
}

/// Handle `POST /select`: write the chosen product and send the browser on
/// to the details page.
pub fn select_reply<S: KeyValueStore>(
    store: S,
    session: &SessionId,
    form: &[u8],
    fetched: Result<Vec<Product>, FetchError>,
) -> Result<Reply, CacheError> {
    let snapshot = match fetched {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::debug!(error = %e, "selection without a catalog");
            let body = render_page(CATALOG_TITLE, &render_fetch_error(), false);
            return Ok(Reply::html(502, body));
        }
    };

    match find_selected(&snapshot, form) {
        Ok(product) => {
            SelectionBridge::for_session(store, session).select(product)?;
            Ok(Reply::see_other("/product"))
        }
        Err(e) => {
            tracing::debug!(error = %e, "selection rejected");
            Ok(Reply::message_page(
                404,
                "Producto no encontrado",
                "No existe un producto con ese identificador.",
            ))
        }
    }
}

/// Handle `GET /product`.
pub fn product_reply<S: KeyValueStore>(store: S, session: &SessionId) -> Result<Reply, CacheError> {
    let selection = SelectionBridge::for_session(store, session).read_selection()?;
    let body = match &selection {
        Selection::Selected(raw) => match DetailView::from_raw(raw) {
            Ok(view) => render_detail(&view),
            Err(_) => render_no_selection(),
        },
        Selection::Absent | Selection::Corrupt => render_no_selection(),
    };
    Ok(Reply::html(200, render_page(DETAIL_TITLE, &body, false)).with_header("cache-control", "no-store"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_cache::{MemoryStore, SELECTION_SLOT};
    use catalog_core::SortOrder;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shirt", 20.0, "clothing"),
            Product::new(2, "Blue Mouse", 15.0, "electronics").with_rating(4.1, 33),
        ]
    }

    fn session() -> SessionId {
        SessionId::generate()
    }

    #[test]
    fn test_partition_headers() {
        let (valid, rejected) = partition_headers(vec![
            ("content-type".to_string(), "text/html; charset=utf-8".to_string()),
            ("x-request-id".to_string(), "abc123".to_string()),
            ("bad header".to_string(), "v".to_string()),
            ("location".to_string(), "/product\r\nset-cookie: x=1".to_string()),
            (String::new(), "v".to_string()),
        ]);

        assert_eq!(valid.len(), 2);
        assert_eq!(valid[1].0, "x-request-id");
        assert_eq!(rejected, vec!["bad header", "location", ""]);
    }

    #[test]
    fn test_internal_error_has_no_detail() {
        let reply = Reply::internal_error();
        assert_eq!(reply.status, 500);
        assert!(reply.body.contains("Error interno"));
        assert_eq!(reply.header("content-type"), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn test_route_resolution() {
        assert_eq!(Route::resolve("GET", "/"), Route::Catalog);
        assert_eq!(Route::resolve("GET", ""), Route::Catalog);
        assert_eq!(Route::resolve("GET", "/results"), Route::Results);
        assert_eq!(Route::resolve("GET", "/results/"), Route::Results);
        assert_eq!(Route::resolve("POST", "/select"), Route::Select);
        assert_eq!(Route::resolve("GET", "/product"), Route::Product);
        assert_eq!(Route::resolve("GET", "/select"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve("DELETE", "/"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve("GET", "/admin"), Route::NotFound);
    }

    #[test]
    fn test_explicit_criteria_are_remembered() {
        let store = MemoryStore::new();
        let prefs = PreferenceStore::new(&store);
        let id = session();

        let explicit = resolve_criteria(&prefs, &id, "category=electronics&sort=price-asc");
        assert_eq!(explicit.category, "electronics");

        let restored = resolve_criteria(&prefs, &id, "");
        assert_eq!(restored, explicit);

        let other_session = resolve_criteria(&prefs, &session(), "");
        assert!(other_session.is_unconstrained());
    }

    #[test]
    fn test_catalog_sections_end_to_end() {
        let criteria = ViewCriteria::new()
            .with_category("electronics")
            .with_sort(SortOrder::PriceAsc);
        let state = catalog_state(Ok(catalog()), criteria);
        let html = render_catalog_sections(&state);

        assert!(html.contains("Blue Mouse"));
        assert!(!html.contains("Red Shirt"));
        assert!(html.contains(r#"<option value="electronics" selected>"#));
        assert!(html.contains(r#"<option value="clothing">"#));
        assert!(html.contains("catalog-loading"));
    }

    #[test]
    fn test_failed_fetch_renders_alert() {
        let state = catalog_state(Err(FetchError::RequestError("dns".to_string())), ViewCriteria::new());
        let html = render_catalog_sections(&state);

        assert!(html.contains("Error al cargar productos"));
        assert!(!html.contains("catalog-controls"));
    }

    #[test]
    fn test_results_fragment_is_not_a_document() {
        let state = catalog_state(Ok(catalog()), ViewCriteria::new().with_search("mouse"));
        let reply = results_reply(&state);

        assert_eq!(reply.status, 200);
        assert!(!reply.body.contains("<html"));
        assert!(reply.body.contains("Blue Mouse"));
        assert!(!reply.body.contains("Red Shirt"));
    }

    #[test]
    fn test_select_then_view_product() {
        let store = MemoryStore::new();
        let id = session();

        let reply = select_reply(&store, &id, b"id=2", Ok(catalog())).unwrap();
        assert_eq!(reply.status, 303);
        assert_eq!(reply.header("location"), Some("/product"));

        let page = product_reply(&store, &id).unwrap();
        assert_eq!(page.status, 200);
        assert!(page.body.contains(r#"<h1 class="detail-title">Blue Mouse</h1>"#));
        assert!(page.body.contains("(33 reseñas)"));
    }

    #[test]
    fn test_find_selected() {
        let snapshot = catalog();
        assert_eq!(find_selected(&snapshot, b"id=1").unwrap().title, "Red Shirt");
        assert!(matches!(
            find_selected(&snapshot, b"id=7"),
            Err(CatalogError::ProductNotFound(7))
        ));
        assert!(matches!(
            find_selected(&snapshot, b"id=two"),
            Err(CatalogError::InvalidId(_))
        ));
    }

    #[test]
    fn test_select_unknown_product() {
        let store = MemoryStore::new();
        let id = session();

        assert_eq!(select_reply(&store, &id, b"id=99", Ok(catalog())).unwrap().status, 404);
        assert_eq!(select_reply(&store, &id, b"id=abc", Ok(catalog())).unwrap().status, 404);
        assert_eq!(select_reply(&store, &id, b"", Ok(catalog())).unwrap().status, 404);
        assert!(store.is_empty());
    }

    #[test]
    fn test_select_with_failed_fetch() {
        let store = MemoryStore::new();
        let reply = select_reply(
            &store,
            &session(),
            b"id=1",
            Err(FetchError::HttpError { status: 500, message: "boom at db-7".to_string() }),
        )
        .unwrap();

        assert_eq!(reply.status, 502);
        assert!(reply.body.contains("Error al cargar productos"));
        assert!(reply.body.contains("Por favor, intenta nuevamente más tarde."));
        assert!(!reply.body.contains("db-7"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_product_page_without_selection() {
        let store = MemoryStore::new();
        let page = product_reply(&store, &session()).unwrap();
        assert!(page.body.contains("No hay producto seleccionado"));
    }

    #[test]
    fn test_corrupt_selection_is_cleared() {
        let store = MemoryStore::new();
        let id = session();
        let slot = format!("{SELECTION_SLOT}:{id}");
        store.set(&slot, b"{oops").unwrap();

        let page = product_reply(&store, &id).unwrap();
        assert!(page.body.contains("No hay producto seleccionado"));
        assert!(!store.exists(&slot).unwrap());
    }

    #[test]
    fn test_error_pages() {
        assert_eq!(Reply::not_found().status, 404);
        let reply = Reply::method_not_allowed();
        assert_eq!(reply.status, 405);
        assert_eq!(reply.header("Allow"), Some("GET, POST"));
    }
}
