//! Spin HTTP entry point.

use anyhow::Context as _;
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use catalog_cache::{PreferenceStore, SpinStore};
use catalog_data::CatalogSource;
use catalog_observability::{RequestId, StructuredLogger, REQUEST_ID_HEADER};

use crate::app::{
    catalog_state, product_reply, render_catalog_sections, resolve_criteria, results_reply,
    partition_headers, select_reply, Reply, Route, CATALOG_TITLE,
};
use crate::config::StorefrontConfig;
use crate::cookie::BrowserSession;
use crate::query::split_path;
use crate::sections::{render_loading, render_shell_closing, render_shell_opening};
use crate::stream::{PageStream, StreamError};
use crate::WORKLOAD;

/// Per-request context shared by the route handlers.
struct Exchange {
    logger: StructuredLogger,
    session: BrowserSession,
    source: CatalogSource,
    query: String,
    base_headers: Vec<(String, String)>,
}

#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    let config = StorefrontConfig::from_variables();

    let path_with_query = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let (path, query) = split_path(&path_with_query);
    let method = match req.method() {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Head => "HEAD",
        _ => "OTHER",
    };
    let route = Route::resolve(method, path);

    let request_id = RequestId::from_header(header(&req, REQUEST_ID_HEADER).as_deref());
    let logger = StructuredLogger::new(request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(path)
        .with_format(config.log_format);
    let session = BrowserSession::from_cookie_header(header(&req, "cookie").as_deref());

    let mut base_headers = vec![(REQUEST_ID_HEADER.to_string(), request_id.to_string())];
    if let Some(cookie) = session.set_cookie() {
        base_headers.push(("set-cookie".to_string(), cookie));
    }

    logger
        .info_builder("request started")
        .field("method", method)
        .field("route", route.name())
        .field("new_session", session.issued)
        .emit();

    let exchange = Exchange {
        logger,
        session,
        source: CatalogSource::new(config.api_url.as_str()),
        query: query.to_string(),
        base_headers,
    };

    let store = match open_store(&config) {
        Ok(store) => store,
        Err(e) => {
            exchange
                .logger
                .error_builder("key-value store unavailable")
                .field("error", format!("{e:#}"))
                .emit();
            let reply = Reply::message_page(
                500,
                "Error interno",
                "No se pudo abrir el almacenamiento.",
            );
            send_reply(&exchange, response_out, reply).await;
            return;
        }
    };

    match route {
        Route::Catalog => {
            if let Err(e) = stream_catalog(&exchange, &store, response_out).await {
                exchange
                    .logger
                    .error_builder("catalog stream failed")
                    .field("error", e.to_string())
                    .emit();
            }
        }
        Route::Results => {
            let prefs = PreferenceStore::new(&store);
            let criteria = resolve_criteria(&prefs, &exchange.session.id, &exchange.query);
            let fetched = fetch(&exchange).await;
            let reply = results_reply(&catalog_state(fetched, criteria));
            send_reply(&exchange, response_out, reply).await;
        }
        Route::Select => {
            let form = match req.into_body().await {
                Ok(form) => form,
                Err(e) => {
                    let reply =
                        internal_error(&exchange, "failed to read request body", &format!("{e:?}"));
                    send_reply(&exchange, response_out, reply).await;
                    return;
                }
            };
            let fetched = fetch(&exchange).await;
            let reply = select_reply(&store, &exchange.session.id, &form, fetched)
                .unwrap_or_else(|e| internal_error(&exchange, "selection write failed", &e));
            exchange
                .logger
                .info_builder("selection handled")
                .field("status", reply.status)
                .emit();
            send_reply(&exchange, response_out, reply).await;
        }
        Route::Product => {
            let reply = product_reply(&store, &exchange.session.id)
                .unwrap_or_else(|e| internal_error(&exchange, "selection read failed", &e));
            send_reply(&exchange, response_out, reply).await;
        }
        Route::MethodNotAllowed => {
            send_reply(&exchange, response_out, Reply::method_not_allowed()).await;
        }
        Route::NotFound => {
            send_reply(&exchange, response_out, Reply::not_found()).await;
        }
    }

    exchange
        .logger
        .info_builder("request complete")
        .field("elapsed_us", exchange.logger.elapsed_us())
        .emit();
}

/// Shell and loading state first; controls and cards once the fetch settles.
async fn stream_catalog(
    exchange: &Exchange,
    store: &SpinStore,
    response_out: ResponseOutparam,
) -> Result<(), StreamError> {
    let prefs = PreferenceStore::new(store);
    let criteria = resolve_criteria(&prefs, &exchange.session.id, &exchange.query);

    let mut headers = exchange.base_headers.clone();
    headers.push((
        "content-type".to_string(),
        "text/html; charset=utf-8".to_string(),
    ));
    let response = OutgoingResponse::new(fields(exchange, headers));
    let _ = response.set_status_code(200);
    let body = response.take_body();
    response_out.set(response);

    let mut page = PageStream::new(body);
    page.send_shell(&render_shell_opening(CATALOG_TITLE)).await?;
    page.send_section("loading", &render_loading()).await?;

    let state = catalog_state(fetch(exchange).await, criteria);
    page.send_section("catalog", &render_catalog_sections(&state)).await?;
    page.finish(&render_shell_closing(true)).await?;

    exchange
        .logger
        .debug_builder("catalog streamed")
        .field("sections", page.sections_sent())
        .emit();
    Ok(())
}

async fn fetch(exchange: &Exchange) -> Result<Vec<catalog_core::Product>, catalog_data::FetchError> {
    let started = std::time::Instant::now();
    let fetched = exchange.source.fetch_catalog().await;
    match &fetched {
        Ok(products) => exchange
            .logger
            .info_builder("catalog fetched")
            .field("count", products.len())
            .duration_ms("fetch_ms", started.elapsed())
            .emit(),
        Err(e) => exchange
            .logger
            .error_builder("catalog fetch failed")
            .field("url", exchange.source.url())
            .field("error", e.to_string())
            .emit(),
    }
    fetched
}

fn internal_error(exchange: &Exchange, message: &str, error: &dyn std::fmt::Display) -> Reply {
    exchange
        .logger
        .error_builder(message)
        .field("error", error.to_string())
        .emit();
    Reply::internal_error()
}

fn open_store(config: &StorefrontConfig) -> anyhow::Result<SpinStore> {
    match &config.kv_store {
        Some(name) => {
            SpinStore::open(name).with_context(|| format!("opening key-value store `{name}`"))
        }
        None => SpinStore::open_default().context("opening the default key-value store"),
    }
}

async fn send_reply(exchange: &Exchange, response_out: ResponseOutparam, reply: Reply) {
    let mut headers = exchange.base_headers.clone();
    headers.extend(reply.headers);

    let response = OutgoingResponse::new(fields(exchange, headers));
    let _ = response.set_status_code(reply.status);
    let mut body = response.take_body();
    response_out.set(response);

    if let Err(e) = body.send(reply.body.into_bytes()).await {
        exchange
            .logger
            .error_builder("failed to write response")
            .field("error", e.to_string())
            .emit();
    }
}

fn fields(exchange: &Exchange, headers: Vec<(String, String)>) -> Fields {
    let (valid, rejected) = partition_headers(headers);
    if !rejected.is_empty() {
        exchange
            .logger
            .warn_builder("dropped invalid response headers")
            .field("headers", rejected.join(", "))
            .emit();
    }
    let list: Vec<(String, Vec<u8>)> = valid
        .into_iter()
        .map(|(k, v)| (k, v.into_bytes()))
        .collect();
    match Fields::from_list(&list) {
        Ok(fields) => fields,
        Err(e) => {
            exchange
                .logger
                .error_builder("failed to build response headers")
                .field("error", e.to_string())
                .emit();
            Fields::new()
        }
    }
}

fn header(req: &IncomingRequest, name: &str) -> Option<String> {
    let values = req.headers().get(&name.to_string());
    if values.is_empty() {
        return None;
    }
    let joined = values
        .iter()
        .map(|v| String::from_utf8_lossy(v).into_owned())
        .collect::<Vec<_>>()
        .join("; ");
    Some(joined)
}
