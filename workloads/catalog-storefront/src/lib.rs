//! Catalog storefront - a Spin component serving the product catalog.
//!
//! - `GET /` streams the shell and a loading state, then the controls and
//!   cards once the catalog has been fetched
//! - `GET /results` returns the results fragment the controls script swaps in
//! - `POST /select` stores the chosen product in the session's selection slot
//! - `GET /product` renders the stored product through the sanitizing detail view

pub mod app;
pub mod config;
pub mod cookie;
pub mod html;
pub mod query;
pub mod sections;
pub mod stream;

#[cfg(target_arch = "wasm32")]
mod handler;

/// Workload name used in log lines.
pub const WORKLOAD: &str = "catalog-storefront";
