//! Observability for the catalog storefront.
//!
//! - [`RequestId`] - per-request correlation id
//! - [`StructuredLogger`] - JSON or human log lines with request context

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
