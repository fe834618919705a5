//! Catalog error types.

use thiserror::Error;

/// Errors raised by catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No product with this id exists in the snapshot.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// A product id that is not an integer.
    #[error("Invalid product id: {0:?}")]
    InvalidId(String),

    /// A persisted product record could not be turned into a view.
    #[error(transparent)]
    InvalidProduct(#[from] InvalidProductError),
}

/// A persisted product record lacks the minimal object shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidProductError {
    /// The text is not valid JSON at all.
    #[error("Invalid product record: {0}")]
    Malformed(String),

    /// The JSON value is not an object (e.g. `null`, a number, an array).
    #[error("Invalid product record: expected an object, got {0}")]
    NotAnObject(&'static str),
}
