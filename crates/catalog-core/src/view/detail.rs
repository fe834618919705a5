//! Product detail view model built from untrusted persisted data.
//!
//! The selection slot round-trips a product through storage the page does
//! not control, so nothing about its shape is assumed beyond "a JSON
//! object". Every field is normalized independently; anomalies become
//! defaults instead of errors.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::InvalidProductError;
use crate::view::sanitize::{is_valid_image_url, sanitize_number};

pub const FALLBACK_TITLE: &str = "Sin título";
pub const FALLBACK_CATEGORY: &str = "Sin categoría";
pub const FALLBACK_DESCRIPTION: &str = "Sin descripción";
pub const FALLBACK_ID: &str = "N/A";

/// Alt text used when the record has no title.
const FALLBACK_IMAGE_ALT: &str = "Producto";

const MAX_RATE: f64 = 5.0;

/// Sanitized, display-ready product details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Price, at least 0.
    pub price: f64,
    /// Average rating in `[0, 5]`.
    pub rate: f64,
    /// Number of ratings, at least 0.
    pub count: f64,
    /// `rate / 5 * 100`, in `[0, 100]`.
    pub rating_percentage: f64,
    /// Present only for well-formed `http`/`https` URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub image_alt: String,
}

impl DetailView {
    /// Build a detail view from a deserialized record.
    ///
    /// Fails only when `raw` is not a JSON object.
    pub fn from_raw(raw: &Value) -> Result<Self, InvalidProductError> {
        let record = raw
            .as_object()
            .ok_or_else(|| InvalidProductError::NotAnObject(json_kind(raw)))?;
        Ok(Self::from_object(record))
    }

    /// Parse and build a detail view from serialized text.
    pub fn from_json(text: &str) -> Result<Self, InvalidProductError> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| InvalidProductError::Malformed(e.to_string()))?;
        Self::from_raw(&raw)
    }

    fn from_object(record: &Map<String, Value>) -> Self {
        let rating = record.get("rating");
        let rate = sanitize_number(rating.and_then(|r| r.get("rate")), 0.0, MAX_RATE);
        let count = sanitize_number(rating.and_then(|r| r.get("count")), 0.0, f64::INFINITY);
        let price = sanitize_number(record.get("price"), 0.0, f64::INFINITY);

        let title = text_field(record, "title");
        let image = record
            .get("image")
            .and_then(Value::as_str)
            .filter(|url| is_valid_image_url(url))
            .map(str::to_string);

        Self {
            id: id_field(record).unwrap_or_else(|| FALLBACK_ID.to_string()),
            image_alt: title.clone().unwrap_or_else(|| FALLBACK_IMAGE_ALT.to_string()),
            title: title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            category: text_field(record, "category")
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            description: text_field(record, "description")
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            price,
            rate,
            count,
            rating_percentage: rate / MAX_RATE * 100.0,
            image,
        }
    }

    /// `$x.yy`
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Rating with one decimal.
    pub fn rate_display(&self) -> String {
        format!("{:.1}", self.rate)
    }

    /// Review count; whole numbers print without a fractional part.
    pub fn count_display(&self) -> String {
        format!("{}", self.count)
    }

    /// Label/value rows for the product information list.
    pub fn facts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID:", self.id.clone()),
            ("Categoría:", self.category.clone()),
            ("Calificación promedio:", format!("{} / 5.0", self.rate_display())),
            ("Número de reseñas:", self.count_display()),
        ]
    }
}

/// A non-empty string (or a number/bool in its string form).
/// A present, non-empty text value. Empty strings, `0` and `false` count
/// as missing, like every other non-text value.
fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}

/// The id's string form. Unlike text fields, `0` and `false` are kept.
fn id_field(record: &Map<String, Value>) -> Option<String> {
    match record.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
