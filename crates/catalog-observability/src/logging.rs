//! Structured logging with request context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::RequestId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `[LEVEL] message | k=v` lines for local development.
    Human,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected `json` or `human`)")]
pub struct ParseLogFormatError(pub String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields, sorted by key.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
    /// Microseconds since the logger was created.
    pub elapsed_us: u64,
}

impl LogEntry {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    pub fn to_human(&self) -> String {
        let mut line = format!("[{}] {} ({}us)", self.level, self.message, self.elapsed_us);
        if !self.fields.is_empty() {
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{k}={s}"),
                    other => format!("{k}={other}"),
                })
                .collect();
            line.push_str(" | ");
            line.push_str(&fields.join(" "));
        }
        line
    }

    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }
}

/// Request-scoped logger. Lines go to stderr, which Spin captures.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    pub fn with_workload(mut self, workload: impl Into<String>) -> Self {
        self.workload = Some(workload.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Build the entry that would be written, or `None` below the minimum level.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }
        Some(LogEntry {
            level,
            message: message.to_string(),
            request_id: self.request_id.to_string(),
            workload: self.workload.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: self.elapsed_us(),
        })
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, Value>) {
        if let Some(entry) = self.entry(level, message, fields) {
            eprintln!("{}", entry.render(self.format));
        }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }

    pub fn trace_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Trace, message)
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }
}

/// Builder for log entries with fluent API.
///
/// ```rust
/// use catalog_observability::{RequestId, StructuredLogger};
///
/// let logger = StructuredLogger::new(RequestId::generate()).with_route("/");
/// logger
///     .info_builder("catalog rendered")
///     .field("category", "electronics")
///     .field("count", 4)
///     .emit();
/// ```
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field. Values that fail to serialize are recorded as `null`.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a duration field in milliseconds.
    pub fn duration_ms(self, key: &str, duration: std::time::Duration) -> Self {
        self.field(key, duration.as_millis() as u64)
    }

    /// The entry this builder would emit.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_header(Some("req-1")))
            .with_workload("catalog-storefront")
            .with_route("/results")
    }

    #[test]
    fn test_json_entry_carries_context() {
        let entry = logger()
            .info_builder("results rendered")
            .field("count", 3)
            .field("sort", "price-asc")
            .build()
            .unwrap();

        let json: Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "results rendered");
        assert_eq!(json["request_id"], "req-1");
        assert_eq!(json["workload"], "catalog-storefront");
        assert_eq!(json["route"], "/results");
        assert_eq!(json["count"], 3);
        assert_eq!(json["sort"], "price-asc");
    }

    #[test]
    fn test_human_entry() {
        let entry = logger()
            .warn_builder("selection cleared")
            .field("slot", "selected-product:sess_x")
            .build()
            .unwrap();

        let line = entry.to_human();
        assert!(line.starts_with("[WARN] selection cleared ("));
        assert!(line.ends_with("| slot=selected-product:sess_x"));
    }

    #[test]
    fn test_min_level_filters() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.info_builder("hidden").build().is_none());
        assert!(logger.error_builder("shown").build().is_some());
    }

    #[test]
    fn test_optional_context_is_omitted() {
        let entry = StructuredLogger::new(RequestId::generate())
            .entry(LogLevel::Info, "bare", BTreeMap::new())
            .unwrap();
        let json: Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert!(json.get("workload").is_none());
        assert!(json.get("route").is_none());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Human ".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
