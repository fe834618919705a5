//! HTTP response handling.

use serde::de::DeserializeOwned;

use crate::FetchError;

/// Upstream error bodies are cut to this many characters in `HttpError`.
const ERROR_BODY_LIMIT: usize = 200;

/// An HTTP response, fully buffered.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = match self.text() {
            Ok(text) => text.chars().take(ERROR_BODY_LIMIT).collect(),
            Err(_) => "Unknown error".to_string(),
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(301, b"").is_success());
        assert!(!make_response(503, b"").is_success());
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(matches!(resp.text(), Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_response_json() {
        let resp = make_response(200, br#"[{"id": 1}]"#);
        let data: Vec<serde_json::Value> = resp.json().unwrap();
        assert_eq!(data[0]["id"], 1);

        let resp = make_response(200, b"<html>oops</html>");
        assert!(resp.json::<Vec<serde_json::Value>>().is_err());
    }

    #[test]
    fn test_response_error_for_status() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());

        match make_response(404, b"Not Found").error_for_status() {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }

    #[test]
    fn test_long_error_body_is_cut() {
        let body = "x".repeat(5_000);
        match make_response(502, body.as_bytes()).error_for_status() {
            Err(FetchError::HttpError { message, .. }) => {
                assert_eq!(message.chars().count(), ERROR_BODY_LIMIT)
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }
}
