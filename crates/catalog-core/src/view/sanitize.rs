//! Field normalization for untrusted product records.

use serde_json::Value;
use url::Url;

/// Read a numeric field and clamp it to `[min, max]`.
///
/// Accepts JSON numbers and strings with a leading decimal literal
/// (`"4.5"`, `" 12 reviews"`). Anything else, including non-finite values,
/// yields `min`.
pub fn sanitize_number(value: Option<&Value>, min: f64, max: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_leading_float(s),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => {
            let clamped = n.clamp(min, max);
            // -0.0 would format as "-0.00".
            if clamped == 0.0 {
                0.0
            } else {
                clamped
            }
        }
        _ => min,
    }
}

/// Parse the longest decimal literal at the start of `s`.
fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s.get(..end)?.parse().ok()
}

/// Whether `candidate` is a well-formed URL with an `http` or `https` scheme.
pub fn is_valid_image_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_are_clamped() {
        assert_eq!(sanitize_number(Some(&json!(99)), 0.0, 5.0), 5.0);
        assert_eq!(sanitize_number(Some(&json!(-3.5)), 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!(3.9)), 0.0, 5.0), 3.9);
        assert_eq!(sanitize_number(Some(&json!(1e9)), 0.0, f64::INFINITY), 1e9);
    }

    #[test]
    fn test_invalid_numbers_default_to_min() {
        assert_eq!(sanitize_number(None, 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!(null)), 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!(true)), 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!("abc")), 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!([4])), 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!({"rate": 4})), 0.0, 5.0), 0.0);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(sanitize_number(Some(&json!("4.5")), 0.0, 5.0), 4.5);
        assert_eq!(sanitize_number(Some(&json!("  12 reviews")), 0.0, f64::MAX), 12.0);
        assert_eq!(sanitize_number(Some(&json!(".5")), 0.0, 5.0), 0.5);
        assert_eq!(sanitize_number(Some(&json!("2e1")), 0.0, 100.0), 20.0);
        assert_eq!(sanitize_number(Some(&json!("3e")), 0.0, 100.0), 3.0);
        assert_eq!(sanitize_number(Some(&json!("-")), 0.0, 5.0), 0.0);
        assert_eq!(sanitize_number(Some(&json!("1e999")), 0.0, 5.0), 0.0);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let n = sanitize_number(Some(&json!(-0.0)), 0.0, 5.0);
        assert_eq!(format!("{:.2}", n), "0.00");
    }

    #[test]
    fn test_image_url_validation() {
        assert!(is_valid_image_url("https://fakestoreapi.com/img/1.jpg"));
        assert!(is_valid_image_url("http://example.com/a.png"));

        assert!(!is_valid_image_url("javascript:alert(1)"));
        assert!(!is_valid_image_url("data:image/png;base64,AAAA"));
        assert!(!is_valid_image_url("ftp://example.com/a.png"));
        assert!(!is_valid_image_url("/img/relative.png"));
        assert!(!is_valid_image_url("not a url"));
        assert!(!is_valid_image_url(""));
    }
}
