//! Request handling helpers.
//!
//! # Responsibilities
//! - Pick the raw (undecoded) request target handed to the path extractor
//! - Parse query parameters for the ajaxlet
//!
//! # Design Decisions
//! - The extractor always sees the path exactly as sent; no normalization
//! - Query parsing follows `application/x-www-form-urlencoded` rules
//! - A fragment, if a client sends one, is ignored for parameters

use axum::http::Uri;

/// Raw path plus query of a request URI, as sent by the client.
pub fn raw_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Decoded query parameters of a raw request target, in order.
pub fn query_params(target: &str) -> Vec<(String, String)> {
    let without_fragment = target.split_once('#').map_or(target, |(head, _)| head);
    let query = without_fragment.split_once('?').map_or("", |(_, query)| query);
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_target_keeps_encoding() {
        let uri: Uri = "http://example.com/ajax/My%2FPlugin/Friend?x=1".parse().unwrap();
        assert_eq!(raw_target(&uri), "/ajax/My%2FPlugin/Friend?x=1");
    }

    #[test]
    fn test_query_params() {
        assert_eq!(
            query_params("/ajax/echo?x=1&name=My+Plugin&l=%CE%BB"),
            vec![
                ("x".to_string(), "1".to_string()),
                ("name".to_string(), "My Plugin".to_string()),
                ("l".to_string(), "λ".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_absent_or_in_fragment() {
        assert!(query_params("/ajax/echo").is_empty());
        assert!(query_params("/ajax/echo#frag?x=1").is_empty());
        assert_eq!(query_params("/ajax/echo?a=b#c").len(), 1);
    }
}
