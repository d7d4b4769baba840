//! HTTP requests and responses as plain data.
//!
//! # Design
//! The dispatcher builds `HttpRequest` values and classifies `HttpResponse`
//! values as pure functions; only the transport module touches the network.
//! Keeping the boundary types as plain owned data makes both halves
//! deterministic and testable with synthetic values.
//!
//! `HttpResponse::headers` preserves duplicate header names in arrival order;
//! `folded_headers` collapses them with `", "` per the HTTP field-folding
//! convention.

use std::collections::BTreeMap;

/// HTTP method for a lifecycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An outgoing request described as plain data, ready for the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A received response with the body already drained.
///
/// The transport reads the full body on every path before handing the
/// response over, so classification never holds a live connection.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Value of the `Content-Type` header, if present (first occurrence,
    /// name compared case-insensitively).
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    /// All headers collapsed to one value per name, repeated values joined
    /// with `", "`. Names are lowercased so lookups do not depend on the
    /// server's casing.
    pub fn folded_headers(&self) -> BTreeMap<String, String> {
        let mut folded: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in &self.headers {
            let entry = folded.entry(name.to_ascii_lowercase()).or_default();
            if entry.is_empty() {
                entry.push_str(value);
            } else {
                entry.push_str(", ");
                entry.push_str(value);
            }
        }
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(headers: Vec<(&str, &str)>) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: headers
                .into_iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            body: String::new(),
        }
    }

    #[test]
    fn content_type_lookup_is_case_insensitive() {
        let resp = response(vec![("CONTENT-TYPE", "text/plain")]);
        assert_eq!(resp.content_type(), Some("text/plain"));
    }

    #[test]
    fn content_type_absent() {
        let resp = response(vec![("x-other", "1")]);
        assert_eq!(resp.content_type(), None);
    }

    #[test]
    fn folded_headers_joins_repeats_with_comma_space() {
        let resp = response(vec![("X-Trace", "alpha"), ("x-trace", "beta"), ("x-one", "1")]);
        let folded = resp.folded_headers();
        assert_eq!(folded["x-trace"], "alpha, beta");
        assert_eq!(folded["x-one"], "1");
    }

    #[test]
    fn method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
