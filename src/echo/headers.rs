//! Reflection of request headers and URL into the echo response.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, Uri};
use serde::{Deserialize, Serialize};

/// Header name to every value received under it, in arrival order.
pub type ReflectedHeaders = BTreeMap<String, Vec<String>>;

/// Reflects request headers, keyed by canonical MIME name.
///
/// The HTTP stack lowercases header names, so they are re-cased here
/// (`x-forwarded-for` becomes `X-Forwarded-For`). Non-UTF-8 values are
/// rendered lossily rather than dropped.
#[must_use]
pub fn reflect_headers(headers: &HeaderMap) -> ReflectedHeaders {
    let mut reflected = ReflectedHeaders::new();
    for (name, value) in headers {
        reflected
            .entry(canonical_header_name(name.as_str()))
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    reflected
}

/// Upper-cases the first letter of each `-`-separated word and lower-cases the rest.
#[must_use]
pub fn canonical_header_name(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    canonical
}

/// The request URL broken into its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectedUrl {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: String,
    pub query: Option<String>,
    /// Never sent by clients; kept so the shape mirrors a full URL.
    pub fragment: Option<String>,
    /// The request target exactly as received.
    pub raw: String,
}

impl From<&Uri> for ReflectedUrl {
    fn from(uri: &Uri) -> Self {
        Self {
            scheme: uri.scheme_str().map(String::from),
            host: uri.authority().map(|a| a.as_str().to_string()),
            path: uri.path().to_string(),
            query: uri.query().map(String::from),
            fragment: None,
            raw: uri.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn canonicalizes_header_names() {
        assert_eq!(canonical_header_name("x-test"), "X-Test");
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("accept"), "Accept");
        assert_eq!(canonical_header_name("x-forwarded-for"), "X-Forwarded-For");
        assert_eq!(canonical_header_name("www-authenticate"), "Www-Authenticate");
    }

    #[test]
    fn reflects_single_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", HeaderValue::from_static("abc"));

        let reflected = reflect_headers(&headers);
        assert_eq!(reflected["X-Test"], vec!["abc"]);
    }

    #[test]
    fn groups_repeated_headers_in_order() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-for", HeaderValue::from_static("1.2.3.4"));
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));

        let reflected = reflect_headers(&headers);
        assert_eq!(reflected["X-Forwarded-For"], vec!["1.2.3.4", "10.0.0.1"]);
        assert_eq!(reflected.len(), 1);
    }

    #[test]
    fn non_utf8_values_are_kept_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert("x-raw", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let reflected = reflect_headers(&headers);
        assert_eq!(reflected["X-Raw"], vec!["caf\u{fffd}"]);
    }

    #[test]
    fn empty_headers_reflect_as_empty_map() {
        assert!(reflect_headers(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn reflects_origin_form_url() {
        let uri: Uri = "/foo?x=1".parse().unwrap();
        let url = ReflectedUrl::from(&uri);
        assert_eq!(url.path, "/foo");
        assert_eq!(url.query.as_deref(), Some("x=1"));
        assert_eq!(url.scheme, None);
        assert_eq!(url.host, None);
        assert_eq!(url.raw, "/foo?x=1");
    }

    #[test]
    fn reflects_absolute_form_url() {
        let uri: Uri = "http://backend:8020/a/b?q=2".parse().unwrap();
        let url = ReflectedUrl::from(&uri);
        assert_eq!(url.scheme.as_deref(), Some("http"));
        assert_eq!(url.host.as_deref(), Some("backend:8020"));
        assert_eq!(url.path, "/a/b");
        assert_eq!(url.query.as_deref(), Some("q=2"));
    }

    #[test]
    fn url_without_query_has_null_query() {
        let uri: Uri = "/plain".parse().unwrap();
        assert_eq!(ReflectedUrl::from(&uri).query, None);
    }
}
