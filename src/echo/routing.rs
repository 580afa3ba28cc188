//! Path-prefix and method matching for the echo responder.
//!
//! A request reaches the responder when its path starts with the
//! configured prefix (a plain string prefix, so `/` matches everything)
//! and its method is one of [`ECHO_METHODS`].

use axum::http::Method;

pub const ECHO_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// Value of the `Allow` header sent with `405` responses.
pub const ALLOW_HEADER: &str = "GET, POST, PUT, DELETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Echo,
    MethodNotAllowed,
    NotFound,
}

#[must_use]
pub fn match_request(prefix: &str, path: &str, method: &Method) -> RouteMatch {
    if !path.starts_with(prefix) {
        RouteMatch::NotFound
    } else if ECHO_METHODS.contains(method) {
        RouteMatch::Echo
    } else {
        RouteMatch::MethodNotAllowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_prefix_matches_everything() {
        assert_eq!(match_request("/", "/", &Method::GET), RouteMatch::Echo);
        assert_eq!(
            match_request("/", "/deep/nested/path", &Method::DELETE),
            RouteMatch::Echo
        );
    }

    #[test]
    fn nested_prefix_matches_itself_and_below() {
        assert_eq!(match_request("/echo", "/echo", &Method::GET), RouteMatch::Echo);
        assert_eq!(
            match_request("/echo", "/echo/foo", &Method::PUT),
            RouteMatch::Echo
        );
    }

    #[test]
    fn paths_outside_prefix_are_not_found() {
        assert_eq!(
            match_request("/echo", "/other", &Method::GET),
            RouteMatch::NotFound
        );
        assert_eq!(match_request("/echo", "/", &Method::GET), RouteMatch::NotFound);
    }

    #[test]
    fn all_echo_methods_match() {
        for method in &ECHO_METHODS {
            assert_eq!(match_request("/", "/x", method), RouteMatch::Echo);
        }
    }

    #[test]
    fn other_methods_are_rejected_inside_prefix() {
        assert_eq!(
            match_request("/", "/x", &Method::PATCH),
            RouteMatch::MethodNotAllowed
        );
        assert_eq!(
            match_request("/", "/x", &Method::HEAD),
            RouteMatch::MethodNotAllowed
        );
    }

    #[test]
    fn unknown_path_wins_over_bad_method() {
        assert_eq!(
            match_request("/echo", "/other", &Method::PATCH),
            RouteMatch::NotFound
        );
    }
}
