//! The echo responder.
//!
//! [`echo_handler`] is the Axum fallback that receives every request,
//! scopes it to the configured path prefix ([`routing`]), and answers with
//! an [`EchoResponse`]: hostname, interface addresses, the request counter
//! and a reflection of the request's headers and URL ([`headers`]).

pub mod headers;
pub mod routing;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri, Version};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::host;
use crate::server::AppState;
use headers::{ReflectedHeaders, ReflectedUrl};
use routing::RouteMatch;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoResponse {
    pub host: String,
    pub ips: Vec<String>,
    pub count: i32,
    pub header: ReflectedHeaders,
    pub url: ReflectedUrl,
}

/// Builds the response document for one request. Increments the counter.
#[must_use]
pub fn build_response(state: &AppState, uri: &Uri, req_headers: &HeaderMap) -> EchoResponse {
    let count = state.counter.increment();
    EchoResponse {
        host: host::resolve_hostname(state.host_info.as_ref()),
        ips: host::collect_ips(state.host_info.as_ref()),
        count,
        header: headers::reflect_headers(req_headers),
        url: ReflectedUrl::from(uri),
    }
}

pub async fn echo_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    version: Version,
    req_headers: HeaderMap,
) -> Response {
    match routing::match_request(&state.config.path_prefix, uri.path(), &method) {
        RouteMatch::Echo => {}
        RouteMatch::NotFound => {
            tracing::debug!(method = %method, path = %uri.path(), "outside path prefix");
            return StatusCode::NOT_FOUND.into_response();
        }
        RouteMatch::MethodNotAllowed => {
            tracing::debug!(method = %method, path = %uri.path(), "method not allowed");
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, HeaderValue::from_static(routing::ALLOW_HEADER))],
            )
                .into_response();
        }
    }

    let response = build_response(&state, &uri, &req_headers);

    tracing::debug!(
        method = %method,
        uri = %uri,
        version = ?version,
        headers = ?req_headers,
        remote_addr = %addr,
        response = ?response,
        "handling incoming request"
    );

    match serde_json::to_vec(&response) {
        Ok(mut body) => {
            body.push(b'\n');
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, count = response.count, "failed to encode response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
