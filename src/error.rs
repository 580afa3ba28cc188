//! Unified error type for webresponse.
//!
//! Only startup can fail: the request path degrades to fallbacks instead
//! of returning errors. [`WebResponseError`] uses `thiserror` for its
//! `Display` and `Error` derives, and messages carry a hint toward the fix.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WebResponseError {
    #[error("Invalid path prefix '{path}': {reason}")]
    InvalidPathPrefix { path: String, reason: &'static str },

    #[error("Invalid listen address '{addr}': {source}")]
    AddressParse {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
