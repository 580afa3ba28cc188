//! Webresponse is a diagnostic HTTP echo service.
//!
//! Every request under a configured path prefix is answered with a JSON
//! document naming the host that served it (hostname and interface
//! addresses), a process-wide request counter, and the request's own
//! headers and URL. Point it behind a load balancer or proxy to see which
//! backend answered and what the request looked like on arrival.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`config`] -- Immutable listening configuration built from the CLI.
//! - [`counter`] -- Atomic request counter with wraparound.
//! - [`echo`] -- The echo responder: prefix routing, header and URL
//!   reflection, response encoding.
//! - [`error`] -- Startup error type using `thiserror`.
//! - [`host`] -- Best-effort hostname and interface address lookups behind
//!   the [`HostInfo`](host::HostInfo) trait.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`run`] -- Process bootstrap: bind, serve, graceful shutdown.
//! - [`server`] -- Axum router, shared application state, shutdown signal.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod counter;
pub mod echo;
pub mod error;
pub mod host;
pub mod logging;
pub mod run;
pub mod server;
