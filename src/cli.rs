//! Command-line interface definitions using clap derive macros.
//!
//! The service has no subcommands: [`Cli`] carries the listening
//! configuration and the logging flags directly. Every flag has an
//! environment variable equivalent for container deployments.

use clap::{Parser, ValueEnum};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    ", built ",
    env!("WEBRESPONSE_BUILD_TIME"),
    ", git hash ",
    env!("WEBRESPONSE_GIT_HASH")
);

#[derive(Parser, Debug)]
#[command(
    name = "webresponse",
    version = LONG_VERSION,
    about = "Diagnostic HTTP echo service",
    long_about = "Answers every request under a path prefix with a JSON document \
        describing this host (hostname, interface addresses), a request counter, \
        and the request's own headers and URL.",
    after_help = "\x1b[1mExamples:\x1b[0m\n  \
        webresponse                              Serve / on port 8020\n  \
        webresponse -p 9000 --path /whoami       Serve /whoami on port 9000\n  \
        webresponse --log-level info --json      Quiet, machine-readable logs"
)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 8020)]
    pub port: u16,

    /// Path prefix the echo responder is mounted under
    #[arg(long, env = "WEBRESPONSE_PATH", default_value = "/")]
    pub path: String,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(
        short,
        long,
        env = "LOG_LEVEL",
        default_value = "debug",
        help_heading = "Logging"
    )]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long, help_heading = "Logging")]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty", help_heading = "Logging")]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
