//! Process bootstrap: logging, configuration, bind, serve.
//!
//! Builds the immutable [`EchoConfig`] from the CLI, binds the listener,
//! and runs the Axum server until SIGTERM / Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::Cli;
use crate::config::EchoConfig;
use crate::error::WebResponseError;
use crate::logging;
use crate::server::{self, AppState};

pub async fn execute(cli: Cli) -> Result<(), WebResponseError> {
    let log_format = logging::resolve_format(cli.pretty, cli.json);
    logging::init(&cli.log_level, log_format);

    let config = EchoConfig::from_args(&cli).inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    let addr = config.addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!(addr = %addr, error = %e, "failed to bind listener"))?;

    tracing::info!(
        addr = %addr,
        port = addr.port(),
        path = %config.path_prefix,
        version = env!("CARGO_PKG_VERSION"),
        "webresponse started"
    );

    let state = Arc::new(AppState::new(config));
    let router = server::build_router(state);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(server::shutdown_signal())
    .await?;

    tracing::info!("webresponse stopped");
    Ok(())
}
