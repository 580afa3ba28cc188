//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared state holding the listening
//! config, the request counter and the host lookup seam), [`build_router`]
//! for constructing the Axum router with middleware layers, and
//! [`shutdown_signal`] for SIGTERM / Ctrl+C handling.

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::EchoConfig;
use crate::counter::RequestCounter;
use crate::echo;
use crate::host::{HostInfo, SystemHost};

pub struct AppState {
    pub config: EchoConfig,
    pub counter: RequestCounter,
    pub host_info: Arc<dyn HostInfo>,
}

impl AppState {
    /// State for a freshly started process: counter at its initial value,
    /// host lookups against the operating system.
    #[must_use]
    pub fn new(config: EchoConfig) -> Self {
        Self {
            config,
            counter: RequestCounter::new(),
            host_info: Arc::new(SystemHost),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(echo::echo_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new()),
        )
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
