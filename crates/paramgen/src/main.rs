mod app;
mod config;
mod error;
mod handlers;
mod region;
mod state;
mod storage;
mod telemetry;

use std::sync::Arc;

use anyhow::Result;
use listenfd::ListenFd;
use tokio::{net::TcpListener, runtime, signal};

use crate::{
    app::create_app,
    config::{Cli, Config},
    region::ResolvedRegion,
    state::AppState,
    storage::DynamoDbRepository,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    telemetry::init(cli.debug);

    let config = Config::from_env(cli)
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;

    if config.debug {
        tracing::info!(
            table_name = %config.table_name,
            listening_port = config.listening_port,
            endpoint_url = ?config.endpoint_url,
            "Debug mode is enabled"
        );
    }

    // Resolved on a single-threaded runtime so AWS_DEFAULT_REGION is written
    // before any worker thread exists.
    let region = runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(region::resolve_region_from_env())
        .inspect_err(|e| tracing::error!(error = %e, "Failed to resolve AWS region"))?;
    region.export();

    runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(config, region))
}

/// Connect to DynamoDB and serve requests until a shutdown signal arrives.
async fn serve(config: Config, region: ResolvedRegion) -> Result<()> {
    let repository =
        DynamoDbRepository::connect(&region.name, config.endpoint_url.as_deref()).await;

    let state = AppState::new(Arc::new(repository), config.table_name.as_str())
        .with_redacted_payloads(config.redact_payloads);

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise bind every interface on the configured port
        None => {
            let addr = format!("0.0.0.0:{}", config.listening_port);
            TcpListener::bind(&addr)
                .await
                .inspect_err(|e| tracing::error!(error = %e, addr = %addr, "Failed to start server"))?
        }
    };

    tracing::info!(
        region = %region.name,
        table_name = %config.table_name,
        "listening on {}",
        listener.local_addr()?
    );

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
