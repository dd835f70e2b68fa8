//! # verechod: verecho daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the environment-backed version source (adapter)
//! - Construct application services, injecting the source via its port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use verecho_adapter_env::EnvVersionSource;
use verecho_adapter_http_axum::state::AppState;
use verecho_app::services::echo_service::EchoService;
use verecho_app::services::version_service::VersionService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Version source
    let source = EnvVersionSource::new(config.version.env_var.as_str());
    tracing::debug!(var = source.var(), "reading version from environment");

    // HTTP
    let state = AppState::new(VersionService::new(source), EchoService::new());
    let app =
        verecho_adapter_http_axum::router::build_with_body_limit(state, config.server.body_limit);

    let listener = bind(&config).await?;
    eprintln!("{}", ready_message(listener.local_addr()?.port()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("verechod stopped");
    Ok(())
}

/// Bind the HTTP listener on the configured `host:port`.
///
/// A failure here is fatal for the daemon; the error is logged and returned.
async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    let bind_addr = config.bind_addr();
    TcpListener::bind(&bind_addr)
        .await
        .inspect_err(|err| tracing::error!(error = %err, %bind_addr, "failed to bind listener"))
}

fn ready_message(port: u16) -> String {
    format!("> Ready On Server http://localhost:{port}")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
