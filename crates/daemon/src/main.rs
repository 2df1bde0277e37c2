//! Recipe Book - Main Entry Point
//! In-memory recipe store served over HTTP

mod settings;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use recipebook_api_http::HttpServer;
use recipebook_core::application::RecipeService;
use recipebook_core::port::id_provider::UuidProvider;
use recipebook_core::port::time_provider::SystemTimeProvider;
use recipebook_infra_memory::InMemoryRecipeRepository;

use crate::settings::{DaemonConfig, LogFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::load().context("Failed to load configuration")?;

    // 2. Initialize logging (guard must outlive the server)
    let _log_guard = init_logging(config.log_format)?;

    info!("Recipe Book v{} starting...", VERSION);
    info!(host = %config.host, port = config.port, "Configuration loaded");

    // 3. Setup dependencies (DI wiring). The store starts empty.
    let repo = Arc::new(InMemoryRecipeRepository::new());
    let service = RecipeService::new(repo, Arc::new(UuidProvider), Arc::new(SystemTimeProvider));

    // 4. Start HTTP server
    let server = HttpServer::new(config.http(), service);
    let listener = server.bind().await?;

    info!("System ready. Press Ctrl+C to shutdown");

    server.serve(listener, shutdown_signal()).await?;

    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) -> Result<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("recipebook=info,tower_http=info"))
        .context("Failed to create env filter")?;

    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(writer))
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(writer))
                .init();
        }
    }

    Ok(guard)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
