//! HTTP Server
//!
//! Builds the axum router and serves it over TCP.

use crate::handler;
use axum::routing::{get, put};
use axum::Router;
use recipebook_core::application::RecipeService;
use recipebook_core::error::{AppError, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 5000;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the application router around a service
pub fn router(service: RecipeService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handler::health))
        .route(
            "/recipes",
            get(handler::list_recipes).post(handler::create_recipe),
        )
        .route("/recipes/search/:tag", get(handler::search_recipes))
        .route(
            "/recipes/:id",
            get(handler::get_recipe)
                .put(handler::update_recipe)
                .delete(handler::delete_recipe),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(service)
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    service: RecipeService,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: RecipeService) -> Self {
        Self { config, service }
    }

    /// Bind the configured address
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.address();

        TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Config(format!("Failed to bind {}: {}", addr, e)))
    }

    /// Serve on `listener` until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .map_err(|e| AppError::Internal(format!("Listener has no local address: {}", e)))?;

        info!(address = %local_addr, "HTTP server listening");

        axum::serve(listener, router(self.service))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::Internal(format!("HTTP server failed: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
