//! HTTP server wiring: routers, CORS, request tracing, bind and serve.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::{ApiState, health_routes, record_routes};
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    pub fn with_config(config: &Config) -> Self {
        let state = Arc::new(ApiState::from_config(config));
        Self {
            addr: config.socket_addr(),
            router: Self::build_router(state, &config.cors_origins),
        }
    }

    /// Build the combined router. An empty origin list allows any origin.
    pub fn build_router(state: Arc<ApiState>, cors_origins: &[String]) -> Router {
        let cors = if cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins(cors_origins)))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(record_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    pub fn socket_addr(&self) -> &str {
        &self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    pub async fn start(self) -> AppResult<()> {
        let addr: SocketAddr = self
            .addr
            .parse()
            .map_err(|e| AppError::Config(format!("invalid listen address '{}': {e}", self.addr)))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "rstaffrecords API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Parse configured origins, skipping (and reporting) entries that are not
/// valid header values.
fn allowed_origins(cors_origins: &[String]) -> Vec<HeaderValue> {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(origin = %s, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("no valid CORS origin configured, cross-origin requests will be refused");
    }
    origins
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
