// fun file!
mod api;
pub mod dtos;
pub mod error;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::{BoxError, Extension, Router, error_handling::HandleErrorLayer};
use lazy_static::lazy_static;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::database::Database;
use crate::server::error::Error;
use crate::server::services::Services;

lazy_static! {
    static ref START_TIME: Instant = Instant::now();
    // express.json() default
    static ref JSON_BODY_LIMIT: usize = 100 * 1024;
}

/// Pins the uptime origin, call first thing in main
pub fn mark_process_start() {
    lazy_static::initialize(&START_TIME);
}

pub fn get_uptime_seconds() -> f64 {
    START_TIME.elapsed().as_secs_f64()
}

pub fn get_app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(config: Arc<AppConfig>, db: Database) -> anyhow::Result<()> {
        let services = Services::new(db, config.clone());
        let router = Self::router(services);

        let port = format!("0.0.0.0:{}", config.port);
        let addr = tokio::net::TcpListener::bind(&port)
            .await
            .with_context(|| format!("couldn't bind {port}"))?;

        info!("Backend API listening on port {}", config.port);
        debug!("routes initialized, listening on {}", &port);

        axum::serve(addr, router)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .context("axum serving failed")?;

        Ok(())
    }

    /// Full route table with every layer applied, split out of `serve` so it can be
    /// driven without a socket.
    pub fn router(services: Services) -> Router {
        Self::with_layers(api::app(), services)
    }

    /// Nests `routes` under `/api` and wraps them in the cors, tracing, timeout and
    /// body limit stack.
    pub fn with_layers(routes: Router, services: Services) -> Router {
        let timeout_secs = services.config.http_timeout_secs;

        // read only endpoints, anyone can call them
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .nest("/api", routes)
            .fallback(Self::handle_404)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                        Self::handle_timeout_error(err, timeout_secs)
                    }))
                    .timeout(Duration::from_secs(timeout_secs))
                    .layer(Extension(services))
                    .layer(DefaultBodyLimit::max(*JSON_BODY_LIMIT)),
            )
            .layer(cors)
    }

    // custom timeout layer
    fn handle_timeout_error(err: BoxError, timeout_secs: u64) -> Error {
        if err.is::<tower::timeout::error::Elapsed>() {
            Error::RequestTimeout(timeout_secs)
        } else {
            Error::InternalServerErrorWithContext(err.to_string())
        }
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("couldn't listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
        info!("signal shutdown");
    }

    async fn handle_404(uri: Uri) -> impl IntoResponse {
        Error::NotFound(format!("{} doesn't exist.", uri.path()))
    }
}
