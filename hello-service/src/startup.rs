use crate::handlers;
use axum::{middleware::from_fn, routing::get, Router};
use service_core::config::Config;
use service_core::error::AppError;
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{http_trace_layer, request_id_middleware},
};
use service_core::shutdown::shutdown_signal;
use std::future::Future;
use tokio::net::TcpListener;

/// Routes and middleware, with no socket attached.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
}

pub struct Application {
    port: u16,
    host: String,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the configured address. Nothing is served until one of the
    /// `run_*` methods is awaited.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let address = config.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::Bind {
                addr: address.clone(),
                source: e,
            }
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Starting {} on {}:{}", config.service_name, config.host, port);

        Ok(Self {
            port,
            host: config.host,
            listener,
            router: build_router(),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Serve until Ctrl+C or SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    pub async fn run_until<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}

/// Bind and serve until a shutdown signal. A bind failure is returned
/// immediately so the caller can flush logs before exiting.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let app = Application::build(config).await?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })
}
