use anyhow::anyhow;
use axum::http::{Method, Uri};
use service_core::error::AppError;

/// Catch-all for unknown paths and for non-GET methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No route matched");
    AppError::NotFound(anyhow!("no route for {} {}", method, uri.path()))
}
