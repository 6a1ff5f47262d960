use axum::response::Html;

/// Body served on `GET /`. Health probes only look at the status code.
pub const GREETING: &str = "Hello from Express on Bun!";

pub async fn root() -> Html<&'static str> {
    Html(GREETING)
}
