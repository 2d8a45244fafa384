use http::StatusCode;

/// Liveness probe; answers without touching the provider
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
