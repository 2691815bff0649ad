use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
///
/// `/health` отвечает JSON, всё остальное отдаётся из `dist`. Неизвестные
/// пути получают `index.html`, маршрутизацию делает фронтенд.
pub fn configure_routes(dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(health))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
