use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::shared::format::format_size;

/// Одна строка журнала запросов.
fn format_line(
    at: DateTime<Utc>,
    elapsed: Duration,
    size: Option<usize>,
    status: StatusCode,
    method: &Method,
    path: &str,
) -> String {
    // cyan for 200, yellow otherwise
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    let size = size.map(format_size).unwrap_or_else(|| "error".to_string());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        at.format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль время (UTC), длительность, размер ответа, статус,
/// метод и путь.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (Some(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("failed to buffer response for {}: {}", uri.path(), e);
            (None, Body::default())
        }
    };

    println!(
        "{}",
        format_line(Utc::now(), start.elapsed(), size, parts.status, &method, uri.path())
    );
    tracing::debug!(status = parts.status.as_u16(), %method, path = uri.path(), "request served");

    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2024, 2, 8, 14, 5, 9).unwrap();
        let line = format_line(
            at,
            Duration::from_millis(12),
            Some(2048),
            StatusCode::OK,
            &Method::GET,
            "/health",
        );
        assert!(line.starts_with("\x1b[36m14:05:09\x1b[0m"));
        assert!(line.contains("12ms"));
        assert!(line.contains("2.048 B"));
        assert!(line.ends_with("200    GET /health"));
    }

    #[test]
    fn test_format_line_without_body() {
        let at = Utc.with_ymd_and_hms(2024, 2, 8, 0, 0, 0).unwrap();
        let line = format_line(
            at,
            Duration::from_millis(1),
            None,
            StatusCode::NOT_FOUND,
            &Method::GET,
            "/missing.js",
        );
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("error"));
        assert!(line.contains("404"));
    }

    #[test]
    fn test_method_is_right_aligned() {
        let at = Utc.with_ymd_and_hms(2024, 2, 8, 0, 0, 0).unwrap();
        let line = format_line(at, Duration::ZERO, Some(0), StatusCode::OK, &Method::POST, "/");
        assert!(line.ends_with("200   POST /"));
        let line = format_line(at, Duration::ZERO, Some(0), StatusCode::OK, &Method::DELETE, "/");
        assert!(line.ends_with("200 DELETE /"));
    }
}
