//! HTTP Middleware
//!
//! 按状态码记录请求日志：5xx 记 error，4xx 记 warn，其余只在 debug 级别输出。

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// HTTP 状态码错误日志中间件
///
/// 错误响应体本身在 `ApiError::into_response()` 中记录，这里补充方法、路径和耗时。
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %uri, status, elapsed_ms, "HTTP server error");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %uri, status, elapsed_ms, "HTTP client error");
    } else {
        tracing::debug!(%method, %uri, status, elapsed_ms, "HTTP request completed");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::{delete, get},
        Router,
    };
    use tower::util::ServiceExt;

    async fn conflict_handler() -> StatusCode {
        StatusCode::CONFLICT
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn router() -> Router {
        Router::new()
            .route("/books", get(|| async { "[]" }))
            .route("/authors/1", delete(conflict_handler))
            .route("/broken", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_responses_through() {
        assert_eq!(status_of("GET", "/books").await, StatusCode::OK);
        assert_eq!(status_of("DELETE", "/authors/1").await, StatusCode::CONFLICT);
        assert_eq!(
            status_of("GET", "/broken").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unmatched_route_still_logged() {
        assert_eq!(status_of("GET", "/nowhere").await, StatusCode::NOT_FOUND);
    }
}
