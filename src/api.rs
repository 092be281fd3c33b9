// Greeter/Bills HTTP API
//
// Router is a plain value built once and handed to `axum::serve`.

use crate::records::{sample_bills, BillRecord};
use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

/// Address the server binds to
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

pub const GREETING: &str = "Hello, World!";

/// GET / - Plain text greeting
pub async fn hello() -> &'static str {
    GREETING
}

/// GET /api/bills - Fixed bill list as JSON
pub async fn list_bills() -> Json<Vec<BillRecord>> {
    let bills = sample_bills();
    tracing::debug!(count = bills.len(), "listing bills");
    Json(bills)
}

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/api/bills", get(list_bills))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    async fn get_path(uri: &str) -> Response {
        build_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_hello() {
        let response = get_path("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Hello, World!");
    }

    #[tokio::test]
    async fn test_list_bills() {
        let response = get_path("/api/bills").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"[{"id":1,"amount":100,"payee":"John Doe","category":"Groceries","date":"2022-01-01"},{"id":2,"amount":200,"payee":"Jane Smith","category":"Rent","date":"2022-02-01"}]"#
        );
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let first = body_string(get_path("/api/bills").await).await;
        let second = body_string(get_path("/api/bills").await).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let response = get_path("/api/unknown").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
