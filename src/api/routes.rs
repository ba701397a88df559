//! Route configuration for the Shows API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | / | `hello_world` |
//! | GET | /mirror/{name} | `mirror` |
//! | GET | /health | `health_check` |
//! | GET | /shows | `list_shows` |
//! | POST | /shows | `create_show` |
//! | GET | /shows/{id} | `get_show` |
//! | PUT | /shows/{id} | `update_show` |
//! | DELETE | /shows/{id} | `delete_show` |

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, health_check, hello_world, method_not_allowed, mirror, not_found,
};
use super::shows::{create_show, delete_show, get_show, list_shows, update_show};

/// Creates the API router with all routes and middleware.
///
/// # Example
///
/// ```ignore
/// use shows_api::api::{AppState, create_router};
/// use shows_api::infrastructure::InMemoryShowRepository;
///
/// let router = create_router(AppState::new(InMemoryShowRepository::seeded()));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_world))
        .route("/mirror/{name}", get(mirror))
        .route("/health", get(health_check))
        .route("/shows", get(list_shows).post(create_show))
        .route(
            "/shows/{id}",
            get(get_show).put(update_show).delete(delete_show),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryShowRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(InMemoryShowRepository::seeded()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[rstest]
    #[case("/")]
    #[case("/mirror/someone")]
    #[case("/health")]
    #[case("/shows")]
    #[case("/shows/1")]
    #[tokio::test]
    async fn get_routes_return_200(#[case] uri: &str) {
        let response = create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_route_returns_envelope() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/movies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Resource not found");
    }

    #[rstest]
    #[tokio::test]
    async fn cors_header_present() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }

    #[rstest]
    #[case("PATCH", "/shows/1")]
    #[case("DELETE", "/shows")]
    #[case("POST", "/health")]
    #[tokio::test]
    async fn unsupported_method_returns_envelope(#[case] method: &str, #[case] uri: &str) {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = body_json(response).await;
        assert_eq!(json["code"], 405);
        assert_eq!(json["message"], "Method not allowed");
    }
}
