//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_post, create_user, delete_user, get_post, get_user, health, list_posts,
    list_user_posts, list_users, not_found, ready, update_user,
};
use crate::metrics::track_http;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health).fallback(not_found))
        .route("/health/ready", get(ready).fallback(not_found))
        // User endpoints
        .route(
            "/users",
            get(list_users).post(create_user).fallback(not_found),
        )
        .route(
            "/users/:id",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(not_found),
        )
        // Router requires one parameter name per segment, so `:id` here is the user id.
        .route("/users/:id/posts", get(list_user_posts).fallback(not_found))
        // Post endpoints
        .route(
            "/posts",
            get(list_posts).post(create_post).fallback(not_found),
        )
        .route("/posts/:id", get(get_post).fallback(not_found))
        .fallback(not_found)
        .layer(middleware::from_fn(track_http))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "ok", "version": "0.1.0"})
        );
    }

    #[tokio::test]
    async fn readiness_endpoint_returns_ready() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "ready", "version": "0.1.0"})
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let app = create_router();

        let response = app
            .oneshot(Request::builder().uri("/comments").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Route GET:/comments not found"})
        );
    }

    #[tokio::test]
    async fn user_posts_error_names_user_id() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users/x/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Invalid userId: must be a valid integer"})
        );
    }

    #[tokio::test]
    async fn unsupported_method_returns_json_404() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/users/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Route PATCH:/users/1 not found"})
        );
    }
}
