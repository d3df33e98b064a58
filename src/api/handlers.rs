//! HTTP API handlers.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        OriginalUri, Path, Query,
    },
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, warn};

use super::types::{HealthResponse, PageParams, Payload, Post, User};
use crate::error::ApiError;

/// Version reported by the health probes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id assigned to every created record.
const CREATED_ID: i64 = 1;

/// Parse a base-10 integer path parameter.
///
/// Leading whitespace and an optional sign are skipped, then the leading run
/// of decimal digits is read and anything after it ignored, so `"12abc"` is 12
/// and `"1.5"` is 1. Fails when there are no digits or they overflow `i64`.
pub fn parse_id(name: &'static str, raw: &str) -> Result<i64, ApiError> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    let sign_len = trimmed.len() - unsigned.len();

    trimmed[..sign_len + digits.len()]
        .parse::<i64>()
        .map_err(|_| reject_id(name, raw))
}

/// Extract and parse an integer path parameter, rejecting undecodable segments
/// with the same error as non-integers.
fn path_id(
    name: &'static str,
    path: Result<Path<String>, PathRejection>,
) -> Result<i64, ApiError> {
    match path {
        Ok(Path(raw)) => parse_id(name, &raw),
        Err(rejection) => {
            debug!(%rejection, "path parameter rejected by extractor");
            Err(reject_id(name, "<undecodable>"))
        }
    }
}

fn reject_id(name: &'static str, raw: &str) -> ApiError {
    warn!(param = name, value = raw, "rejecting non-integer path parameter");
    ApiError::InvalidInteger { name }
}

/// Read a request body, accepting anything that is empty or JSON.
fn payload(body: Result<Bytes, BytesRejection>) -> Result<Payload, ApiError> {
    Ok(Payload::from_body(&body?)?)
}

/// Liveness probe - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}

/// Readiness probe - always returns 200.
pub async fn ready() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ready",
        version: VERSION,
    })
}

/// `GET /users`.
pub async fn list_users() -> Json<Vec<User>> {
    Json(vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
    ])
}

/// `GET /users/:id`.
pub async fn get_user(
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let id = path_id("id", id)?;
    debug!(id, "fetching user");
    Ok(Json(User::new(id, "Sample User", "user@example.com")))
}

/// `POST /users` - echoes the body with the assigned id.
pub async fn create_user(
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let user = payload(body)?.with_id(CREATED_ID);
    debug!(id = CREATED_ID, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /users/:id` - echoes the body with the parsed id.
pub async fn update_user(
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Payload>, ApiError> {
    let id = path_id("id", id)?;
    let user = payload(body)?.with_id(id);
    debug!(id, "updated user");
    Ok(Json(user))
}

/// `DELETE /users/:id`.
pub async fn delete_user(
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("id", id)?;
    debug!(id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /users/:userId/posts`.
pub async fn list_user_posts(
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let user_id = path_id("userId", user_id)?;
    debug!(user_id, "listing posts for user");
    Ok(Json(vec![Post::new(1, user_id, "User Post", "Content")]))
}

/// `GET /posts`. Pagination parameters are logged and otherwise ignored.
pub async fn list_posts(Query(page): Query<PageParams>) -> Json<Vec<Post>> {
    debug!(limit = ?page.limit, offset = ?page.offset, "listing posts");
    Json(vec![
        Post::new(1, 1, "First Post", "Hello world"),
        Post::new(2, 1, "Second Post", "Another post"),
    ])
}

/// `GET /posts/:id`.
pub async fn get_post(
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let id = path_id("id", id)?;
    debug!(id, "fetching post");
    Ok(Json(Post::new(id, 1, "Sample Post", "Post body")))
}

/// `POST /posts` - echoes the body with the assigned id.
pub async fn create_post(
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let post = payload(body)?.with_id(CREATED_ID);
    debug!(id = CREATED_ID, "created post");
    Ok((StatusCode::CREATED, Json(post)))
}

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}
