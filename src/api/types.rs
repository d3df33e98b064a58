//! Entity and payload types served by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Build a user from borrowed fields.
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// A post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Build a post from borrowed fields.
    pub fn new(id: i64, user_id: i64, title: &str, body: &str) -> Self {
        Self {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Body of a create/update request.
///
/// Every body is accepted. Members are echoed back untouched, except `id`
/// which is always replaced by the id assigned by the handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Read a raw request body the way object spread reads a value.
    ///
    /// An empty body, `null`, numbers and booleans yield no members. Arrays
    /// and strings contribute one member per element, keyed by index. Only
    /// bytes that are not JSON at all are an error.
    pub fn from_body(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let members = match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(map) => map,
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect(),
            Value::String(text) => text
                .chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), Value::from(c.to_string())))
                .collect(),
            Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
        };
        Ok(Self(members))
    }

    /// Merge an assigned id into the payload, overriding any client-supplied id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.0.insert("id".to_string(), Value::from(id));
        self
    }
}

/// Pagination parameters for `GET /posts`. Accepted, never applied.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Health and readiness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" for liveness, "ready" for readiness.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}
