//! Request dispatch for function-style deployments.
//!
//! A function host hands over a method, a path and an optional body and
//! expects a status code and a JSON body back. This maps those onto the
//! same [`api`](crate::api) operations the HTTP router uses.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api;
use crate::data::AssignmentStore;
use crate::error::ApiError;

use super::layers::ALLOW_ORIGIN;

/// Path prefixes that function hosts put in front of the API routes.
const ROUTE_PREFIXES: [&str; 2] = ["/.netlify/functions/api", "/api"];

/// A response ready to be handed back to a function host.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn not_found() -> Self {
        Self {
            status: 404,
            body: json!({ "error": "Not found" }),
        }
    }

    /// Headers every response carries.
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [
            ("Content-Type", "application/json"),
            ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
        ]
    }
}

impl From<Result<Value, ApiError>> for ApiResponse {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(body) => Self { status: 200, body },
            Err(err) => {
                if let ApiError::Unavailable(cause) = &err {
                    tracing::error!(%cause, "request failed");
                }
                Self {
                    status: err.status(),
                    body: err.body(),
                }
            }
        }
    }
}

/// Route a raw request.
pub async fn dispatch(
    store: &AssignmentStore,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> ApiResponse {
    let route = strip_route_prefix(path);
    let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
    let method = method.to_ascii_uppercase();

    tracing::debug!(%method, route, "dispatching");

    let result = match (method.as_str(), segments.as_slice()) {
        ("GET", ["assignments"]) => encode(api::list_assignments(store).await),
        ("GET", ["assignments", id]) => encode(api::get_assignment(store, id).await),
        ("POST", ["assignments", id, "submit"]) => match parse_body(body) {
            Ok(body) => encode(api::submit(store, id, &body).await),
            Err(err) => Err(err),
        },
        _ => return ApiResponse::not_found(),
    };

    result.into()
}

fn strip_route_prefix(path: &str) -> &str {
    let path = path.split('?').next().unwrap_or_default();
    ROUTE_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .unwrap_or(path)
}

fn parse_body(body: Option<&str>) -> Result<Value, ApiError> {
    serde_json::from_str(body.unwrap_or("{}"))
        .map_err(|err| ApiError::BadRequest(format!("invalid JSON body: {}", err)))
}

fn encode<T: Serialize>(result: Result<T, ApiError>) -> Result<Value, ApiError> {
    serde_json::to_value(result?)
        .map_err(|err| ApiError::Unavailable(format!("failed to encode response: {}", err)))
}
