//! Middleware for the vault relay server

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extract a JSON body from a request
///
/// Malformed bodies (missing fields, non-numeric amounts) surface as a
/// 400 without reaching the handler
#[allow(clippy::needless_pass_by_value)]
pub fn with_json_body<T: DeserializeOwned + Send>(body: Bytes) -> Result<T, warp::Rejection> {
    serde_json::from_slice(&body)
        .map_err(|e| warp::reject::custom(ApiError::BadRequest(format!("Invalid JSON: {}", e))))
}

/// Identity map for a handler's middleware, used to chain together `map`s and
/// `and_then`s
pub async fn identity<T>(res: T) -> T {
    res
}
