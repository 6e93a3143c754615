/// Identity middleware
///
/// Every task endpoint is scoped to a caller identity supplied in the
/// `x-user-id` header. The identifier is opaque to the server: it is not
/// authenticated, only validated for shape, and it becomes the key that
/// selects the caller's task file on disk.
///
/// Requests without the header, or with a value that is not filesystem-safe,
/// are rejected with 401 before reaching any handler.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::get, Router};
/// use eisentask_api::middleware::identity::require_identity;
///
/// let app: Router = Router::new()
///     .route("/tasks", get(|| async { "ok" }))
///     .layer(middleware::from_fn(require_identity));
/// ```
use crate::error::ApiError;
use axum::{extract::Request, middleware::Next, response::Response};

/// Header carrying the caller identity
pub const USER_ID_HEADER: &str = "x-user-id";

/// Maximum accepted identifier length in bytes
pub const MAX_USER_ID_LEN: usize = 128;

/// Caller identity extracted from the request
///
/// Inserted into request extensions by [`require_identity`] and pulled
/// out by handlers via Axum's `Extension` extractor.
#[derive(Debug, Clone)]
pub struct UserContext {
    /// Opaque user identifier from the `x-user-id` header
    pub user_id: String,
}

/// Checks that an identifier is safe to use as a file name
///
/// Accepts 1 to 128 characters from `[A-Za-z0-9._-]`. This rules out
/// path separators, traversal sequences, and anything else that could
/// escape the data directory.
pub fn is_valid_user_id(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_USER_ID_LEN {
        return false;
    }

    value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'-')
}

/// Identity middleware layer
///
/// Extracts and validates the `x-user-id` header, then injects a
/// [`UserContext`] into request extensions.
pub async fn require_identity(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::Unauthorized("Missing x-user-id header".to_string()))?;

    let user_id = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid x-user-id header".to_string()))?;

    if !is_valid_user_id(user_id) {
        return Err(ApiError::Unauthorized("Invalid x-user-id header".to_string()));
    }

    let user_id = user_id.to_string();

    req.extensions_mut().insert(UserContext { user_id });

    Ok(next.run(req).await)
}
